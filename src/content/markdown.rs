//! Markdown rendering for the reading view

use anyhow::Result;
use pulldown_cmark::{
    html, CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd,
};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::HighlightConfig;
use crate::helpers::heading_id;

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    line_numbers: bool,
}

/// A heading whose id is only known once its text has been seen
struct PendingHeading<'a> {
    level: HeadingLevel,
    classes: Vec<CowStr<'a>>,
    attrs: Vec<(CowStr<'a>, Option<CowStr<'a>>)>,
    text: String,
    events: Vec<Event<'a>>,
}

/// Fenced or indented code being collected for highlighting
struct CodeBlock {
    lang: Option<String>,
    content: String,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_options("base16-ocean.dark", false)
    }

    /// Create with custom settings
    pub fn with_options(theme: &str, line_numbers: bool) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
            line_numbers,
        }
    }

    /// Create from the site's highlight settings
    pub fn from_config(config: &HighlightConfig) -> Self {
        Self::with_options(&config.theme, config.line_number)
    }

    /// Render markdown to HTML
    ///
    /// Headings h1-h4 get the same anchor ids the table of contents links to,
    /// and absolute links open in a new tab.
    pub fn render(&self, markdown: &str) -> Result<String> {
        // Headings must reach heading_id() exactly as written, so no smart
        // punctuation and no `{#id}` attribute blocks
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut code_block: Option<CodeBlock> = None;
        let mut heading: Option<PendingHeading> = None;
        let mut in_external_link = false;

        for event in parser {
            if let Some(block) = code_block.as_mut() {
                match event {
                    Event::End(TagEnd::CodeBlock) => {
                        let highlighted =
                            self.highlight_code(&block.content, block.lang.as_deref());
                        events.push(Event::Html(CowStr::from(highlighted)));
                        code_block = None;
                    }
                    Event::Text(text) => block.content.push_str(&text),
                    _ => {}
                }
                continue;
            }

            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                    code_block = Some(CodeBlock {
                        lang,
                        content: String::new(),
                    });
                }
                Event::Start(Tag::Heading {
                    level,
                    classes,
                    attrs,
                    ..
                }) if is_anchored(level) => {
                    heading = Some(PendingHeading {
                        level,
                        classes,
                        attrs,
                        text: String::new(),
                        events: Vec::new(),
                    });
                }
                Event::End(TagEnd::Heading(level)) if heading.is_some() => {
                    if let Some(h) = heading.take() {
                        let id = CowStr::from(heading_id(&h.text));
                        events.push(Event::Start(Tag::Heading {
                            level: h.level,
                            id: Some(id),
                            classes: h.classes,
                            attrs: h.attrs,
                        }));
                        events.extend(h.events);
                        events.push(Event::End(TagEnd::Heading(level)));
                    }
                }
                Event::Start(Tag::Link {
                    dest_url, title, ..
                }) if is_external(&dest_url) => {
                    in_external_link = true;
                    let title_attr = if title.is_empty() {
                        String::new()
                    } else {
                        format!(r#" title="{}""#, html_escape(&title))
                    };
                    let open = format!(
                        r#"<a href="{}"{} target="_blank" rel="noopener noreferrer">"#,
                        html_escape(&dest_url),
                        title_attr
                    );
                    let open = Event::InlineHtml(CowStr::from(open));
                    push_event(&mut events, &mut heading, open);
                }
                Event::End(TagEnd::Link) if in_external_link => {
                    in_external_link = false;
                    let close = Event::InlineHtml(CowStr::from("</a>"));
                    push_event(&mut events, &mut heading, close);
                }
                other => {
                    if let (Some(h), Event::Text(text) | Event::Code(text)) =
                        (heading.as_mut(), &other)
                    {
                        h.text.push_str(text);
                    }
                    push_event(&mut events, &mut heading, other);
                }
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        // Try to find syntax for the language
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next());

        let Some(theme) = theme else {
            return plain_code_block(code, lang);
        };

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(highlighted) => {
                if self.line_numbers {
                    self.add_line_numbers(&highlighted, lang)
                } else {
                    format!(
                        r#"<figure class="highlight {}">{}</figure>"#,
                        lang, highlighted
                    )
                }
            }
            Err(e) => {
                tracing::debug!("Highlighting {} failed: {}", lang, e);
                plain_code_block(code, lang)
            }
        }
    }

    /// Add line numbers to highlighted code
    fn add_line_numbers(&self, code: &str, lang: &str) -> String {
        let lines: Vec<&str> = code.lines().collect();

        let gutter = (1..=lines.len())
            .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
            .collect::<Vec<_>>()
            .join("\n");
        let code_lines = lines.join("\n");

        format!(
            r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></figure>"#,
            lang, gutter, code_lines
        )
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Send an event into the pending heading if there is one, else the output
fn push_event<'a>(
    events: &mut Vec<Event<'a>>,
    heading: &mut Option<PendingHeading<'a>>,
    event: Event<'a>,
) {
    match heading {
        Some(h) => h.events.push(event),
        None => events.push(event),
    }
}

fn is_anchored(level: HeadingLevel) -> bool {
    matches!(
        level,
        HeadingLevel::H1 | HeadingLevel::H2 | HeadingLevel::H3 | HeadingLevel::H4
    )
}

fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn plain_code_block(code: &str, lang: &str) -> String {
    format!(
        r#"<pre><code class="language-{}">{}</code></pre>"#,
        lang,
        html_escape(code)
    )
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
