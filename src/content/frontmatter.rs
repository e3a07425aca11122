//! Front-matter parsing
//!
//! The YAML block is read into a loosely typed mapping first. Every field is
//! then pulled out by its own accessor, and each accessor decides on its own
//! what counts as "absent". Nothing here returns an error: a post with broken
//! metadata still loads, it just falls back to defaults.

use serde_yaml::{Mapping, Value};

/// Front-matter data from a post
#[derive(Debug, Clone, Default)]
pub struct FrontMatter {
    fields: Mapping,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, body)
    pub fn parse(content: &str) -> (Self, &str) {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let Some((yaml, body)) = split_block(content) else {
            return (FrontMatter::default(), content);
        };

        if yaml.trim().is_empty() {
            return (FrontMatter::default(), body);
        }

        match serde_yaml::from_str::<Value>(yaml) {
            Ok(Value::Mapping(fields)) => (Self { fields }, body),
            Ok(other) => {
                tracing::debug!("Front-matter is not a mapping ({:?}), ignoring it", other);
                (FrontMatter::default(), body)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse YAML front-matter, treating as content: {}",
                    e
                );
                (FrontMatter::default(), content)
            }
        }
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn title(&self) -> Option<String> {
        self.non_empty_string("title")
    }

    pub fn slug(&self) -> Option<String> {
        self.non_empty_string("slug")
    }

    pub fn excerpt(&self) -> Option<String> {
        self.non_empty_string("excerpt")
    }

    /// Cover image, passed through as written
    pub fn cover_image(&self) -> Option<String> {
        self.get("coverImage").and_then(scalar_to_string)
    }

    /// Tags in authored order; a bare string counts as a single tag
    pub fn tags(&self) -> Vec<String> {
        match self.get("tags") {
            Some(Value::Sequence(items)) => items.iter().filter_map(scalar_to_string).collect(),
            Some(value) => scalar_to_string(value).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// Unparsed `publishedAt` value
    pub fn published_at(&self) -> Option<&str> {
        self.get("publishedAt").and_then(Value::as_str)
    }

    /// Unparsed `updatedAt` value
    pub fn updated_at(&self) -> Option<&str> {
        self.get("updatedAt").and_then(Value::as_str)
    }

    /// Reading time override, only when it is a positive number
    pub fn reading_time(&self) -> Option<u32> {
        let minutes = match self.get("readingTime")? {
            Value::Number(n) => n.as_f64()?,
            Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };

        if minutes.is_finite() && minutes > 0.0 {
            Some(minutes.ceil().min(u32::MAX as f64) as u32)
        } else {
            None
        }
    }

    fn non_empty_string(&self, key: &str) -> Option<String> {
        self.get(key)
            .and_then(scalar_to_string)
            .filter(|s| !s.is_empty())
    }
}

/// Split a `---` delimited block off the top of a document
///
/// The block closes on a line holding only `---` or `...`. The line break
/// after the closing line belongs to the block, the rest is body.
fn split_block(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

/// Render a YAML scalar as text; collections and nulls yield `None`
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
slug: hello
coverImage: /images/hello.png
publishedAt: 2024-01-15
readingTime: 4
tags:
  - rust
  - web
---

This is the content.
"#;

        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title(), Some("Hello World".to_string()));
        assert_eq!(fm.slug(), Some("hello".to_string()));
        assert_eq!(fm.cover_image(), Some("/images/hello.png".to_string()));
        assert_eq!(fm.published_at(), Some("2024-01-15"));
        assert_eq!(fm.reading_time(), Some(4));
        assert_eq!(fm.tags(), vec!["rust", "web"]);
        assert_eq!(body, "\nThis is the content.\n");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "Just a body.\n";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title(), None);
        assert!(fm.tags().is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unclosed_block_is_body() {
        let content = "---\ntitle: Never closed\n\nBody";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title(), None);
        assert_eq!(body, content);
    }

    #[test]
    fn test_empty_block() {
        let (fm, body) = FrontMatter::parse("---\n---\nBody");
        assert_eq!(fm.title(), None);
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_dot_terminator_and_crlf() {
        let content = "---\r\ntitle: Windows\r\n...\r\nBody\r\n";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title(), Some("Windows".to_string()));
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn test_malformed_yaml_degrades() {
        let content = "---\ntitle: [unclosed\n---\nBody";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title(), None);
        assert_eq!(body, content);
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let (fm, _) = FrontMatter::parse("---\ntitle: ''\nslug: ''\nexcerpt: ''\n---\n");
        assert_eq!(fm.title(), None);
        assert_eq!(fm.slug(), None);
        assert_eq!(fm.excerpt(), None);
    }

    #[test]
    fn test_single_string_tag() {
        let (fm, _) = FrontMatter::parse("---\ntags: Notes\n---\n");
        assert_eq!(fm.tags(), vec!["Notes"]);
    }

    #[test]
    fn test_duplicate_tags_are_kept() {
        let (fm, _) = FrontMatter::parse("---\ntags: [rust, rust, web]\n---\n");
        assert_eq!(fm.tags(), vec!["rust", "rust", "web"]);
    }

    #[test]
    fn test_reading_time_must_be_positive() {
        let (fm, _) = FrontMatter::parse("---\nreadingTime: 0\n---\n");
        assert_eq!(fm.reading_time(), None);
        let (fm, _) = FrontMatter::parse("---\nreadingTime: -3\n---\n");
        assert_eq!(fm.reading_time(), None);
        let (fm, _) = FrontMatter::parse("---\nreadingTime: soon\n---\n");
        assert_eq!(fm.reading_time(), None);
        let (fm, _) = FrontMatter::parse("---\nreadingTime: 2.5\n---\n");
        assert_eq!(fm.reading_time(), Some(3));
    }

    #[test]
    fn test_numeric_title_is_stringified() {
        let (fm, _) = FrontMatter::parse("---\ntitle: 2024\n---\n");
        assert_eq!(fm.title(), Some("2024".to_string()));
    }
}
