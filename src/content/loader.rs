//! Content loader - turns markdown sources into posts

use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, Post};
use crate::helpers::{normalize_date, today};
use crate::Folio;

/// Reading speed used for the reading time estimate
pub const WORDS_PER_MINUTE: usize = 200;

/// Character budget of an auto-generated excerpt
pub const EXCERPT_LENGTH: usize = 160;

/// One markdown document: where it came from and its full text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Path-like identity, only used as the slug fallback
    pub identity: String,
    /// Complete document including its front-matter
    pub raw: String,
}

impl Source {
    pub fn new(identity: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            raw: raw.into(),
        }
    }
}

/// Loads posts from the configured content directory
pub struct ContentLoader<'a> {
    folio: &'a Folio,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Collect every markdown file directly inside the content directory
    ///
    /// Sources come back ordered by path so that posts sharing a publish date
    /// always load in the same order.
    pub fn discover(&self) -> Result<Vec<Source>> {
        let content_dir = &self.folio.content_dir;
        if !content_dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let mut sources = Vec::new();

        // Only top-level files are posts; subfolders (drafts and the like) are not
        for entry in WalkDir::new(content_dir)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            match fs::read_to_string(path) {
                Ok(raw) => {
                    let identity = path
                        .strip_prefix(&self.folio.base_dir)
                        .unwrap_or(path)
                        .to_string_lossy()
                        .to_string();
                    sources.push(Source { identity, raw });
                }
                Err(e) => {
                    tracing::warn!("Failed to read post {:?}: {}", path, e);
                }
            }
        }

        sources.sort_by(|a, b| a.identity.cmp(&b.identity));
        Ok(sources)
    }

    /// Load all posts, newest first
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let sources = self.discover()?;
        let posts = load_all_posts(&sources);
        tracing::debug!("Loaded {} posts from {:?}", posts.len(), self.folio.content_dir);
        Ok(posts)
    }
}

/// Parse every source and sort the result by publish date, newest first
///
/// The sort is stable: posts published on the same day keep source order.
/// Duplicate slugs are not looked at here, see [`super::Blog`].
pub fn load_all_posts(sources: &[Source]) -> Vec<Post> {
    let today = today();

    let mut posts: Vec<Post> = sources
        .iter()
        .map(|source| build_post(&source.identity, &source.raw, today))
        .collect();

    posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    posts
}

/// Turn one markdown document into a post
///
/// Never fails: every missing or malformed field falls back to a default.
pub fn parse_post(identity: &str, raw: &str) -> Post {
    build_post(identity, raw, today())
}

fn build_post(identity: &str, raw: &str, today: NaiveDate) -> Post {
    let (fm, body) = FrontMatter::parse(raw);

    let slug = fm.slug().unwrap_or_else(|| slug_from_identity(identity));
    let title = fm.title().unwrap_or_else(|| "Untitled".to_string());
    let reading_time = fm
        .reading_time()
        .unwrap_or_else(|| estimate_reading_time(body));
    let excerpt = fm.excerpt().unwrap_or_else(|| auto_excerpt(body));

    let published_at = match fm.published_at().and_then(normalize_date) {
        Some(date) => date,
        None => {
            if fm.get("publishedAt").is_some() {
                tracing::debug!("Unparseable publishedAt in {}, using today", identity);
            }
            today
        }
    };

    // An updatedAt that is present but unparseable still counts as "updated today"
    let updated_at = if fm.get("updatedAt").is_some() {
        Some(fm.updated_at().and_then(normalize_date).unwrap_or(today))
    } else {
        None
    };

    Post {
        slug,
        title,
        excerpt,
        content: body.to_string(),
        cover_image: fm.cover_image(),
        tags: fm.tags(),
        published_at,
        updated_at,
        reading_time,
        source: identity.to_string(),
    }
}

/// Estimate minutes to read a body at [`WORDS_PER_MINUTE`], never less than one
pub fn estimate_reading_time(body: &str) -> u32 {
    let words = body.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE);
    minutes.max(1).try_into().unwrap_or(u32::MAX)
}

/// Slug fallback: the file name with its markdown extension removed
pub fn slug_from_identity(identity: &str) -> String {
    let name = identity.rsplit(['/', '\\']).next().unwrap_or(identity);
    name.strip_suffix(".md")
        .or_else(|| name.strip_suffix(".markdown"))
        .unwrap_or(name)
        .to_string()
}

/// First [`EXCERPT_LENGTH`] characters of the body, flattened to one line
fn auto_excerpt(body: &str) -> String {
    let flattened: String = body
        .chars()
        .take(EXCERPT_LENGTH)
        .map(|c| if c == '#' || c == '\n' { ' ' } else { c })
        .collect();
    format!("{}...", flattened.trim())
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
