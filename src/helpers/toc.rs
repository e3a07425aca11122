//! Table of contents extraction for the reading view

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::slug::heading_id;

lazy_static! {
    /// `##` through `####` headings; `#` is the post title and is left out
    static ref HEADING_RE: Regex = Regex::new(r"(?m)^(#{2,4})[ \t]+(.+)$").unwrap();
}

/// A single table of contents entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocItem {
    /// Anchor id, matching the id the renderer puts on the heading
    pub id: String,
    pub text: String,
    /// Heading depth (2-4)
    pub level: usize,
}

/// Extract the table of contents from a markdown body
pub fn extract_headings(markdown: &str) -> Vec<TocItem> {
    HEADING_RE
        .captures_iter(markdown)
        .map(|caps| {
            let text = caps[2].trim().to_string();
            TocItem {
                id: heading_id(&text),
                level: caps[1].len(),
                text,
            }
        })
        .collect()
}
