//! Post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Slug (URL-friendly name)
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short preview text
    pub excerpt: String,

    /// Raw markdown body
    pub content: String,

    /// Card/header image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    /// Post tags, as authored
    pub tags: Vec<String>,

    /// Publication date
    pub published_at: NaiveDate,

    /// Last updated date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDate>,

    /// Estimated minutes to read
    pub reading_time: u32,

    /// Source identity the post was loaded from
    pub source: String,
}

impl Post {
    /// Whether the post carries `tag` exactly
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
