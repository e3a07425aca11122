//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,

    // URL
    pub url: String,
    pub blog_path: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    // Blog
    pub related_posts: usize,
    pub duplicate_slugs: DuplicateSlugPolicy,
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            author: String::new(),

            url: "http://example.com".to_string(),
            blog_path: "blog".to_string(),

            content_dir: "src/content/blogs".to_string(),
            public_dir: "dist".to_string(),

            related_posts: 3,
            duplicate_slugs: DuplicateSlugPolicy::Warn,
            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// What to do when two posts resolve to the same slug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateSlugPolicy {
    /// Log every duplicate and keep the first post for lookups
    Warn,
    /// Refuse to load the blog
    Reject,
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}
