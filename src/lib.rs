//! folio-rs: the content engine behind a personal portfolio and blog
//!
//! Markdown posts with YAML front-matter are loaded once into an immutable
//! [`content::Blog`], which the index functions, the reading view and the
//! sitemap builder all read from.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod index;
pub mod sitemap;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A portfolio site on disk
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the markdown posts
    pub content_dir: PathBuf,
    /// Build output directory
    pub public_dir: PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        })
    }

    /// Load every post once; the returned blog is never modified afterwards
    pub fn load_blog(&self) -> Result<content::Blog> {
        let posts = content::ContentLoader::new(self).load_posts()?;
        let blog = content::Blog::new(posts, self.config.duplicate_slugs)?;
        tracing::info!("Loaded {} posts", blog.len());
        Ok(blog)
    }

    /// Write sitemap.xml into the public directory
    pub fn generate_sitemap(&self) -> Result<PathBuf> {
        commands::sitemap::run(self, None)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str, tags: &[String]) -> Result<PathBuf> {
        commands::new::create_post(self, title, tags)
    }
}
