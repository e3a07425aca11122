//! Generate sitemap.xml

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::content::ContentLoader;
use crate::helpers::today;
use crate::sitemap::Sitemap;
use crate::Folio;

/// Build the sitemap from the post sources and write it to `out_dir`,
/// defaulting to the public directory
pub fn run(folio: &Folio, out_dir: Option<&Path>) -> Result<PathBuf> {
    let sources = ContentLoader::new(folio).discover()?;
    let sitemap = Sitemap::build(&folio.config, &sources, today())?;
    sitemap.write(out_dir.unwrap_or(folio.public_dir.as_path()))
}
