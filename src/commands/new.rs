//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::helpers::{generate_slug, today};
use crate::Folio;

/// Write a new post scaffold into the content directory
pub fn create_post(folio: &Folio, title: &str, tags: &[String]) -> Result<PathBuf> {
    let slug = generate_slug(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title: {:?}", title);
    }

    fs::create_dir_all(&folio.content_dir)?;

    let file_path = folio.content_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let tags = tags
        .iter()
        .map(|t| format!("  - {}\n", yaml_string(t)))
        .collect::<String>();
    let tags = if tags.is_empty() {
        " []\n".to_string()
    } else {
        format!("\n{}", tags)
    };

    let content = format!(
        "---\ntitle: {}\nslug: {}\npublishedAt: {}\ntags:{}---\n\n",
        yaml_string(title),
        slug,
        today().format("%Y-%m-%d"),
        tags
    );

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Quote a scalar so titles like `Rust: a tour` stay strings
fn yaml_string(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
