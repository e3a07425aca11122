//! Search posts by text and tag

use anyhow::Result;

use crate::Folio;

/// Print the posts matching `query` and `tag`, newest first
pub fn run(folio: &Folio, query: &str, tag: Option<&str>, json: bool) -> Result<()> {
    let blog = folio.load_blog()?;

    if let Some(tag) = tag {
        if !blog.tags().iter().any(|t| t == tag) {
            tracing::warn!("No post is tagged '{}'", tag);
        }
    }

    let matches = blog.filter(query, tag);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    println!("Found {} of {} posts:", matches.len(), blog.len());
    for post in matches {
        println!("  {} - {} [{}]", post.published_at, post.title, post.slug);
        println!("      {}", post.excerpt);
    }

    Ok(())
}
