//! List site content

use anyhow::Result;

use crate::index;
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    let blog = folio.load_blog()?;

    match content_type {
        "post" | "posts" => {
            println!("Posts ({}):", blog.len());
            for post in blog.posts() {
                println!(
                    "  {} - {} [{}] ({} min)",
                    post.published_at, post.title, post.slug, post.reading_time
                );
            }
        }
        "tag" | "tags" => {
            let tags = index::tag_counts(blog.posts());
            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(())
}
