//! Show a single post: metadata, table of contents and related posts

use anyhow::Result;

use crate::content::MarkdownRenderer;
use crate::helpers::{extract_headings, format_display, full_url_for, post_path};
use crate::Folio;

/// Output flavour for `show`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFormat {
    Text,
    Html,
    Json,
}

/// Print the reading view of the post at `slug`
pub fn run(folio: &Folio, slug: &str, format: ShowFormat) -> Result<()> {
    let blog = folio.load_blog()?;
    let post = blog.require(slug)?;
    let toc = extract_headings(&post.content);
    let related = blog.related(post, folio.config.related_posts);

    match format {
        ShowFormat::Html => {
            let renderer = MarkdownRenderer::from_config(&folio.config.highlight);
            print!("{}", renderer.render(&post.content)?);
        }
        ShowFormat::Json => {
            let related: Vec<&str> = related.iter().map(|p| p.slug.as_str()).collect();
            let value = serde_json::json!({
                "post": post,
                "url": full_url_for(&folio.config, &post_path(&folio.config, &post.slug)),
                "toc": toc,
                "related": related,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        ShowFormat::Text => {
            println!("{}", post.title);
            println!(
                "{} · {} min read",
                format_display(&post.published_at),
                post.reading_time
            );
            if let Some(updated) = &post.updated_at {
                println!("Updated {}", format_display(updated));
            }
            if !post.tags.is_empty() {
                println!("Tags: {}", post.tags.join(", "));
            }
            println!("{}", full_url_for(&folio.config, &post_path(&folio.config, &post.slug)));
            println!();
            println!("{}", post.excerpt);

            if !toc.is_empty() {
                println!();
                println!("On This Page:");
                for item in &toc {
                    println!("{}- {} (#{})", "  ".repeat(item.level - 1), item.text, item.id);
                }
            }

            if !related.is_empty() {
                println!();
                println!("Related Posts:");
                for p in related {
                    println!("  {} [{}] ({} min)", p.title, p.slug, p.reading_time);
                }
            }
        }
    }

    Ok(())
}
