//! Content module - loads posts and holds the loaded collection

mod blog;
mod error;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use blog::Blog;
pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use loader::{estimate_reading_time, load_all_posts, parse_post, ContentLoader, Source};
pub use markdown::MarkdownRenderer;
pub use post::Post;
