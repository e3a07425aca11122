//! Helper functions shared by the loader, the reading view and the sitemap

pub mod date;
pub mod slug;
pub mod toc;
pub mod url;

pub use date::{format_display, normalize_date, today};
pub use slug::{generate_slug, heading_id};
pub use toc::{extract_headings, TocItem};
pub use url::{full_url_for, post_path};
