//! Configuration module

mod site;

pub use site::DuplicateSlugPolicy;
pub use site::HighlightConfig;
pub use site::SiteConfig;
