//! CLI commands

pub mod list;
pub mod new;
pub mod search;
pub mod show;
pub mod sitemap;
