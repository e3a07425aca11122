//! Content errors

use thiserror::Error;

/// Errors raised while assembling or querying the post collection
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    #[error("Duplicate slug '{slug}' in {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },

    #[error("Post not found: {0}")]
    PostNotFound(String),
}
