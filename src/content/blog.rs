//! The loaded post collection

use std::collections::HashMap;

use super::{ContentError, Post};
use crate::config::DuplicateSlugPolicy;
use crate::index;

/// Immutable, newest-first collection of every post
///
/// Built once at startup and handed to every consumer by reference.
#[derive(Debug, Clone, Default)]
pub struct Blog {
    posts: Vec<Post>,
}

impl Blog {
    /// Wrap an already sorted post list, checking slugs against `policy`
    pub fn new(posts: Vec<Post>, policy: DuplicateSlugPolicy) -> Result<Self, ContentError> {
        let mut seen: HashMap<&str, &str> = HashMap::new();

        for post in &posts {
            let Some(first) = seen.get(post.slug.as_str()).copied() else {
                seen.insert(&post.slug, &post.source);
                continue;
            };

            match policy {
                DuplicateSlugPolicy::Warn => {
                    tracing::warn!(
                        "Duplicate slug '{}' in {} shadowed by {}",
                        post.slug,
                        post.source,
                        first
                    );
                }
                DuplicateSlugPolicy::Reject => {
                    return Err(ContentError::DuplicateSlug {
                        slug: post.slug.clone(),
                        first: first.to_string(),
                        second: post.source.clone(),
                    });
                }
            }
        }

        Ok(Self { posts })
    }

    /// All posts, newest first
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Find a post by slug; the first one wins when slugs collide
    pub fn get_post_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Like [`Blog::get_post_by_slug`], but a miss is an error
    pub fn require(&self, slug: &str) -> Result<&Post, ContentError> {
        self.get_post_by_slug(slug)
            .ok_or_else(|| ContentError::PostNotFound(slug.to_string()))
    }

    /// Every distinct tag, sorted
    pub fn tags(&self) -> Vec<String> {
        index::all_tags(&self.posts)
    }

    /// Posts matching a search query and an optional tag
    pub fn filter(&self, query: &str, tag: Option<&str>) -> Vec<&Post> {
        index::filter_posts(&self.posts, query, tag)
    }

    /// Posts sharing tags with `post`
    pub fn related(&self, post: &Post, limit: usize) -> Vec<&Post> {
        index::related_posts(post, &self.posts, limit)
    }
}
