//! Derived views over the loaded posts
//!
//! Everything here is a pure function of its input slice: no I/O, no
//! mutation, and the result only borrows from the posts it was given.

use std::collections::{BTreeSet, HashMap};

use crate::content::Post;

/// Every distinct tag across `posts`, sorted ascending
pub fn all_tags(posts: &[Post]) -> Vec<String> {
    posts
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Tag usage counts, most used first, ties broken by name
pub fn tag_counts(posts: &[Post]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for tag in posts.iter().flat_map(|p| &p.tags) {
        *counts.entry(tag).or_insert(0) += 1;
    }

    let mut counts: Vec<_> = counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Posts whose title or excerpt contains `query` (case-insensitive) and,
/// when `tag` is given, that carry exactly that tag
///
/// An empty query matches everything. Input order is preserved.
pub fn filter_posts<'a>(posts: &'a [Post], query: &str, tag: Option<&str>) -> Vec<&'a Post> {
    let query = query.to_lowercase();

    posts
        .iter()
        .filter(|post| {
            let matches_query = query.is_empty()
                || post.title.to_lowercase().contains(&query)
                || post.excerpt.to_lowercase().contains(&query);
            let matches_tag = tag.map_or(true, |t| post.has_tag(t));
            matches_query && matches_tag
        })
        .collect()
}

/// Up to `limit` posts sharing tags with `current`, best match first
///
/// The score of a candidate is how many of its tags appear in `current`;
/// a tag the candidate lists twice counts twice. Candidates with no shared
/// tag are dropped, and `current` itself is excluded by slug. Equal scores
/// keep input order, so for a newest-first slice ties go to the newer post.
pub fn related_posts<'a>(current: &Post, posts: &'a [Post], limit: usize) -> Vec<&'a Post> {
    let mut scored: Vec<(&Post, usize)> = posts
        .iter()
        .filter(|post| post.slug != current.slug)
        .map(|post| {
            let score = post.tags.iter().filter(|t| current.has_tag(t)).count();
            (post, score)
        })
        .filter(|(_, score)| *score > 0)
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().take(limit).map(|(post, _)| post).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::parse_post;

    fn post(slug: &str, title: &str, excerpt: &str, tags: &[&str]) -> Post {
        let raw = format!(
            "---\nslug: {}\ntitle: {}\nexcerpt: {}\ntags: [{}]\npublishedAt: 2024-01-01\n---\nbody",
            slug,
            title,
            excerpt,
            tags.join(", ")
        );
        parse_post(&format!("{}.md", slug), &raw)
    }

    fn sample() -> Vec<Post> {
        vec![
            post("rust-async", "Async Rust", "Futures and executors", &["rust", "async"]),
            post("react-hooks", "React Hooks", "State without classes", &["react", "web"]),
            post("rust-web", "Web Servers in Rust", "Axum from scratch", &["rust", "web"]),
            post("notes", "Misc Notes", "Odds and ends", &[]),
        ]
    }

    fn slugs(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.slug.clone()).collect()
    }

    #[test]
    fn test_all_tags_sorted_and_unique() {
        let tags = all_tags(&sample());
        assert_eq!(tags, vec!["async", "react", "rust", "web"]);
        assert!(all_tags(&[]).is_empty());
    }

    #[test]
    fn test_tag_counts() {
        let counts = tag_counts(&sample());
        assert_eq!(
            counts,
            vec![
                ("rust".to_string(), 2),
                ("web".to_string(), 2),
                ("async".to_string(), 1),
                ("react".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let posts = sample();
        let filtered = filter_posts(&posts, "", None);
        assert_eq!(filtered.len(), posts.len());
        assert!(filtered.iter().zip(&posts).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter_posts(&sample(), "xyz-no-match", None).is_empty());
    }

    #[test]
    fn test_filter_query_is_case_insensitive() {
        let posts = sample();
        assert_eq!(
            slugs(&filter_posts(&posts, "RUST", None)),
            vec!["rust-async", "rust-web"]
        );
        // Matches on the excerpt too
        assert_eq!(slugs(&filter_posts(&posts, "axum", None)), vec!["rust-web"]);
    }

    #[test]
    fn test_filter_by_tag_and_query() {
        let posts = sample();
        assert_eq!(
            slugs(&filter_posts(&posts, "", Some("web"))),
            vec!["react-hooks", "rust-web"]
        );
        assert_eq!(
            slugs(&filter_posts(&posts, "rust", Some("web"))),
            vec!["rust-web"]
        );
        // Tags match exactly, not by substring
        assert!(filter_posts(&posts, "", Some("we")).is_empty());
    }

    #[test]
    fn test_related_posts_example() {
        let posts = vec![
            post("a", "A", "a", &["x", "y"]),
            post("b", "B", "b", &["x"]),
            post("c", "C", "c", &["y", "z"]),
            post("d", "D", "d", &["w"]),
        ];
        let related = related_posts(&posts[0], &posts, 3);
        assert_eq!(slugs(&related), vec!["b", "c"]);
    }

    #[test]
    fn test_related_posts_ranked_by_score() {
        let posts = vec![
            post("current", "Current", "c", &["rust", "web", "async"]),
            post("one-shared", "One", "o", &["rust"]),
            post("two-shared", "Two", "t", &["rust", "web"]),
            post("three-shared", "Three", "h", &["async", "web", "rust"]),
        ];
        let related = related_posts(&posts[0], &posts, 3);
        assert_eq!(
            slugs(&related),
            vec!["three-shared", "two-shared", "one-shared"]
        );
    }

    #[test]
    fn test_related_posts_limit_and_self_exclusion() {
        let posts: Vec<Post> = (0..6)
            .map(|i| post(&format!("p{}", i), "T", "e", &["shared"]))
            .collect();
        let related = related_posts(&posts[2], &posts, 3);
        assert_eq!(slugs(&related), vec!["p0", "p1", "p3"]);
        assert!(related_posts(&posts[0], &posts, 0).is_empty());
    }

    #[test]
    fn test_related_posts_counts_repeated_candidate_tags() {
        let posts = vec![
            post("current", "Current", "c", &["rust", "web"]),
            post("both", "Both", "b", &["rust", "web"]),
            post("repeated", "Repeated", "r", &["rust", "rust", "rust"]),
        ];
        let related = related_posts(&posts[0], &posts, 3);
        assert_eq!(slugs(&related), vec!["repeated", "both"]);
    }

    #[test]
    fn test_related_posts_ignores_repeats_in_current_tags() {
        let posts = vec![
            post("current", "Current", "c", &["x", "x"]),
            post("b", "B", "b", &["x"]),
            post("c", "C", "c", &["y"]),
        ];
        let related = related_posts(&posts[0], &posts, 3);
        assert_eq!(slugs(&related), vec!["b"]);

        // b shares x once; a candidate listing x twice outranks it
        let mut posts = posts;
        posts.push(post("double", "Double", "d", &["x", "x"]));
        let related = related_posts(&posts[0], &posts, 3);
        assert_eq!(slugs(&related), vec!["double", "b"]);
    }
}
