//! URL helper functions

use crate::config::SiteConfig;

/// Path of a post relative to the site root
///
/// # Examples
/// ```ignore
/// post_path(&config, "hello-world") // -> "/blog/hello-world"
/// ```
pub fn post_path(config: &SiteConfig, slug: &str) -> String {
    let blog = config.blog_path.trim_matches('/');
    if blog.is_empty() {
        format!("/{}", slug)
    } else {
        format!("/{}/{}", blog, slug)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/blog") // -> "https://example.com/blog"
/// full_url_for(&config, "/")     // -> "https://example.com/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com/".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_post_path() {
        let mut config = test_config();
        assert_eq!(post_path(&config, "hello"), "/blog/hello");
        config.blog_path = "/writing/".to_string();
        assert_eq!(post_path(&config, "hello"), "/writing/hello");
        config.blog_path = String::new();
        assert_eq!(post_path(&config, "hello"), "/hello");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(full_url_for(&config, "/"), "https://example.com/");
        assert_eq!(full_url_for(&config, "/blog"), "https://example.com/blog");
        assert_eq!(
            full_url_for(&config, "blog/hello"),
            "https://example.com/blog/hello"
        );
    }
}
