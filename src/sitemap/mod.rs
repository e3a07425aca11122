//! Sitemap generation
//!
//! Produces `sitemap.xml` with the site's static pages followed by one entry
//! per blog post. Post entries are read straight from the sources' front-matter
//! rather than from loaded posts: a post without a usable `publishedAt` gets no
//! `<lastmod>` here, where the loader would have stamped it with today.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/blog/hello</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>yearly</changefreq>
//!     <priority>0.6</priority>
//!   </url>
//! </urlset>
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{DuplicateSlugPolicy, SiteConfig};
use crate::content::loader::slug_from_identity;
use crate::content::{ContentError, FrontMatter, Source};
use crate::helpers::{full_url_for, normalize_date, post_path};

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Sitemap file name inside the output directory
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// How often a page is expected to change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFreq {
    fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
        }
    }
}

/// Single URL entry in the sitemap
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    /// Full URL location
    pub loc: String,
    pub lastmod: Option<NaiveDate>,
    pub changefreq: ChangeFreq,
    pub priority: &'static str,
}

/// Sitemap data structure
#[derive(Debug, Clone, Default)]
pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

impl Sitemap {
    /// Build the sitemap: home, blog index, then every post source in order
    ///
    /// Sources sharing a slug are handled by `config.duplicate_slugs`: under
    /// `warn` only the first one gets a URL, under `reject` the build fails.
    pub fn build(
        config: &SiteConfig,
        sources: &[Source],
        today: NaiveDate,
    ) -> Result<Self, ContentError> {
        let mut urls = vec![
            UrlEntry {
                loc: full_url_for(config, "/"),
                lastmod: Some(today),
                changefreq: ChangeFreq::Monthly,
                priority: "1.0",
            },
            UrlEntry {
                loc: full_url_for(config, &config.blog_path),
                lastmod: Some(today),
                changefreq: ChangeFreq::Weekly,
                priority: "0.8",
            },
        ];

        let mut seen: HashMap<String, &str> = HashMap::new();

        for source in sources {
            let (slug, entry) = post_entry(config, source);

            if let Some(first) = seen.get(&slug).copied() {
                match config.duplicate_slugs {
                    DuplicateSlugPolicy::Warn => {
                        tracing::warn!(
                            "Duplicate slug '{}' in {} left out of the sitemap, {} wins",
                            slug,
                            source.identity,
                            first
                        );
                        continue;
                    }
                    DuplicateSlugPolicy::Reject => {
                        return Err(ContentError::DuplicateSlug {
                            slug,
                            first: first.to_string(),
                            second: source.identity.clone(),
                        });
                    }
                }
            }

            seen.insert(slug, &source.identity);
            urls.push(entry);
        }

        Ok(Self { urls })
    }

    pub fn urls(&self) -> &[UrlEntry] {
        &self.urls
    }

    /// Generate sitemap XML string
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in &self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod.format("%Y-%m-%d")));
            }
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                entry.changefreq.as_str()
            ));
            xml.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write `sitemap.xml` into `out_dir`, creating it when missing
    pub fn write(&self, out_dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("Failed to create {}", out_dir.display()))?;

        let path = out_dir.join(SITEMAP_FILE);
        fs::write(&path, self.to_xml())
            .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

        tracing::info!("Sitemap generated with {} URLs -> {:?}", self.urls.len(), path);
        Ok(path)
    }
}

fn post_entry(config: &SiteConfig, source: &Source) -> (String, UrlEntry) {
    let (fm, _) = FrontMatter::parse(&source.raw);
    let slug = fm
        .slug()
        .unwrap_or_else(|| slug_from_identity(&source.identity));

    let entry = UrlEntry {
        loc: full_url_for(config, &post_path(config, &slug)),
        lastmod: fm.published_at().and_then(normalize_date),
        changefreq: ChangeFreq::Yearly,
        priority: "0.6",
    };
    (slug, entry)
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            url: "https://nikhilkumar.tech".to_string(),
            ..Default::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<it's>"), "&lt;it&apos;s&gt;");
    }

    #[test]
    fn test_static_entries_only() {
        let sitemap = Sitemap::build(&config(), &[], today()).unwrap();
        let xml = sitemap.to_xml();

        assert_eq!(sitemap.urls().len(), 2);
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("<loc>https://nikhilkumar.tech/</loc>"));
        assert!(xml.contains("<loc>https://nikhilkumar.tech/blog</loc>"));
        assert!(xml.contains("<lastmod>2025-06-01</lastmod>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn test_post_entries() {
        let sources = vec![
            Source::new(
                "src/content/blogs/first.md",
                "---\nslug: custom-slug\npublishedAt: 2024-02-03T10:00:00Z\n---\nbody",
            ),
            Source::new("src/content/blogs/undated.md", "no front-matter"),
        ];
        let sitemap = Sitemap::build(&config(), &sources, today()).unwrap();
        let urls = sitemap.urls();

        assert_eq!(urls.len(), 4);
        assert_eq!(urls[2].loc, "https://nikhilkumar.tech/blog/custom-slug");
        assert_eq!(urls[2].lastmod, NaiveDate::from_ymd_opt(2024, 2, 3));
        assert_eq!(urls[2].changefreq, ChangeFreq::Yearly);
        assert_eq!(urls[3].loc, "https://nikhilkumar.tech/blog/undated");
        assert_eq!(urls[3].lastmod, None);

        let xml = sitemap.to_xml();
        let undated = xml.split("<url>").nth(4).unwrap();
        assert!(!undated.contains("<lastmod>"));
        assert!(undated.contains("<priority>0.6</priority>"));
    }

    fn duplicate_sources() -> Vec<Source> {
        vec![
            Source::new("blogs/a.md", "---\nslug: shared\npublishedAt: 2024-01-01\n---\n"),
            Source::new("blogs/b.md", "---\nslug: shared\npublishedAt: 2024-02-01\n---\n"),
            Source::new("blogs/shared.md", "no front-matter"),
        ]
    }

    #[test]
    fn test_duplicate_slugs_get_one_url() {
        let sitemap = Sitemap::build(&config(), &duplicate_sources(), today()).unwrap();
        let urls = sitemap.urls();

        assert_eq!(urls.len(), 3);
        assert_eq!(urls[2].loc, "https://nikhilkumar.tech/blog/shared");
        assert_eq!(urls[2].lastmod, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(sitemap.to_xml().matches("/blog/shared</loc>").count(), 1);
    }

    #[test]
    fn test_duplicate_slugs_rejected() {
        let config = SiteConfig {
            duplicate_slugs: DuplicateSlugPolicy::Reject,
            ..config()
        };
        let err = Sitemap::build(&config, &duplicate_sources(), today()).unwrap_err();
        assert_eq!(
            err,
            ContentError::DuplicateSlug {
                slug: "shared".to_string(),
                first: "blogs/a.md".to_string(),
                second: "blogs/b.md".to_string(),
            }
        );
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist");
        let path = Sitemap::build(&config(), &[], today())
            .unwrap()
            .write(&out)
            .unwrap();

        assert_eq!(path, out.join(SITEMAP_FILE));
        assert!(fs::read_to_string(path).unwrap().contains("<urlset"));
    }
}
