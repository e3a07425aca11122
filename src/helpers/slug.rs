//! Slug helpers

/// Generate a URL-friendly slug from a post title
///
/// Lowercases, drops everything but ASCII letters, digits, whitespace and
/// hyphens, turns whitespace into hyphens and collapses hyphen runs.
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_hyphen = false;

    for c in title.to_lowercase().chars() {
        let c = if c.is_whitespace() { '-' } else { c };
        if c == '-' {
            if !last_hyphen {
                slug.push('-');
            }
            last_hyphen = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            last_hyphen = false;
        }
    }

    slug
}

/// Anchor id for a heading, shared by the table of contents and the renderer
///
/// Unlike [`generate_slug`], hyphen runs are kept as-is so ids stay stable
/// for headings like `"A - B"`.
pub fn heading_id(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    let mut in_space = false;

    for c in text.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                id.push('-');
            }
            in_space = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            id.push(c);
            in_space = false;
        }
    }

    id
}
