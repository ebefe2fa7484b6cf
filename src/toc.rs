//! GitHub-flavored markdown anchor/slug generation for the function index.

use std::collections::HashMap;

/// Generate a TOC list item linking to a heading anchor.
pub fn render_toc_item(name: &str, anchor: &str) -> String {
    format!("* [{}](#{})", name, anchor)
}

/// Heading anchors in document order.
///
/// GitHub suffixes repeated slugs with `-1`, `-2`, ... so the n-th heading
/// with the same text gets its own anchor.
#[derive(Default)]
pub struct Anchors {
    seen: HashMap<String, usize>,
}

impl Anchors {
    /// Register a heading and return the anchor GitHub will give it.
    pub fn anchor(&mut self, heading: &str) -> String {
        let slug = github_slug(heading);
        let count = self.seen.entry(slug.clone()).or_insert(0);
        let anchor = if *count == 0 {
            slug
        } else {
            format!("{}-{}", slug, count)
        };
        *count += 1;
        anchor
    }
}

/// GitHub heading anchor slug generation.
///
/// - lowercase
/// - drop everything that isn't alphanumeric, space, underscore, or hyphen
/// - replace spaces with hyphens
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}
