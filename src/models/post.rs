use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An article on the firm's insights page. Drafts stay hidden from the public
/// endpoints until `published` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub summary: Option<String>,
    pub body: String,
    pub author: String,
    pub published: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Derives a URL slug from a title: lowercase ASCII alphanumerics with single
/// hyphens between runs of anything else.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Understanding Estate Planning"), "understanding-estate-planning");
    }

    #[test]
    fn test_slugify_collapses_punctuation() {
        assert_eq!(slugify("Mergers & Acquisitions: A Primer"), "mergers-acquisitions-a-primer");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  What is Probate?  "), "what-is-probate");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify("!!!"), "");
    }
}
