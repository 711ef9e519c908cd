//! Slug generation for heading anchors.
//!
//! [`slugify`] turns heading text into a URL-safe token; [`Slugger`] layers a
//! per-document uniqueness registry on top, appending numeric suffixes to
//! duplicates.

use std::collections::{HashMap, HashSet};

/// Fallback token for text with no sluggable characters.
const FALLBACK_SLUG: &str = "heading";

/// Generate a URL-safe slug from text.
///
/// Keeps alphanumerics and underscores, turns whitespace and hyphens into
/// `-`, drops everything else, collapses consecutive hyphens, and trims
/// leading/trailing hyphens. Lowercases unless `maintain_case` is set.
///
/// # Examples
///
/// ```
/// use ankor::slugify;
///
/// assert_eq!(slugify("Hello World", false), "hello-world");
/// assert_eq!(slugify("Hello World", true), "Hello-World");
/// assert_eq!(slugify("My API (v2)", false), "my-api-v2");
/// assert_eq!(slugify("  Spaced  Out  ", false), "spaced-out");
/// ```
pub fn slugify(text: &str, maintain_case: bool) -> String {
    let mut mapped = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() || c == '_' {
            if maintain_case {
                mapped.push(c);
            } else {
                mapped.extend(c.to_lowercase());
            }
        } else if c.is_whitespace() || c == '-' {
            mapped.push('-');
        }
        // Other characters are dropped
    }

    mapped
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Issues unique anchor identifiers for one document pass.
///
/// Previously issued identifiers are remembered; a duplicate gets a numeric
/// suffix (`overview`, `overview-1`, `overview-2`, ...). Construct one
/// `Slugger` per document so separate documents never interfere.
///
/// # Examples
///
/// ```
/// use ankor::Slugger;
///
/// let mut slugger = Slugger::new();
/// assert_eq!(slugger.slug("Overview", false), "overview");
/// assert_eq!(slugger.slug("Overview", false), "overview-1");
/// ```
#[derive(Debug, Default)]
pub struct Slugger {
    /// Every identifier issued so far in this pass.
    used: HashSet<String>,
    /// Next suffix to try per base slug.
    counts: HashMap<String, usize>,
}

impl Slugger {
    /// Create a slugger with no prior identifiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a unique identifier for `text`.
    ///
    /// `maintain_case` controls whether the slug preserves source casing;
    /// uniqueness is enforced either way. Text with no sluggable characters
    /// falls back to a generic token, so the result is never empty.
    pub fn slug(&mut self, text: &str, maintain_case: bool) -> String {
        let base = slugify(text, maintain_case);
        let base = if base.is_empty() {
            FALLBACK_SLUG.to_string()
        } else {
            base
        };

        let mut candidate = base.clone();
        while self.used.contains(&candidate) {
            let count = self.counts.entry(base.clone()).or_insert(0);
            *count += 1;
            candidate = format!("{base}-{count}");
        }
        self.used.insert(candidate.clone());
        candidate
    }
}
