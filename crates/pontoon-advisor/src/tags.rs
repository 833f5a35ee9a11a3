//! Case-insensitive tag collections for features and preferences.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Ordered set of free-text tags, canonicalized to lowercase on insertion.
///
/// Item features and buyer activity/layout preferences are matched by tag, so
/// membership must ignore case and duplicates. Canonicalizing once at the
/// edge keeps every later lookup a plain set probe, and the ordered backing
/// set makes iteration (and serialization) deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn canonical(tag: &str) -> String {
        tag.trim().to_lowercase()
    }

    /// Add a tag. Returns false when it was already present (or blank).
    pub fn insert(&mut self, tag: &str) -> bool {
        let canonical = Self::canonical(tag);
        if canonical.is_empty() {
            return false;
        }
        self.0.insert(canonical)
    }

    /// Remove a tag. Returns false when it was not present.
    pub fn remove(&mut self, tag: &str) -> bool {
        self.0.remove(&Self::canonical(tag))
    }

    /// Insert the tag if absent, remove it if present. Blank input is a no-op.
    pub fn toggle(&mut self, tag: &str) {
        let canonical = Self::canonical(tag);
        if canonical.is_empty() {
            return;
        }
        if !self.0.remove(&canonical) {
            self.0.insert(canonical);
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(&Self::canonical(tag))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tags in canonical form, ascending.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        let mut set = TagSet::new();
        for tag in &tags {
            set.insert(tag);
        }
        set
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.0.into_iter().collect()
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}
