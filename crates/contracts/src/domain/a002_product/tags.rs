use serde::{Deserialize, Serialize};

/// Ordered set of product tags.
///
/// Insertion order is kept, duplicates (case-sensitive) are dropped silently.
/// Tags never contain commas since the wire format is a comma-joined string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the tags typed into the tag input. `"a, b"` adds two tags.
    /// Returns `true` when at least one tag was new.
    pub fn add(&mut self, input: &str) -> bool {
        let mut added = false;
        for tag in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if !self.contains(tag) {
                self.0.push(tag.to_string());
                added = true;
            }
        }
        added
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Wire form: `"a,b,c"`
    pub fn join(&self) -> String {
        self.0.join(",")
    }

    pub fn parse(joined: &str) -> Self {
        let mut tags = Self::new();
        tags.add(joined);
        tags
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = Self::new();
        for tag in iter {
            tags.add(tag.as_ref());
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_existing_tag_changes_nothing() {
        let mut tags = TagSet::from_iter(["red", "blue"]);
        assert!(!tags.add("red"));
        assert_eq!(tags.as_slice(), &["red", "blue"]);
    }

    #[test]
    fn duplicates_are_case_sensitive() {
        let mut tags = TagSet::new();
        assert!(tags.add("Red"));
        assert!(tags.add("red"));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn blank_input_and_commas() {
        let mut tags = TagSet::new();
        assert!(!tags.add("   "));
        assert!(tags.add(" a , b,,a "));
        assert_eq!(tags.as_slice(), &["a", "b"]);
        assert_eq!(tags.join(), "a,b");
        assert_eq!(TagSet::parse(&tags.join()), tags);
    }

    #[test]
    fn remove_by_index() {
        let mut tags = TagSet::from_iter(["a", "b", "c"]);
        assert_eq!(tags.remove(1).as_deref(), Some("b"));
        assert_eq!(tags.remove(5), None);
        assert_eq!(tags.as_slice(), &["a", "c"]);
    }
}
