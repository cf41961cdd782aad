//! Ordered label → value mapping with merge-on-insert.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// What a [`SpecMap::merge`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// New label, stored as-is
    Inserted,
    /// Appended to an existing value after a comma
    Appended,
    /// Equal, contained, containing, or already a token; nothing changed
    Unchanged,
    /// Value equals the label; rejected
    SelfMapped,
}

/// Labels mapped to accumulated values, in first-seen order.
///
/// A label is never stored against itself, and merging a value that is
/// already represented (equal, substring, superstring, or existing token)
/// leaves the entry unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecMap {
    entries: IndexMap<String, String>,
}

impl SpecMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `label`, or merge it into the existing value.
    pub fn merge(&mut self, label: &str, value: &str) -> MergeOutcome {
        if label == value {
            return MergeOutcome::SelfMapped;
        }

        let Some(existing) = self.entries.get_mut(label) else {
            self.entries.insert(label.to_string(), value.to_string());
            return MergeOutcome::Inserted;
        };

        if existing == value || existing.contains(value) || value.contains(existing.as_str()) {
            return MergeOutcome::Unchanged;
        }

        let token = value.trim();
        if existing.split(',').any(|t| t.trim() == token) {
            return MergeOutcome::Unchanged;
        }

        existing.push(',');
        existing.push_str(value);
        MergeOutcome::Appended
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for SpecMap {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut map = SpecMap::new();
        for (label, value) in iter {
            map.merge(label, value);
        }
        map
    }
}

impl IntoIterator for SpecMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_append() {
        let mut map = SpecMap::new();
        assert_eq!(map.merge("형태", "죽"), MergeOutcome::Inserted);
        assert_eq!(map.merge("형태", "미음"), MergeOutcome::Appended);
        assert_eq!(map.get("형태"), Some("죽,미음"));
    }

    #[test]
    fn test_rejects_self_mapping() {
        let mut map = SpecMap::new();
        assert_eq!(map.merge("국내산", "국내산"), MergeOutcome::SelfMapped);
        assert!(map.is_empty());
    }

    #[test]
    fn test_containment_is_noop() {
        let mut map = SpecMap::new();
        map.merge("재료종류", "유기농");
        assert_eq!(map.merge("재료종류", "유기농 쌀"), MergeOutcome::Unchanged);
        assert_eq!(map.get("재료종류"), Some("유기농"));

        let mut map = SpecMap::new();
        map.merge("재료종류", "유기농 쌀");
        assert_eq!(map.merge("재료종류", "유기농"), MergeOutcome::Unchanged);
        assert_eq!(map.get("재료종류"), Some("유기농 쌀"));
    }

    #[test]
    fn test_existing_token_is_noop() {
        let mut map = SpecMap::new();
        map.merge("형태", "죽");
        map.merge("형태", "미음");
        map.merge("형태", "진밥");
        assert_eq!(map.merge("형태", "미음"), MergeOutcome::Unchanged);
        assert_eq!(map.get("형태"), Some("죽,미음,진밥"));
    }

    #[test]
    fn test_first_seen_order() {
        let map: SpecMap = [("b", "1"), ("a", "2"), ("b", "3")].into_iter().collect();
        let labels: Vec<_> = map.labels().collect();
        assert_eq!(labels, vec!["b", "a"]);
        assert_eq!(map.get("b"), Some("1,3"));
    }
}
