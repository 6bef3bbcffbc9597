//! Ordered, immutable collections of item names.

use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use std::slice;
use std::sync::Arc;

use super::Item;
use crate::narration::Narrator;

/// An ordered collection of item names.
///
/// Insertion order is preserved and duplicates are allowed. The backing
/// sequence is shared, so cloning a collection never copies the names, and
/// `add`/`remove` build a fresh sequence for the returned collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCollection {
    names: Arc<[String]>,
}

impl ItemCollection {
    /// Create a collection from item names, keeping their order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().collect()
    }

    /// Walk the collection, yielding an [`Item`] per name in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            names: self.names.iter(),
        }
    }

    /// The raw item names, in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check if at least one entry has the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Narrate every item in order. Returns a collection over the same names.
    #[must_use]
    pub fn describe(&self, out: &mut impl Narrator) -> Self {
        for item in self {
            let _ = item.describe(out);
        }
        self.clone()
    }

    /// Return a collection with `name` appended. Duplicates are not checked.
    #[must_use]
    pub fn add(&self, name: impl Into<String>) -> Self {
        self.names
            .iter()
            .cloned()
            .chain(std::iter::once(name.into()))
            .collect()
    }

    /// Return a collection without any entry equal to `name`.
    ///
    /// Every matching entry is dropped, not just the first. Removing an
    /// absent name yields an equal collection.
    #[must_use]
    pub fn remove(&self, name: &str) -> Self {
        self.names.iter().filter(|n| *n != name).cloned().collect()
    }
}

impl Default for ItemCollection {
    fn default() -> Self {
        Self {
            names: Arc::from(Vec::new()),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ItemCollection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let names: Vec<String> = iter.into_iter().map(Into::into).collect();
        Self {
            names: Arc::from(names),
        }
    }
}

impl<'a> IntoIterator for &'a ItemCollection {
    type Item = Item;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the items of an [`ItemCollection`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    names: slice::Iter<'a, String>,
}

impl Iterator for Iter<'_> {
    type Item = Item;

    fn next(&mut self) -> Option<Item> {
        self.names.next().map(Item::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.names.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Item> {
        self.names.next_back().map(Item::new)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection() {
        let items = ItemCollection::default();
        let mut out: Vec<String> = Vec::new();

        let described = items.describe(&mut out);

        assert!(out.is_empty());
        assert!(described.is_empty());
        assert_eq!(described, items);
    }

    #[test]
    fn test_describe_in_insertion_order() {
        let items = ItemCollection::new(["whiskey", "bucket"]);
        let mut out: Vec<String> = Vec::new();

        let described = items.describe(&mut out);

        assert_eq!(
            out,
            vec![
                "You see a whiskey on the floor.",
                "You see a bucket on the floor.",
            ]
        );
        assert_eq!(described, items);
    }

    #[test]
    fn test_add_appends() {
        let items = ItemCollection::new(["whiskey"]);
        let added = items.add("bucket");

        assert_eq!(added.names(), ["whiskey", "bucket"]);
        // Receiver is untouched
        assert_eq!(items.names(), ["whiskey"]);
    }

    #[test]
    fn test_add_allows_duplicates() {
        let items = ItemCollection::new(["bucket"]).add("bucket");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_remove_keeps_order_of_the_rest() {
        let items = ItemCollection::new(["frog", "chain", "whiskey", "bucket"]);
        let removed = items.remove("chain");

        assert_eq!(removed.names(), ["frog", "whiskey", "bucket"]);
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn test_remove_drops_every_duplicate() {
        let items = ItemCollection::new(["bucket", "whiskey", "bucket"]);
        let removed = items.remove("bucket");

        assert_eq!(removed.names(), ["whiskey"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let items = ItemCollection::new(["whiskey", "bucket"]);
        assert_eq!(items.remove("frog"), items);
    }

    #[test]
    fn test_iter_is_restartable() {
        let items = ItemCollection::new(["whiskey", "bucket"]);

        let first: Vec<Item> = items.iter().collect();
        let second: Vec<Item> = items.iter().collect();

        assert_eq!(first, second);
        assert_eq!(first[0].name(), "whiskey");
        assert_eq!(items.iter().len(), 2);
        assert_eq!(items.iter().next_back(), Some(Item::new("bucket")));
    }

    #[test]
    fn test_contains() {
        let items = ItemCollection::new(["whiskey"]);
        assert!(items.contains("whiskey"));
        assert!(!items.contains("bucket"));
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let items = ItemCollection::new(["whiskey", "bucket"]);

        let json = serde_json::to_string(&items).unwrap();
        assert_eq!(json, r#"["whiskey","bucket"]"#);

        let back: ItemCollection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, items);
    }
}
