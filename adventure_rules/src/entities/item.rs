//! Item definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::narration::Narrator;

/// A single item lying on the floor.
///
/// Items have no identity beyond their name. They are produced on demand
/// when a collection is walked and dropped once described.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
}

impl Item {
    /// Create an item with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Narrate the item, returning an identical copy.
    #[must_use]
    pub fn describe(&self, out: &mut impl Narrator) -> Self {
        out.say(&self.to_string());
        Self::new(self.name.clone())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You see a {} on the floor.", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_item() {
        let mut out: Vec<String> = Vec::new();
        let item = Item::new("whiskey");

        let copy = item.describe(&mut out);

        assert_eq!(out, vec!["You see a whiskey on the floor."]);
        assert_eq!(copy, item);
        assert_eq!(copy.name(), "whiskey");
    }

    #[test]
    fn test_describe_twice() {
        let mut out: Vec<String> = Vec::new();
        let _ = Item::new("bucket").describe(&mut out).describe(&mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], out[1]);
    }
}
