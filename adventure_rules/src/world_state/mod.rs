//! World state - the places a player can stand in.

mod scene;

use serde::{Deserialize, Serialize};

use crate::entities::ItemCollection;
use crate::narration::Narrator;

/// A described place and the items currently lying in it.
///
/// Deserializes from the attribute bundle `{ description, items }`, where
/// `items` is an optional list of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    description: String,
    #[serde(default)]
    items: ItemCollection,
}

impl Location {
    /// Create a location with the given description and items.
    pub fn new(description: impl Into<String>, items: ItemCollection) -> Self {
        Self {
            description: description.into(),
            items,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Items currently in this location.
    pub fn items(&self) -> &ItemCollection {
        &self.items
    }

    /// Narrate the description line, then every item present.
    ///
    /// Describing never changes membership, so the returned location equals
    /// the receiver.
    #[must_use]
    pub fn describe(&self, out: &mut impl Narrator) -> Self {
        out.say(&self.description);
        let _ = self.items.describe(out);
        Self::new(self.description.clone(), self.items.clone())
    }

    /// Return this location with every item named `name` taken away.
    ///
    /// Picking up something that isn't here is not an error; the items are
    /// left as they were.
    #[must_use]
    pub fn pick_up(&self, name: &str) -> Self {
        tracing::trace!(
            item = name,
            present = self.items.contains(name),
            "Removing item from location"
        );
        Self::new(self.description.clone(), self.items.remove(name))
    }
}
