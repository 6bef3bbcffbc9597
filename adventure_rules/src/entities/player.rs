//! Player definitions.

use serde::{Deserialize, Serialize};

use super::ItemCollection;
use crate::narration::Narrator;
use crate::world_state::Location;

/// The player: where they stand and what they carry.
///
/// Every action returns a new player. The receiver is never changed, so
/// callers must keep the returned value to see the effect:
///
/// ```
/// # use adventure_rules::{ItemCollection, Location, Player};
/// let player = Player::new(Location::new("A shed.", ItemCollection::new(["rake"])));
/// let after = player.pick_up("rake");
///
/// assert!(player.items().is_empty());
/// assert_eq!(after.items().names(), ["rake"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    location: Location,
    #[serde(default)]
    items: ItemCollection,
}

impl Player {
    /// Create a player standing in `location` with empty hands.
    pub fn new(location: Location) -> Self {
        Self::with_items(location, ItemCollection::default())
    }

    /// Create a player standing in `location` already carrying `items`.
    pub fn with_items(location: Location, items: ItemCollection) -> Self {
        Self { location, items }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Items the player is carrying.
    pub fn items(&self) -> &ItemCollection {
        &self.items
    }

    /// Narrate the current location and everything lying in it.
    ///
    /// Purely observational: the returned player has the same location and
    /// the same carried items.
    #[must_use]
    pub fn look_around(&self, out: &mut impl Narrator) -> Self {
        let _ = self.location.describe(out);
        Self::with_items(self.location.clone(), self.items.clone())
    }

    /// Take `name` from the location and carry it.
    ///
    /// No check is made that the item is actually here: the location drops
    /// whatever matches (possibly nothing) and the name is added to the
    /// carried items regardless.
    #[must_use]
    pub fn pick_up(&self, name: &str) -> Self {
        tracing::debug!(
            item = name,
            carried = self.items.len() + 1,
            "Player picks up item"
        );
        Self::with_items(self.location.pick_up(name), self.items.add(name))
    }
}
