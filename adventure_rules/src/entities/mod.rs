//! Entity definitions for the adventure.

mod collection;
mod item;
mod player;

pub use collection::*;
pub use item::*;
pub use player::*;
