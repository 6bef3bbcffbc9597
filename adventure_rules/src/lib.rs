//! # Adventure Rules
//!
//! An immutable text-adventure model: a player who can look around a location
//! and pick up the items lying there. Every operation returns a new value and
//! leaves its receiver untouched, so callers chain the returned instances:
//!
//! ```
//! use adventure_rules::{ItemCollection, Location, Player, Transcript};
//!
//! let room = Location::new(
//!     "You are in a room. A wizard is snoring on the couch.",
//!     ItemCollection::new(["whiskey", "bucket"]),
//! );
//! let mut out = Transcript::new();
//!
//! let player = Player::new(room)
//!     .look_around(&mut out)
//!     .pick_up("whiskey")
//!     .look_around(&mut out);
//!
//! assert_eq!(out.len(), 5);
//! assert!(player.items().contains("whiskey"));
//! ```
//!
//! Text output goes through an injected [`Narrator`] rather than process-wide
//! standard output.

pub mod entities;
pub mod error;
pub mod narration;
pub mod world_state;

pub use entities::*;
pub use error::*;
pub use narration::*;
pub use world_state::*;
