//! World model for Fabula.
//!
//! This crate provides:
//! - [`Entity`] - Objects the player can name, carry, wear, sit on
//! - [`Location`] - Places with exits, reach rules, and area tags
//! - [`Character`] - The player record
//! - [`Variables`] - Top-level adventure variables and author flags
//! - [`World`] - Owner of all of the above, with reachability queries
//! - [`SaveState`] - Differential snapshots against load-time defaults
//!
//! Records keep the value they had when they were loaded as a baseline.
//! Saving writes only the fields that differ from that baseline;
//! restoring resets every record and replays the differences.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod character;
pub mod entity;
pub mod fields;
pub mod location;
pub mod save;
pub mod variables;
pub mod world;

pub use character::{Character, CharacterState, Posture, Seat};
pub use entity::{Entity, EntityState, EntityText};
pub use fields::{Diff, Stateful, diff_fields};
pub use location::{ExitHint, Location, LocationState, LocationText, Reach, ReachFn};
pub use save::SaveState;
pub use variables::Variables;
pub use world::World;

/// Location value for entities the player is carrying.
pub const INVENTORY: &str = "inventory";

/// Location value for entities that have left play.
pub const DESTROYED: &str = "destroyed";
