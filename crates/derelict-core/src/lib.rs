//! Core types for Derelict: rooms, items, and station state.
//!
//! This crate defines the world model the game engine mutates. It is pure
//! data plus the invariants that keep it consistent — no I/O, no randomness,
//! no command handling. You can construct a [`GameState`] and drive it
//! programmatically without the rest of the workspace.

/// Error types used throughout the crate.
pub mod error;
/// The bounded, ordered container of carried items.
pub mod inventory;
/// Items and their identity semantics.
pub mod item;
/// Room identifiers, static room data, and per-room contents.
pub mod room;
/// The single mutable aggregate describing one run.
pub mod state;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the inventory container.
pub use inventory::Inventory;
/// Re-export the item type.
pub use item::Item;
/// Re-export room types.
pub use room::{Room, RoomId};
/// Re-export run-state types.
pub use state::{GameState, OXYGEN_BUDGET, Phase};
