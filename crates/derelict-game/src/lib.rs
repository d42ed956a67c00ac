//! Game engine for Derelict: a survival text adventure aboard a damaged
//! space station.
//!
//! The engine is command-driven: [`GameSession::process`] takes one line of
//! player input and returns the reply text, mutating the world state from
//! `derelict-core` as it goes. Interactive sub-dialogs (door keypads, the
//! diagnostic terminal, numbered menus) run through the [`Console`] trait,
//! so frontends decide how prompts, pacing, and countdowns are rendered and
//! tests script them without real time passing.

/// Free-text command normalization.
pub mod command;
/// The console seam between the engine and its frontend.
pub mod console;
/// Item-name to use-effect mapping.
pub mod effects;
/// Error types used throughout the crate.
pub mod error;
/// Static narration and status pages.
pub mod narration;
/// The session driving one run.
pub mod session;
/// The oxygen and battery clocks.
pub mod survival;
/// Security gates and system terminals.
pub mod terminals;

/// Re-export the action type and normalizer.
pub use command::{Action, normalize};
/// Re-export the console seam.
pub use console::{Console, Pace, ScriptedConsole};
/// Re-export error types.
pub use error::{GameError, GameResult};
/// Re-export the session types.
pub use session::{GameConfig, GameSession};
/// Re-export the survival clocks.
pub use survival::{HEADLIGHT_BATTERY_BUDGET, MESS_HALL_SEARCHES_NEEDED, OxygenTick};
/// Re-export terminal codes and outcomes.
pub use terminals::{COMPUTER_PASSWORD, DOOR_CODE, GateOutcome};
