//! Error types for the game engine.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors surfaced to the player as inline refusals.
///
/// Everything here is recoverable: the REPL prints the message and loops
/// without mutating game state.
#[derive(Debug, Error)]
pub enum GameError {
    /// Input the normalizer could not map to an action. The message is the
    /// player-facing hint, shown verbatim.
    #[error("{0}")]
    Unrecognized(String),

    /// A numeric sub-prompt received a non-numeric or out-of-range entry.
    #[error("Invalid input. Please enter a number between 0 and {max}.")]
    InvalidSelection {
        /// Highest valid selection.
        max: usize,
    },

    /// A world-model invariant refused the operation.
    #[error(transparent)]
    Core(#[from] derelict_core::CoreError),
}
