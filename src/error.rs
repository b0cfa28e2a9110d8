//! Error types for the roshambo game library

use thiserror::Error;

/// Main error type for the game library
#[derive(Debug, Clone, Error)]
pub enum GameError {
    /// Construction-time failure: the move list or configuration is unusable.
    /// Fatal, surfaced to the user as a usage message.
    #[error("Configuration error: {message}")]
    Configuration { message: String, field: String },

    /// A malformed or out-of-range move selection. Recoverable: the session
    /// re-prompts without touching the pending round.
    #[error("Invalid move: {input}")]
    InvalidInput { input: String },

    /// A move that is not a member of the active move set reached the rule
    /// engine. Upstream validation was bypassed; not recoverable.
    #[error("Move not in move set: {0}")]
    InvalidMove(String),

    /// The secure random source failed to produce bytes. There is no safe
    /// fallback, so the session aborts.
    #[error("Entropy source failure: {0}")]
    Entropy(String),
}

impl From<rand::Error> for GameError {
    fn from(err: rand::Error) -> Self {
        GameError::Entropy(err.to_string())
    }
}

/// Type alias for the main result type used throughout the library
pub type GameResult<T> = Result<T, GameError>;
