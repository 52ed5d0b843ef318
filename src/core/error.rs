//! Error types for parameter construction and move submission.
//!
//! Every error is recoverable: re-submit valid input or restart the session.
//! None of them mutate game state.

use derive_more::{Display, Error};

/// Errors surfaced by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum NimError {
    /// Raw input that is not an integer.
    #[display("Entries must be positive integers (got {:?})", _0)]
    NotAnInteger(#[error(not(source))] String),

    /// Factor outside `[2, max_entry]`.
    #[display("Entries must be between 2 and {} (got {})", max_entry, factor)]
    FactorOutOfRange {
        /// The rejected value.
        factor: i64,
        /// Upper bound in force for the session.
        max_entry: u32,
    },

    /// The session already reached its target.
    #[display("Game is already over")]
    GameOver,

    /// The session has not been started.
    #[display("Game has not been started")]
    NotStarted,

    /// Maximum entry below 3.
    #[display("Maximum entry must be at least 3 (got {})", _0)]
    InvalidMaxEntry(#[error(not(source))] u32),

    /// Target below 2.
    #[display("Target must be at least 2 (got {})", _0)]
    InvalidTarget(#[error(not(source))] u64),

    /// Snapshot bytes that could not be decoded or describe an impossible game.
    #[display("Invalid snapshot: {}", _0)]
    InvalidSnapshot(#[error(not(source))] String),
}

impl NimError {
    /// True for input validation failures the caller can re-prompt on.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, NimError::NotAnInteger(_) | NimError::FactorOutOfRange { .. })
    }

    /// True for rejected parameter sets.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, NimError::InvalidMaxEntry(_) | NimError::InvalidTarget(_))
    }
}

/// Result alias used throughout the crate.
pub type NimResult<T> = Result<T, NimError>;
