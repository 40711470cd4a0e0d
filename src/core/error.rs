//! Error types.
//!
//! The rule engine is a pure predicate, so the taxonomy is small:
//! - `SelectionError`: the caller handed in indices that do not name
//!   distinct occupied slots
//! - `ConfigError`: an `ElevensConfig` that cannot describe a playable board
//! - `ParseCardError`: a rank or suit label that is not recognized

use thiserror::Error;

/// Result type for selection checks.
pub type SelectionResult<T> = Result<T, SelectionError>;

/// A selection that violates the board contract.
///
/// These are caller bugs, not illegal moves. An illegal but well-formed
/// selection is reported as `Ok(false)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("index {index} is out of range for a board of {slot_count} slots")]
    OutOfRange { index: usize, slot_count: usize },

    #[error("slot {0} is empty")]
    EmptySlot(usize),

    #[error("index {0} appears more than once in the selection")]
    DuplicateIndex(usize),
}

impl SelectionError {
    /// The offending board index.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            SelectionError::OutOfRange { index, .. } => *index,
            SelectionError::EmptySlot(index) | SelectionError::DuplicateIndex(index) => *index,
        }
    }
}

/// Invalid engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {0} is too small (need at least {min})", min = super::config::MIN_BOARD_SIZE)]
    BoardTooSmall(usize),
}

/// An unrecognized rank or suit label.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("unknown rank: {0}")]
    UnknownRank(String),

    #[error("unknown suit: {0}")]
    UnknownSuit(String),
}
