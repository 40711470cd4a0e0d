//! Core engine types: configuration and errors.
//!
//! Everything here is shared by the board and rules modules and carries no
//! game logic of its own.

pub mod config;
pub mod error;

pub use config::{ElevensConfig, DEFAULT_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::{ConfigError, ParseCardError, SelectionError, SelectionResult};
