//! Engine configuration.
//!
//! `ElevensConfig` is handed to the rules at construction and never changes
//! afterwards. It controls:
//! - `board_size`: how many slots a fresh `Board` has
//! - `reject_invalid_selections`: whether contract violations surface as
//!   errors or are folded into "not legal"

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Number of slots on a standard Elevens board.
pub const DEFAULT_BOARD_SIZE: usize = 9;

/// Smallest board that can hold a jack/queen/king group.
pub const MIN_BOARD_SIZE: usize = 3;

/// Configuration for the Elevens rules.
///
/// ## Example
///
/// ```
/// use elevens::core::ElevensConfig;
///
/// let config = ElevensConfig::new().with_board_size(12).lenient();
/// assert_eq!(config.board_size, 12);
/// assert!(!config.reject_invalid_selections);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElevensConfig {
    /// Number of card slots on the board.
    pub board_size: usize,

    /// Return `SelectionError` for out-of-range, empty or repeated indices.
    ///
    /// When `false` those selections are logged and reported as not legal.
    pub reject_invalid_selections: bool,
}

impl Default for ElevensConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            reject_invalid_selections: true,
        }
    }
}

impl ElevensConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of board slots.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Treat contract violations as "not legal" instead of errors.
    #[must_use]
    pub fn lenient(mut self) -> Self {
        self.reject_invalid_selections = false;
        self
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall(self.board_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ElevensConfig::default();
        assert_eq!(config.board_size, 9);
        assert!(config.reject_invalid_selections);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ElevensConfig::new().with_board_size(13).lenient();
        assert_eq!(config.board_size, 13);
        assert!(!config.reject_invalid_selections);
    }

    #[test]
    fn test_config_validate_rejects_tiny_board() {
        let config = ElevensConfig::new().with_board_size(2);
        assert_eq!(config.validate(), Err(ConfigError::BoardTooSmall(2)));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: ElevensConfig = serde_json::from_str(r#"{"board_size": 12}"#).unwrap();
        assert_eq!(config.board_size, 12);
        assert!(config.reject_invalid_selections); // default

        let config: ElevensConfig =
            serde_json::from_str(r#"{"reject_invalid_selections": false}"#).unwrap();
        assert_eq!(config.board_size, DEFAULT_BOARD_SIZE);
        assert!(!config.reject_invalid_selections);
    }
}
