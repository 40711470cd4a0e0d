//! # elevens
//!
//! Rule engine for the Elevens solitaire card game.
//!
//! ## Rules
//!
//! Cards sit in a fixed row of board slots. A player may remove:
//!
//! 1. **A pair** of non-face cards whose point values add up to 11
//!    (ace counts 1, pips count their number).
//! 2. **A triple** made of one jack, one queen and one king.
//!
//! The game is lost when no such group is left on the board.
//!
//! ## Design Principles
//!
//! - **Stateless**: the rules are pure functions of a board snapshot and a
//!   selection. Nothing is cached between calls.
//! - **Read-only boards**: the rules see a board only through `BoardView`.
//!   Dealing, replacement and shuffling stay with the game layer.
//! - **Loud contract violations**: out-of-range, empty or repeated indices
//!   are reported as `SelectionError`, not silently treated as illegal
//!   (unless the configuration asks for that).
//!
//! ## Modules
//!
//! - `core`: configuration and errors
//! - `cards`: ranks, suits, cards
//! - `board`: `BoardView` query trait and the `Board` snapshot
//! - `rules`: `Selection`, the `Rules` trait and `ElevensRules`

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, ElevensConfig, ParseCardError, SelectionError, SelectionResult,
    DEFAULT_BOARD_SIZE,
};

pub use crate::cards::{Card, Rank, Suit};

pub use crate::board::{Board, BoardView};

pub use crate::rules::{
    has_any_legal_move, is_legal_group, ElevensRules, Rules, Selection, PAIR_TARGET,
};
