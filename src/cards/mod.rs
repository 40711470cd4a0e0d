//! Card system: ranks, suits and card values.
//!
//! ## Key Types
//!
//! - `Rank`: ace..king, carries the Elevens point value
//! - `Suit`: display only
//! - `Card`: immutable (rank, suit) value

pub mod card;
pub mod rank;

pub use card::Card;
pub use rank::{Rank, Suit};
