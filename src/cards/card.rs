//! Card values.
//!
//! A `Card` is an immutable (rank, suit) pair. Its point value is always
//! derived from the rank, so two cards of the same rank can never disagree.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rank::{Rank, Suit};

/// A single playing card.
///
/// ## Example
///
/// ```
/// use elevens::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.point_value(), 1);
/// assert_eq!(card.to_string(), "ace of spades (point value = 1)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Point value fixed by rank.
    #[must_use]
    pub const fn point_value(self) -> u8 {
        self.rank.point_value()
    }

    /// Jack, queen or king.
    #[must_use]
    pub const fn is_face(self) -> bool {
        self.rank.is_face()
    }

    /// Every rank of every suit, suit-major in deck order.
    #[must_use]
    pub fn standard_deck() -> Vec<Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
            .collect()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} (point value = {})",
            self.rank,
            self.suit,
            self.point_value()
        )
    }
}
