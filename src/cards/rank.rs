//! Ranks and suits.
//!
//! Ranks are compared by value. The rank alone fixes a card's point value;
//! suits only matter for display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ParseCardError;

/// Card rank, ace through king.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in deck order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// The three face ranks.
    pub const FACES: [Rank; 3] = [Rank::Jack, Rank::Queen, Rank::King];

    /// Point value in Elevens: ace is 1, pips are literal, faces are 0.
    #[must_use]
    pub const fn point_value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack | Rank::Queen | Rank::King => 0,
        }
    }

    /// Jack, queen or king.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    /// Lowercase label ("ace", "2", ..., "king").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Rank::ALL
            .into_iter()
            .find(|rank| rank.label() == lower)
            .ok_or_else(|| ParseCardError::UnknownRank(s.to_string()))
    }
}

/// Card suit. Irrelevant to the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Suit::ALL
            .into_iter()
            .find(|suit| suit.label() == lower)
            .ok_or_else(|| ParseCardError::UnknownSuit(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_values() {
        let values: Vec<u8> = Rank::ALL.iter().map(|r| r.point_value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0, 0, 0]);
    }

    #[test]
    fn test_faces() {
        for rank in Rank::ALL {
            assert_eq!(rank.is_face(), Rank::FACES.contains(&rank));
            assert_eq!(rank.is_face(), rank.point_value() == 0);
        }
    }

    #[test]
    fn test_rank_parse() {
        assert_eq!("ace".parse::<Rank>(), Ok(Rank::Ace));
        assert_eq!("10".parse::<Rank>(), Ok(Rank::Ten));
        assert_eq!(" Queen ".parse::<Rank>(), Ok(Rank::Queen));
        assert_eq!(
            "joker".parse::<Rank>(),
            Err(ParseCardError::UnknownRank("joker".to_string()))
        );
    }

    #[test]
    fn test_rank_label_round_trips() {
        for rank in Rank::ALL {
            assert_eq!(rank.to_string().parse::<Rank>(), Ok(rank));
        }
    }

    #[test]
    fn test_suit_parse() {
        assert_eq!("HEARTS".parse::<Suit>(), Ok(Suit::Hearts));
        assert!("stars".parse::<Suit>().is_err());
    }

    #[test]
    fn test_rank_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Rank::Jack).unwrap(), "\"jack\"");
        assert_eq!(serde_json::to_string(&Suit::Clubs).unwrap(), "\"clubs\"");
    }
}
