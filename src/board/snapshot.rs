//! Board snapshots.
//!
//! `Board` is a fixed row of card slots. Slots are backed by `im::Vector`,
//! so cloning a board to hand a snapshot to the rules is O(1) and the
//! snapshot never observes later mutation.
//!
//! Deciding *which* card goes into a slot (dealing, replacement) belongs to
//! the game layer; `Board` only stores what it is given.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::view::BoardView;
use crate::cards::Card;
use crate::core::{ElevensConfig, SelectionError, SelectionResult};

/// A row of card slots, some possibly empty.
///
/// ## Example
///
/// ```
/// use elevens::board::{Board, BoardView};
/// use elevens::cards::{Card, Rank, Suit};
///
/// let mut board = Board::new(9);
/// board.place(0, Card::new(Rank::Ace, Suit::Spades)).unwrap();
/// board.place(4, Card::new(Rank::Ten, Suit::Hearts)).unwrap();
///
/// assert_eq!(board.occupied_indices(), vec![0, 4]);
/// assert_eq!(board.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    slots: Vector<Option<Card>>,
}

impl Board {
    /// Create a board with `slot_count` empty slots.
    #[must_use]
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: std::iter::repeat(None).take(slot_count).collect(),
        }
    }

    /// Create an empty board sized by the configuration.
    #[must_use]
    pub fn from_config(config: &ElevensConfig) -> Self {
        Self::new(config.board_size)
    }

    /// Create a board from explicit slot contents.
    pub fn from_slots(slots: impl IntoIterator<Item = Option<Card>>) -> Self {
        Self {
            slots: slots.into_iter().collect(),
        }
    }

    /// Create a fully occupied board, one card per slot.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self::from_slots(cards.into_iter().map(Some))
    }

    /// Put `card` into slot `index`, returning the previous occupant.
    pub fn place(&mut self, index: usize, card: Card) -> SelectionResult<Option<Card>> {
        self.check_index(index)?;
        Ok(self.slots.set(index, Some(card)))
    }

    /// Empty slot `index`, returning what was there.
    pub fn take(&mut self, index: usize) -> SelectionResult<Option<Card>> {
        self.check_index(index)?;
        Ok(self.slots.set(index, None))
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True when no slot holds a card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterate over all slots in index order.
    pub fn slots(&self) -> impl Iterator<Item = &Option<Card>> {
        self.slots.iter()
    }

    fn check_index(&self, index: usize) -> SelectionResult<()> {
        if index >= self.slots.len() {
            return Err(SelectionError::OutOfRange {
                index,
                slot_count: self.slots.len(),
            });
        }
        Ok(())
    }
}

impl BoardView for Board {
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn card_at(&self, index: usize) -> Option<&Card> {
        self.slots.get(index).and_then(Option::as_ref)
    }
}

impl FromIterator<Option<Card>> for Board {
    fn from_iter<I: IntoIterator<Item = Option<Card>>>(iter: I) -> Self {
        Self::from_slots(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(9);
        assert_eq!(board.slot_count(), 9);
        assert!(board.is_empty());
        assert_eq!(board.len(), 0);
        assert!(board.occupied_indices().is_empty());
    }

    #[test]
    fn test_from_config() {
        let board = Board::from_config(&ElevensConfig::new().with_board_size(12));
        assert_eq!(board.slot_count(), 12);
    }

    #[test]
    fn test_place_and_take() {
        let mut board = Board::new(3);
        let ace = Card::new(Rank::Ace, Suit::Clubs);
        let two = Card::new(Rank::Two, Suit::Clubs);

        assert_eq!(board.place(1, ace), Ok(None));
        assert_eq!(board.place(1, two), Ok(Some(ace)));
        assert_eq!(board.card_at(1), Some(&two));
        assert_eq!(board.take(1), Ok(Some(two)));
        assert_eq!(board.take(1), Ok(None));
        assert!(board.is_empty());
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = Board::new(3);
        let err = board.place(3, Card::new(Rank::Ace, Suit::Clubs)).unwrap_err();
        assert_eq!(err, SelectionError::OutOfRange { index: 3, slot_count: 3 });
        assert_eq!(board.take(10).unwrap_err().index(), 10);
    }

    #[test]
    fn test_snapshot_is_isolated() {
        let mut board = Board::from_cards([
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ten, Suit::Spades),
        ]);
        let snapshot = board.clone();

        board.take(0).unwrap();

        assert_eq!(board.occupied_indices(), vec![1]);
        assert_eq!(snapshot.occupied_indices(), vec![0, 1]);
    }

    #[test]
    fn test_indices_are_stable() {
        let mut board = Board::from_cards([
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Three, Suit::Spades),
            Card::new(Rank::Four, Suit::Spades),
        ]);
        board.take(0).unwrap();

        assert_eq!(board.card_at(2).map(|c| c.rank), Some(Rank::Four));
        assert_eq!(board.card_at(0), None);
    }
}
