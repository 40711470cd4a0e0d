//! Read-only board queries.
//!
//! `BoardView` is the whole surface the rules need from a board. Anything
//! that can answer "which card sits in slot i" can be evaluated, whether it
//! is a `Board`, a plain slice of slots, or a game's own storage.

use crate::cards::Card;

/// Read-only access to the card slots of a board.
///
/// Slot indices are stable identifiers: removing a card empties its slot
/// without shifting any other.
pub trait BoardView {
    /// Total number of slots, occupied or not.
    fn slot_count(&self) -> usize;

    /// The card in `index`, or `None` if the slot is empty or out of range.
    fn card_at(&self, index: usize) -> Option<&Card>;

    /// Indices of all occupied slots, ascending.
    fn occupied_indices(&self) -> Vec<usize> {
        (0..self.slot_count())
            .filter(|&i| self.card_at(i).is_some())
            .collect()
    }

    /// Cards in all occupied slots, in slot order.
    fn occupied_cards(&self) -> Vec<Card> {
        (0..self.slot_count())
            .filter_map(|i| self.card_at(i).copied())
            .collect()
    }
}

impl BoardView for [Option<Card>] {
    fn slot_count(&self) -> usize {
        self.len()
    }

    fn card_at(&self, index: usize) -> Option<&Card> {
        self.get(index).and_then(Option::as_ref)
    }
}

impl BoardView for Vec<Option<Card>> {
    fn slot_count(&self) -> usize {
        self.len()
    }

    fn card_at(&self, index: usize) -> Option<&Card> {
        self.as_slice().card_at(index)
    }
}

impl<B: BoardView + ?Sized> BoardView for &B {
    fn slot_count(&self) -> usize {
        (**self).slot_count()
    }

    fn card_at(&self, index: usize) -> Option<&Card> {
        (**self).card_at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn slots() -> Vec<Option<Card>> {
        vec![
            Some(Card::new(Rank::Ace, Suit::Spades)),
            None,
            Some(Card::new(Rank::King, Suit::Hearts)),
        ]
    }

    #[test]
    fn test_slice_view() {
        let slots = slots();
        let view: &[Option<Card>] = &slots;

        assert_eq!(view.slot_count(), 3);
        assert_eq!(view.card_at(0).map(|c| c.rank), Some(Rank::Ace));
        assert_eq!(view.card_at(1), None);
        assert_eq!(view.card_at(7), None);
    }

    #[test]
    fn test_occupied_defaults() {
        let slots = slots();
        assert_eq!(slots.occupied_indices(), vec![0, 2]);
        assert_eq!(
            slots.occupied_cards(),
            vec![
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::King, Suit::Hearts)
            ]
        );
    }

    #[test]
    fn test_empty_view() {
        let slots: Vec<Option<Card>> = vec![None; 4];
        assert_eq!(slots.slot_count(), 4);
        assert!(slots.occupied_indices().is_empty());
    }
}
