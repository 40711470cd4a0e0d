//! The Elevens rules.
//!
//! Two shapes of group may be removed:
//! - a pair of non-face cards whose point values sum to 11
//! - a jack, a queen and a king, in any order
//!
//! Face cards are worth 0, so they are excluded from pairs explicitly
//! rather than relying on the sum.

use log::{debug, trace};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::engine::Rules;
use super::selection::Selection;
use crate::board::BoardView;
use crate::cards::{Card, Rank};
use crate::core::{ElevensConfig, SelectionError, SelectionResult};

/// Point total a pair must reach.
pub const PAIR_TARGET: u8 = 11;

/// True if any card is a jack, queen or king.
pub fn contains_face_card<'a>(cards: impl IntoIterator<Item = &'a Card>) -> bool {
    cards.into_iter().any(|card| card.is_face())
}

/// Two non-face cards worth 11 together.
#[must_use]
pub fn is_eleven_pair(a: &Card, b: &Card) -> bool {
    !contains_face_card([a, b]) && a.point_value() + b.point_value() == PAIR_TARGET
}

/// True if some two cards in `cards` form an eleven pair.
#[must_use]
pub fn contains_pair_summing_to_11(cards: &[Card]) -> bool {
    cards
        .iter()
        .enumerate()
        .any(|(i, a)| cards[i + 1..].iter().any(|b| is_eleven_pair(a, b)))
}

/// Exactly three cards: one jack, one queen, one king.
#[must_use]
pub fn is_face_triple(cards: &[Card]) -> bool {
    cards.len() == 3 && contains_all_faces(cards)
}

/// True if jack, queen and king all appear among `cards`.
#[must_use]
pub fn contains_all_faces(cards: &[Card]) -> bool {
    let ranks: FxHashSet<Rank> = cards.iter().map(|card| card.rank).collect();
    Rank::FACES.iter().all(|face| ranks.contains(face))
}

/// Stateless Elevens rules.
///
/// ## Example
///
/// ```
/// use elevens::board::Board;
/// use elevens::cards::{Card, Rank, Suit};
/// use elevens::rules::{ElevensRules, Rules, Selection};
///
/// let board = Board::from_cards([
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Ten, Suit::Hearts),
/// ]);
/// let rules = ElevensRules::new();
///
/// assert_eq!(rules.is_legal_group(&board, &Selection::from([0, 1])), Ok(true));
/// assert!(rules.has_any_legal_move(&board));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ElevensRules {
    config: ElevensConfig,
}

impl ElevensRules {
    /// Create rules with the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create rules with a custom configuration.
    #[must_use]
    pub fn with_config(config: ElevensConfig) -> Self {
        Self { config }
    }

    /// Look up the selected cards, rejecting bad indices.
    fn resolve<B: BoardView + ?Sized>(
        board: &B,
        selection: &Selection,
    ) -> SelectionResult<SmallVec<[Card; 3]>> {
        let slot_count = board.slot_count();
        let mut seen = FxHashSet::default();
        let mut cards = SmallVec::new();

        for index in selection.iter() {
            if index >= slot_count {
                return Err(SelectionError::OutOfRange { index, slot_count });
            }
            if !seen.insert(index) {
                return Err(SelectionError::DuplicateIndex(index));
            }
            let card = board.card_at(index).ok_or(SelectionError::EmptySlot(index))?;
            cards.push(*card);
        }

        Ok(cards)
    }
}

impl Rules for ElevensRules {
    fn config(&self) -> &ElevensConfig {
        &self.config
    }

    fn is_legal_group<B: BoardView + ?Sized>(
        &self,
        board: &B,
        selection: &Selection,
    ) -> SelectionResult<bool> {
        let cards = match Self::resolve(board, selection) {
            Ok(cards) => cards,
            Err(err) if self.config.reject_invalid_selections => {
                debug!("rejecting selection {}: {}", selection, err);
                return Err(err);
            }
            Err(err) => {
                debug!("treating selection {} as illegal: {}", selection, err);
                return Ok(false);
            }
        };

        let legal = match cards.as_slice() {
            [a, b] => is_eleven_pair(a, b),
            [_, _, _] => is_face_triple(&cards),
            _ => false,
        };

        trace!("selection {} legal = {}", selection, legal);
        Ok(legal)
    }

    fn has_any_legal_move<B: BoardView + ?Sized>(&self, board: &B) -> bool {
        let cards = board.occupied_cards();
        let found = contains_all_faces(&cards) || contains_pair_summing_to_11(&cards);

        trace!("scanned {} occupied slots, legal move = {}", cards.len(), found);
        found
    }
}

/// Check a selection with the standard rules.
pub fn is_legal_group<B: BoardView + ?Sized>(
    board: &B,
    selection: &Selection,
) -> SelectionResult<bool> {
    ElevensRules::new().is_legal_group(board, selection)
}

/// Check for any legal group with the standard rules.
pub fn has_any_legal_move<B: BoardView + ?Sized>(board: &B) -> bool {
    ElevensRules::new().has_any_legal_move(board)
}
