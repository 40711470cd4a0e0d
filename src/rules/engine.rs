//! Rules trait for game layers.
//!
//! A game layer owns the board and asks the rules two questions:
//! - Is this selection a removable group?
//! - Is any removable group left on the board?
//!
//! Implementations must be pure: the same board and selection always give
//! the same answer, and nothing is remembered between calls.

use super::selection::Selection;
use crate::board::BoardView;
use crate::core::{ElevensConfig, SelectionResult};

/// Rules trait.
///
/// ## Implementation Notes
///
/// - `is_legal_group`: `Err` only for contract violations (bad indices);
///   a well-formed but illegal selection is `Ok(false)`
/// - `has_any_legal_move`: existence only, never which move
/// - `legal_groups`: defaults to checking every pair and triple of
///   occupied slots
pub trait Rules {
    /// Get the rules configuration.
    fn config(&self) -> &ElevensConfig;

    /// Check whether `selection` may be removed from `board`.
    fn is_legal_group<B: BoardView + ?Sized>(
        &self,
        board: &B,
        selection: &Selection,
    ) -> SelectionResult<bool>;

    /// Check whether any legal group exists among the occupied slots.
    fn has_any_legal_move<B: BoardView + ?Sized>(&self, board: &B) -> bool;

    // === Convenience Methods ===

    /// Enumerate every legal group on the board.
    ///
    /// Pairs come first, then triples, each in ascending index order.
    fn legal_groups<B: BoardView + ?Sized>(&self, board: &B) -> Vec<Selection> {
        let occupied = board.occupied_indices();
        let mut groups = Vec::new();

        for (i, &a) in occupied.iter().enumerate() {
            for &b in &occupied[i + 1..] {
                let pair = Selection::from([a, b]);
                if self.is_legal_group(board, &pair).unwrap_or(false) {
                    groups.push(pair);
                }
            }
        }

        for (i, &a) in occupied.iter().enumerate() {
            for (j, &b) in occupied.iter().enumerate().skip(i + 1) {
                for &c in &occupied[j + 1..] {
                    let triple = Selection::from([a, b, c]);
                    if self.is_legal_group(board, &triple).unwrap_or(false) {
                        groups.push(triple);
                    }
                }
            }
        }

        groups
    }
}
