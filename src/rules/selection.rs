//! Selections: the board indices a player wants to remove together.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Board indices chosen by the player.
///
/// Legal groups have two or three cards, so up to three indices are stored
/// inline. A selection is not checked on construction; the rules validate
/// it against a board.
///
/// ## Example
///
/// ```
/// use elevens::rules::Selection;
///
/// let pair = Selection::from([0, 4]);
/// assert_eq!(pair.len(), 2);
/// assert_eq!(pair.indices(), &[0, 4]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    indices: SmallVec<[usize; 3]>,
}

impl Selection {
    /// Create a selection from a slice of indices.
    #[must_use]
    pub fn new(indices: &[usize]) -> Self {
        Self {
            indices: SmallVec::from_slice(indices),
        }
    }

    /// Add an index.
    pub fn push(&mut self, index: usize) {
        self.indices.push(index);
    }

    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

impl<const N: usize> From<[usize; N]> for Selection {
    fn from(indices: [usize; N]) -> Self {
        Self::new(&indices)
    }
}

impl From<Vec<usize>> for Selection {
    fn from(indices: Vec<usize>) -> Self {
        Self {
            indices: SmallVec::from_vec(indices),
        }
    }
}

impl FromIterator<usize> for Selection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.indices.as_slice())
    }
}
