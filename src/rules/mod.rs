//! Rules for deciding which groups of cards may be removed.
//!
//! Game layers call through the `Rules` trait; `ElevensRules` is the
//! implementation. The rules never mutate a board and keep no state
//! between calls, so one instance can be shared freely across threads.

pub mod elevens;
pub mod engine;
pub mod selection;

pub use elevens::{
    contains_all_faces, contains_face_card, contains_pair_summing_to_11, has_any_legal_move,
    is_eleven_pair, is_face_triple, is_legal_group, ElevensRules, PAIR_TARGET,
};
pub use engine::Rules;
pub use selection::Selection;
