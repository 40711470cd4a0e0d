//! Board system: slot storage and the read-only query interface.
//!
//! The rules only ever see a `BoardView`. `Board` is the engine's own
//! snapshot type; games with their own storage implement `BoardView`
//! directly.

pub mod snapshot;
pub mod view;

pub use snapshot::Board;
pub use view::BoardView;
