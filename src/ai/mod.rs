//! The engine opponent: winning-move search and difficulty-weighted fallback.

pub mod selector;

pub use selector::{hint, Hint, MoveSelector, Rationale};
