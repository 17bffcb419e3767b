//! The rule-set capability interface and the lazy outcome search.

pub mod ruleset;
pub mod search;

pub use ruleset::{Oracle, Ruleset, Setup};
