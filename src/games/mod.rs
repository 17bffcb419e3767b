//! The five game variants: one `Ruleset`/`Oracle` pair each.
//!
//! Heap-taking Nim and the coin-row game share the take-from-one-heap
//! mechanics over [`nim::Heaps`]; factor subtraction carries its own
//! dynamic-programming oracle; tower connection and pile splitting classify
//! positions lazily through [`crate::rules::search`].

pub mod coin_row;
pub mod factor;
pub mod nim;
pub mod piles;
pub mod towers;

pub use coin_row::CoinRow;
pub use factor::{FactorMove, FactorPosition, FactorSubtraction};
pub use nim::{HeapNim, Heaps, TakeMove};
pub use piles::{PileMove, PilePosition, PileSplit};
pub use towers::{ConnectMove, TowerConnection, TowerPosition};
