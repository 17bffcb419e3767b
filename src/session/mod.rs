//! Turn orchestration: session state machine and starting-position setup.

pub mod session;
pub mod setup;

pub use session::{GameSession, MoveOutcome, MoveRecord};
pub use setup::MAX_START_ATTEMPTS;
