//! Consensus module - Block structure, transactions, difficulty encoding, and rewards

mod block;
mod difficulty;
mod rewards;
mod script;
mod transaction;

pub use block::*;
pub use difficulty::*;
pub use rewards::*;
pub use script::*;
pub use transaction::*;
