//! Property state, ledgers and the life log

mod context;
mod ledger;
mod narrative;
mod state;


pub use context::*;
pub use ledger::*;
pub use narrative::*;
pub use state::*;
