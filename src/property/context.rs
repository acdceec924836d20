//! Per-life mutable context

use super::{Ledger, Narrative, PropertyState};

/// Everything one life reads and writes: attributes, both ledgers and the log.
///
/// Owned exclusively by the running life and passed by reference into every
/// selector and runner.
#[derive(Debug, Clone, Default)]
pub struct LifeContext {
    pub state: PropertyState,
    pub talents: Ledger,
    pub events: Ledger,
    pub log: Narrative,
}

impl LifeContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.talents.clear();
        self.events.clear();
        self.log.clear();
    }
}
