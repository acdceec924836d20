//! Append-only ID ledgers for acquired talents and triggered events

use ahash::AHashSet;

/// Unbounded insertion-ordered membership set
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    order: Vec<i32>,
    members: AHashSet<i32>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id`. Returns false when it was already present.
    #[inline]
    pub fn insert(&mut self, id: i32) -> bool {
        if !self.members.insert(id) {
            return false;
        }
        self.order.push(id);
        true
    }

    #[inline]
    pub fn contains(&self, id: i32) -> bool {
        self.members.contains(&id)
    }

    /// At least one of `ids` is present. Empty `ids` is never satisfied.
    #[inline]
    pub fn contains_any(&self, ids: &[i32]) -> bool {
        ids.iter().any(|id| self.members.contains(id))
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Members in insertion order
    pub fn ids(&self) -> &[i32] {
        &self.order
    }
}
