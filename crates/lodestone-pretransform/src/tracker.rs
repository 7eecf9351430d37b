//! Loader-side bookkeeping for deferred columns.

use hashbrown::HashMap;
use lodestone_column::ColumnPos;

use crate::edge::EdgeSet;
use crate::manager::DeferredColumn;

/// Maps each column with outstanding pre-transforms to its deferred
/// record. The loader parks records here after `solve` and takes them back
/// once the required neighbor set has settled.
#[derive(Default)]
pub struct DeferredTracker {
    pending: HashMap<ColumnPos, DeferredColumn>,
}

impl DeferredTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park a column's deferred work. A column is solved exactly once, so
    /// a second record for the same position is a caller bug.
    pub fn defer(&mut self, pos: ColumnPos, deferred: DeferredColumn) {
        let previous = self.pending.insert(pos, deferred);
        assert!(
            previous.is_none(),
            "column ({}, {}) already has deferred work",
            pos.x,
            pos.z,
        );
    }

    /// The edges a parked column is still waiting on.
    pub fn required_edges(&self, pos: ColumnPos) -> Option<EdgeSet> {
        self.pending.get(&pos).map(|deferred| deferred.edges())
    }

    /// Take back a column's deferred record for its `solve_edges` pass.
    pub fn take(&mut self, pos: ColumnPos) -> Option<DeferredColumn> {
        self.pending.remove(&pos)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Positions with outstanding work, in no particular order.
    pub fn positions(&self) -> impl Iterator<Item = ColumnPos> + '_ {
        self.pending.keys().copied()
    }
}
