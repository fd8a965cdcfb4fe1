//! Memoized end-of-month balance snapshots.

use std::collections::BTreeMap;

use folio_core::types::Month;
use serde::{Deserialize, Serialize};

use crate::types::Holding;

/// Immutable snapshots of portfolio holdings as of the end of each month.
///
/// Entries are created lazily in ascending month order and reused across
/// repeated balance queries. The first rebalance event evicts the second
/// half of the year to force recomputation from a new baseline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceCache {
    snapshots: BTreeMap<Month, Vec<Holding>>,
}

impl BalanceCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a snapshot exists for `month`.
    #[must_use]
    pub fn contains(&self, month: Month) -> bool {
        self.snapshots.contains_key(&month)
    }

    /// Archives the end-of-month snapshot for `month`.
    pub fn insert(&mut self, month: Month, snapshot: Vec<Holding>) {
        self.snapshots.insert(month, snapshot);
    }

    /// Returns the snapshot for `month`, if cached.
    #[must_use]
    pub fn get(&self, month: Month) -> Option<&[Holding]> {
        self.snapshots.get(&month).map(Vec::as_slice)
    }

    /// Removes every snapshot from `first` through December, forcing those
    /// months to recompute on the next query.
    pub fn evict_from(&mut self, first: Month) {
        self.snapshots.retain(|month, _| *month < first);
    }
}
