//! The monthly market-rate ledger.

use std::collections::BTreeMap;

use folio_core::types::{AssetClass, Month};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-month, per-asset-class percentage rates of market change.
///
/// Grows monotonically, one entry per registered month; each month is
/// write-once. The number of recorded months drives the rebalance state
/// machine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateLedger {
    rates: BTreeMap<Month, BTreeMap<AssetClass, Decimal>>,
}

impl RateLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a rate set is already registered for `month`.
    #[must_use]
    pub fn contains(&self, month: Month) -> bool {
        self.rates.contains_key(&month)
    }

    /// Stores the rate set for `month`. Duplicates and coverage are
    /// validated by the engine.
    pub fn register(&mut self, month: Month, rates: BTreeMap<AssetClass, Decimal>) {
        self.rates.insert(month, rates);
    }

    /// Returns the rate set registered for `month`, if any.
    #[must_use]
    pub fn for_month(&self, month: Month) -> Option<&BTreeMap<AssetClass, Decimal>> {
        self.rates.get(&month)
    }

    /// Number of months with registered rates.
    #[must_use]
    pub fn months_recorded(&self) -> usize {
        self.rates.len()
    }
}
