//! The mutable holding store.

use folio_core::types::AssetClass;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Holding;

/// The current holdings of one simulated portfolio.
///
/// Holdings are created once by the initial allocation, one per asset class
/// in registry order, and mutated in place as months advance. Keeping the
/// vector in registry order makes every report's column order fall out of
/// plain iteration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    holdings: Vec<Holding>,
}

impl Portfolio {
    /// Creates an empty, unallocated portfolio.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the initial allocation has run.
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        !self.holdings.is_empty()
    }

    /// Installs the initial holdings. Coverage is validated by the engine.
    pub fn install(&mut self, holdings: Vec<Holding>) {
        self.holdings = holdings;
    }

    /// Returns the holdings in registry order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Returns mutable access to the holdings for month advancement.
    pub fn holdings_mut(&mut self) -> &mut [Holding] {
        &mut self.holdings
    }

    /// Sum of all invested amounts.
    #[must_use]
    pub fn total_investment(&self) -> Decimal {
        self.holdings.iter().map(|h| h.amount_invested).sum()
    }

    /// Deep-copies the holdings for archival into the balance cache.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Holding> {
        self.holdings.clone()
    }

    /// Overwrites invested amounts from a cached snapshot.
    ///
    /// Snapshots carry one entry per asset class; classes absent from the
    /// snapshot are left untouched.
    pub fn restore(&mut self, snapshot: &[Holding]) {
        for holding in &mut self.holdings {
            if let Some(archived) = snapshot
                .iter()
                .find(|s| s.asset_class == holding.asset_class)
            {
                holding.amount_invested = archived.amount_invested;
            }
        }
    }
}
