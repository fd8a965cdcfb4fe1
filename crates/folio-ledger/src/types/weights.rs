//! Desired target weights, fixed at initial allocation.

use std::collections::BTreeMap;

use folio_core::types::AssetClass;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Holding;

/// Target percentage share of total portfolio value per asset class.
///
/// Computed exactly once from the initial allocation:
/// `floor(initial amount x 100 / initial total)` per class. Floor rounding
/// means the weights need not sum to exactly 100; that shortfall is accepted,
/// not corrected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesiredWeights {
    percentages: BTreeMap<AssetClass, Decimal>,
}

impl DesiredWeights {
    /// Computes the weights from the freshly allocated holdings.
    #[must_use]
    pub fn from_holdings(holdings: &[Holding]) -> Self {
        let total: Decimal = holdings.iter().map(|h| h.amount_invested).sum();
        if total == Decimal::ZERO {
            return Self::default();
        }

        let percentages = holdings
            .iter()
            .map(|h| {
                let weight = (h.amount_invested * Decimal::ONE_HUNDRED / total).floor();
                (h.asset_class, weight)
            })
            .collect();

        Self { percentages }
    }

    /// Returns the target percentage for `class`, zero when unset.
    #[must_use]
    pub fn weight_for(&self, class: AssetClass) -> Decimal {
        self.percentages
            .get(&class)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns the sum of all target percentages.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.percentages.values().copied().sum()
    }
}
