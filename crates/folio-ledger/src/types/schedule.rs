//! The monthly contribution schedule (SIP).

use std::collections::BTreeMap;

use folio_core::types::AssetClass;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed per-month contribution amounts, one per asset class.
///
/// Set at most once. Contributions apply from the second simulated month
/// onward (February), before that month's market movement. An unregistered
/// schedule contributes zero for every class.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContributionSchedule {
    amounts: BTreeMap<AssetClass, Decimal>,
}

impl ContributionSchedule {
    /// Creates an empty, unregistered schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once a schedule has been registered.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        !self.amounts.is_empty()
    }

    /// Stores the schedule verbatim. Coverage is validated by the engine.
    pub fn register(&mut self, amounts: BTreeMap<AssetClass, Decimal>) {
        self.amounts = amounts;
    }

    /// Returns the monthly contribution for `class`, zero when unset.
    #[must_use]
    pub fn amount_for(&self, class: AssetClass) -> Decimal {
        self.amounts.get(&class).copied().unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unregistered_contributes_zero() {
        let schedule = ContributionSchedule::new();
        assert!(!schedule.is_registered());
        assert_eq!(schedule.amount_for(AssetClass::Equity), Decimal::ZERO);
    }

    #[test]
    fn test_registered_amounts() {
        let mut schedule = ContributionSchedule::new();
        schedule.register(
            AssetClass::ALL
                .into_iter()
                .zip([dec!(2000), dec!(1000), dec!(500)])
                .collect(),
        );

        assert!(schedule.is_registered());
        assert_eq!(schedule.amount_for(AssetClass::Equity), dec!(2000));
        assert_eq!(schedule.amount_for(AssetClass::Gold), dec!(500));
    }
}
