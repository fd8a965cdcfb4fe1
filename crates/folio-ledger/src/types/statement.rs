//! Formatted balance statements.

use std::fmt;

use folio_core::types::AssetClass;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Holding;

/// Per-class amounts reported by `balance` and `rebalance`, in registry
/// order.
///
/// `Display` renders the wire format: each amount floored toward negative
/// infinity to a whole number, space-separated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceStatement {
    amounts: Vec<(AssetClass, Decimal)>,
}

impl BalanceStatement {
    /// Builds a statement from holdings already in registry order.
    #[must_use]
    pub fn from_holdings(holdings: &[Holding]) -> Self {
        Self {
            amounts: holdings
                .iter()
                .map(|h| (h.asset_class, h.amount_invested))
                .collect(),
        }
    }

    /// Returns the exact (unfloored) amount for `class`, if present.
    #[must_use]
    pub fn amount_for(&self, class: AssetClass) -> Option<Decimal> {
        self.amounts
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, amount)| *amount)
    }

    /// Returns the amounts floored to whole units, registry order.
    #[must_use]
    pub fn floored(&self) -> Vec<Decimal> {
        self.amounts
            .iter()
            .map(|(_, amount)| amount.floor())
            .collect()
    }
}

impl fmt::Display for BalanceStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (_, amount)) in self.amounts.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", amount.floor())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn statement(amounts: [Decimal; 3]) -> BalanceStatement {
        let holdings: Vec<Holding> = AssetClass::ALL
            .into_iter()
            .zip(amounts)
            .map(|(class, amount)| Holding::new(class, amount))
            .collect();
        BalanceStatement::from_holdings(&holdings)
    }

    #[test]
    fn test_display_floors_and_joins() {
        let statement = statement([dec!(10593.00), dec!(7897.5000), dec!(2272.5)]);
        assert_eq!(statement.to_string(), "10593 7897 2272");
    }

    #[test]
    fn test_display_floors_negative_amounts_down() {
        let statement = statement([dec!(-0.5), dec!(1.9), dec!(0)]);
        assert_eq!(statement.to_string(), "-1 1 0");
    }

    #[test]
    fn test_amount_for_keeps_exact_value() {
        let statement = statement([dec!(100.25), dec!(200), dec!(300)]);
        assert_eq!(
            statement.amount_for(AssetClass::Equity),
            Some(dec!(100.25))
        );
    }

    #[test]
    fn test_floored() {
        let statement = statement([dec!(1.75), dec!(-1.75), dec!(2)]);
        assert_eq!(statement.floored(), vec![dec!(1), dec!(-2), dec!(2)]);
    }
}
