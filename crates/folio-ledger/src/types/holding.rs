//! Holding representation.

use folio_core::types::AssetClass;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The current invested amount for one asset class.
///
/// A portfolio holds at most one `Holding` per asset class; identity is the
/// class, the amount is the mutable part. Holdings are mutated in place as
/// months advance and deep-copied (`Clone`) when archived into the balance
/// cache, so cached snapshots are never affected by later mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    /// The asset class this holding tracks.
    pub asset_class: AssetClass,

    /// The amount currently invested, as an exact decimal.
    pub amount_invested: Decimal,
}

impl Holding {
    /// Creates a new holding.
    #[must_use]
    pub fn new(asset_class: AssetClass, amount_invested: Decimal) -> Self {
        Self {
            asset_class,
            amount_invested,
        }
    }

    /// Returns the invested amount floored to a whole unit.
    ///
    /// Reports always floor toward negative infinity, never round.
    #[must_use]
    pub fn amount_floored(&self) -> Decimal {
        self.amount_invested.floor()
    }
}
