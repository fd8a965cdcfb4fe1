//! The asset class registry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// One of the fixed set of investment categories tracked independently.
///
/// Declaration order is significant: it fixes the column order of every
/// textual output and the order positional command arguments are zipped to
/// classes. The derived `Ord` follows declaration order, so ordered maps
/// keyed by `AssetClass` iterate in registry order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AssetClass {
    /// Equity funds.
    Equity,
    /// Debt funds.
    Debt,
    /// Gold.
    Gold,
}

impl AssetClass {
    /// The full registry, in declaration order.
    pub const ALL: [AssetClass; 3] = [AssetClass::Equity, AssetClass::Debt, AssetClass::Gold];

    /// Returns the number of registered asset classes.
    #[must_use]
    pub const fn count() -> usize {
        Self::ALL.len()
    }

    /// Returns the uppercase wire name used in commands and logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            AssetClass::Equity => "EQUITY",
            AssetClass::Debt => "DEBT",
            AssetClass::Gold => "GOLD",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AssetClass {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::unknown_asset_class(s))
    }
}
