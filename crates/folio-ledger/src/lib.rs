//! # Folio Ledger
//!
//! The stateful portfolio ledger engine behind the Folio simulation.
//!
//! The engine maintains a multi-asset-class portfolio over a twelve-month
//! calendar: an initial allocation fixes the holdings and their desired
//! target weights, a monthly contribution schedule (SIP) and per-month market
//! rates feed an incremental, memoized balance computation, and
//! calendar-anchored rebalancing redistributes total value back toward the
//! desired weights.
//!
//! ## Design Philosophy
//!
//! - **Explicit ownership**: state lives in a [`LedgerEngine`] value owned by
//!   the caller - never a process-wide global - so independent simulations
//!   coexist and test in isolation
//! - **Exact arithmetic**: every amount, rate, and weight is a
//!   [`rust_decimal::Decimal`]; flooring to whole units happens only at the
//!   reporting and redistribution boundaries
//! - **Memoized advancement**: each month is computed at most once; snapshots
//!   are deep copies, never aliases of live holdings
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_ledger::prelude::*;
//!
//! let mut engine = LedgerEngine::new();
//! engine.allocate(allocation([dec!(6000), dec!(3000), dec!(1000)])).unwrap();
//! engine.init_sip(allocation([dec!(2000), dec!(1000), dec!(500)])).unwrap();
//! engine.change(allocation([dec!(4), dec!(10), dec!(2)]), Month::January).unwrap();
//!
//! let statement = engine.balance(Month::January).unwrap();
//! assert_eq!(statement.to_string(), "6240 3300 1020");
//!
//! # use std::collections::BTreeMap;
//! # use rust_decimal::Decimal;
//! # fn allocation(amounts: [Decimal; 3]) -> BTreeMap<AssetClass, Decimal> {
//! #     AssetClass::ALL.into_iter().zip(amounts).collect()
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`engine`] - the [`LedgerEngine`] orchestrator and rebalance outcomes
//! - [`portfolio`] - the mutable holding store
//! - [`rates`] - the write-once monthly market-rate ledger
//! - [`cache`] - memoized end-of-month balance snapshots
//! - [`types`] - holdings, desired weights, contribution schedule, statements

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod engine;
pub mod error;
pub mod portfolio;
pub mod rates;
pub mod types;

// Re-export error types at crate root
pub use error::{LedgerError, LedgerResult};

// Re-export main types
pub use cache::BalanceCache;
pub use engine::{LedgerEngine, RebalanceOutcome, CANNOT_REBALANCE};
pub use portfolio::Portfolio;
pub use rates::RateLedger;
pub use types::{BalanceStatement, ContributionSchedule, DesiredWeights, Holding};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use folio_ledger::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{LedgerError, LedgerResult};

    // Engine
    pub use crate::engine::{LedgerEngine, RebalanceOutcome, CANNOT_REBALANCE};

    // State types
    pub use crate::types::{BalanceStatement, ContributionSchedule, DesiredWeights, Holding};

    // Re-export commonly used types from dependencies
    pub use folio_core::types::{AssetClass, Month};
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}
