//! Error types for the ledger engine.
//!
//! Every error is local to the single operation that raised it; a batch of
//! commands keeps processing after a failed one.

use folio_core::types::Month;
use thiserror::Error;

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors that can occur during ledger operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The initial allocation was attempted a second time.
    #[error("Funds are already allocated")]
    AlreadyAllocated,

    /// The allocation did not cover exactly the full asset class registry.
    #[error("Allocation must cover all asset classes (expected {expected}, got {got})")]
    IncompleteAllocation {
        /// Number of registered asset classes.
        expected: usize,
        /// Number of entries supplied.
        got: usize,
    },

    /// The contribution schedule was registered a second time.
    #[error("The SIP is already registered")]
    ContributionAlreadyRegistered,

    /// The contribution schedule did not cover the full registry.
    #[error("SIP must cover all asset classes (expected {expected}, got {got})")]
    IncompleteContribution {
        /// Number of registered asset classes.
        expected: usize,
        /// Number of entries supplied.
        got: usize,
    },

    /// A rate of change was already registered for the month.
    #[error("Rate of change for {month} is already registered")]
    DuplicateMonthRate {
        /// The month that already has rates.
        month: Month,
    },

    /// The rate set did not cover the full registry.
    #[error("Rate input must cover all asset classes (expected {expected}, got {got})")]
    InvalidRateInput {
        /// Number of registered asset classes.
        expected: usize,
        /// Number of entries supplied.
        got: usize,
    },

    /// Balance advancement reached a month with no registered rate.
    #[error("No rate of change registered for {month}")]
    MissingRateForMonth {
        /// The month missing a rate set.
        month: Month,
    },

    /// A balance or rebalance was requested before any allocation.
    #[error("Portfolio has not been allocated")]
    NotAllocated,

    /// A cached snapshot the rebalance baseline depends on was absent.
    #[error("No cached balance snapshot for {month}")]
    MissingSnapshot {
        /// The month whose snapshot was expected.
        month: Month,
    },
}
