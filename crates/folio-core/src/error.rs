//! Error types for the Folio core crate.
//!
//! This module defines the structured errors raised when parsing or
//! validating the core domain types.

use thiserror::Error;

/// A specialized Result type for Folio core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the core domain types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An asset class name did not match the registry.
    #[error("Unknown asset class: {name}")]
    UnknownAssetClass {
        /// The name that failed to parse.
        name: String,
    },

    /// A month name did not match any calendar month.
    #[error("Unknown month: {name}")]
    UnknownMonth {
        /// The name that failed to parse.
        name: String,
    },

    /// A month number was outside the 1-12 calendar range.
    #[error("Month number out of range: {number}")]
    MonthOutOfRange {
        /// The offending number.
        number: u32,
    },
}

impl CoreError {
    /// Create an unknown asset class error.
    #[must_use]
    pub fn unknown_asset_class(name: impl Into<String>) -> Self {
        Self::UnknownAssetClass { name: name.into() }
    }

    /// Create an unknown month error.
    #[must_use]
    pub fn unknown_month(name: impl Into<String>) -> Self {
        Self::UnknownMonth { name: name.into() }
    }
}
