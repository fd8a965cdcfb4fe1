//! # Folio CLI
//!
//! Line-oriented batch driver for the Folio portfolio ledger.
//!
//! Each input line is one command; five verbs map onto the ledger engine:
//!
//! - `ALLOCATE a1 a2 a3` - one-time initial allocation
//! - `SIP a1 a2 a3` - one-time monthly contribution schedule
//! - `CHANGE r1% r2% r3% MONTH` - monthly market rate registration
//! - `BALANCE MONTH` - memoized end-of-month balance query
//! - `REBALANCE` - calendar-anchored rebalance
//!
//! Positional amounts are zipped to the asset class registry order. Commands
//! that produce a result emit one output line; malformed or rejected lines
//! are logged and skipped, and the batch continues.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod commands;

pub use commands::{execute, run_lines, Command, CommandError};
