//! State types held by the ledger engine.

mod holding;
mod schedule;
mod statement;
mod weights;

pub use holding::Holding;
pub use schedule::ContributionSchedule;
pub use statement::BalanceStatement;
pub use weights::DesiredWeights;
