//! The ledger engine: allocation, registration, balance advancement, and
//! rebalancing.

use std::collections::BTreeMap;
use std::fmt;

use folio_core::types::{AssetClass, Month};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cache::BalanceCache;
use crate::error::{LedgerError, LedgerResult};
use crate::portfolio::Portfolio;
use crate::rates::RateLedger;
use crate::types::{BalanceStatement, ContributionSchedule, DesiredWeights, Holding};

/// Sentinel rendered when rebalancing lacks sufficient rate history.
pub const CANNOT_REBALANCE: &str = "CANNOT_REBALANCE";

/// Months of rate history required before the first rebalance event.
const REBALANCE_HISTORY_MONTHS: usize = 6;

/// Outcome of a [`LedgerEngine::rebalance`] call.
///
/// Insufficient history is a normal data outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RebalanceOutcome {
    /// Redistribution ran; the statement reflects the post-redistribution
    /// holdings.
    Rebalanced(BalanceStatement),

    /// Fewer than six months of rates are registered; no holding was
    /// mutated.
    CannotRebalance,
}

impl fmt::Display for RebalanceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RebalanceOutcome::Rebalanced(statement) => fmt::Display::fmt(statement, f),
            RebalanceOutcome::CannotRebalance => f.write_str(CANNOT_REBALANCE),
        }
    }
}

/// Rebalance timing, derived fresh on every call from the count of
/// registered months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RebalanceWindow {
    /// Fewer than six months recorded.
    TooEarly,
    /// Six to eleven months recorded; the event anchors at June.
    MidYear,
    /// Twelve months recorded; the event anchors at December.
    YearEnd,
}

impl RebalanceWindow {
    fn from_history(months_recorded: usize) -> Self {
        if months_recorded < REBALANCE_HISTORY_MONTHS {
            RebalanceWindow::TooEarly
        } else if months_recorded < Month::ALL.len() {
            RebalanceWindow::MidYear
        } else {
            RebalanceWindow::YearEnd
        }
    }

    fn anchor(self) -> Option<Month> {
        match self {
            RebalanceWindow::TooEarly => None,
            RebalanceWindow::MidYear => Some(Month::June),
            RebalanceWindow::YearEnd => Some(Month::December),
        }
    }
}

/// The stateful portfolio ledger for one simulated year.
///
/// Owns the holding store, desired weights, contribution schedule, rate
/// ledger, and balance cache, and is the only component with business
/// logic. Construct one engine per simulation; every operation both reads
/// and mutates engine state, so embedders must serialize access behind a
/// single mutual-exclusion boundary.
#[derive(Debug, Default)]
pub struct LedgerEngine {
    portfolio: Portfolio,
    weights: DesiredWeights,
    schedule: ContributionSchedule,
    rates: RateLedger,
    cache: BalanceCache,
}

impl LedgerEngine {
    /// Creates an empty engine with no allocation, schedule, or rates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current holdings.
    #[must_use]
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Returns the desired weights fixed at allocation time.
    #[must_use]
    pub fn desired_weights(&self) -> &DesiredWeights {
        &self.weights
    }

    /// Performs the one-time initial allocation and fixes the desired
    /// weights.
    ///
    /// # Errors
    ///
    /// `AlreadyAllocated` if an allocation already ran;
    /// `IncompleteAllocation` if `amounts` does not cover exactly the full
    /// registry.
    pub fn allocate(&mut self, amounts: BTreeMap<AssetClass, Decimal>) -> LedgerResult<()> {
        if self.portfolio.is_allocated() {
            return Err(LedgerError::AlreadyAllocated);
        }
        if amounts.len() != AssetClass::count() {
            return Err(LedgerError::IncompleteAllocation {
                expected: AssetClass::count(),
                got: amounts.len(),
            });
        }

        let mut holdings = Vec::with_capacity(AssetClass::count());
        for class in AssetClass::ALL {
            let amount =
                amounts
                    .get(&class)
                    .copied()
                    .ok_or(LedgerError::IncompleteAllocation {
                        expected: AssetClass::count(),
                        got: amounts.len(),
                    })?;
            holdings.push(Holding::new(class, amount));
        }

        self.portfolio.install(holdings);
        self.weights = DesiredWeights::from_holdings(self.portfolio.holdings());
        tracing::debug!(
            holdings = ?self.portfolio.holdings(),
            weights = ?self.weights,
            "portfolio allocated"
        );
        Ok(())
    }

    /// Registers the one-time monthly contribution schedule.
    ///
    /// Contributions apply from February onward, before each month's market
    /// movement.
    ///
    /// # Errors
    ///
    /// `ContributionAlreadyRegistered` if a schedule exists;
    /// `IncompleteContribution` if `amounts` does not cover the registry.
    pub fn init_sip(&mut self, amounts: BTreeMap<AssetClass, Decimal>) -> LedgerResult<()> {
        if self.schedule.is_registered() {
            return Err(LedgerError::ContributionAlreadyRegistered);
        }
        if amounts.len() != AssetClass::count() {
            return Err(LedgerError::IncompleteContribution {
                expected: AssetClass::count(),
                got: amounts.len(),
            });
        }

        self.schedule.register(amounts);
        tracing::debug!(schedule = ?self.schedule, "monthly SIP registered");
        Ok(())
    }

    /// Registers the market rate of change for one month, write-once.
    ///
    /// # Errors
    ///
    /// `DuplicateMonthRate` if the month already has rates;
    /// `InvalidRateInput` if `rates` does not cover the registry.
    pub fn change(
        &mut self,
        rates: BTreeMap<AssetClass, Decimal>,
        month: Month,
    ) -> LedgerResult<()> {
        if self.rates.contains(month) {
            return Err(LedgerError::DuplicateMonthRate { month });
        }
        if rates.len() != AssetClass::count() {
            return Err(LedgerError::InvalidRateInput {
                expected: AssetClass::count(),
                got: rates.len(),
            });
        }

        self.rates.register(month, rates);
        Ok(())
    }

    /// Computes the portfolio balance at the end of `month`, memoizing every
    /// newly computed month along the way.
    ///
    /// Advancement runs ascending from the earliest uncached month through
    /// `month`; already-cached months are skipped, so repeated queries are
    /// pure cache hits. The returned statement reports the current holding
    /// amounts in registry order.
    ///
    /// # Errors
    ///
    /// `NotAllocated` before any allocation; `MissingRateForMonth` when
    /// advancement reaches a month with no registered rate.
    pub fn balance(&mut self, month: Month) -> LedgerResult<BalanceStatement> {
        if !self.portfolio.is_allocated() {
            return Err(LedgerError::NotAllocated);
        }

        self.advance_through(month)?;

        let statement = BalanceStatement::from_holdings(self.portfolio.holdings());
        tracing::debug!(%month, %statement, "balance computed");
        Ok(statement)
    }

    /// Rebalances total portfolio value back toward the desired weights.
    ///
    /// The event timing derives from the count of registered months: fewer
    /// than six yields [`RebalanceOutcome::CannotRebalance`] without mutating
    /// anything; six to eleven anchors at June (evicting the cached second
    /// half of the year and recomputing June from the May baseline); twelve
    /// anchors at December. After the anchor balance, each holding is
    /// overwritten with `floor(total x desired weight / 100)`.
    ///
    /// # Errors
    ///
    /// `NotAllocated` before any allocation; `MissingRateForMonth`
    /// propagated from the internal balance advancement.
    pub fn rebalance(&mut self) -> LedgerResult<RebalanceOutcome> {
        let window = RebalanceWindow::from_history(self.rates.months_recorded());
        let Some(anchor) = window.anchor() else {
            return Ok(RebalanceOutcome::CannotRebalance);
        };
        if !self.portfolio.is_allocated() {
            return Err(LedgerError::NotAllocated);
        }

        if window == RebalanceWindow::MidYear {
            // Rewind to the last stable month before the evicted window.
            // Advancing through May first guarantees the baseline snapshot
            // exists even when no balance query preceded the rebalance.
            self.advance_through(Month::May)?;
            self.cache.evict_from(Month::June);

            let baseline = self
                .cache
                .get(Month::May)
                .map(<[Holding]>::to_vec)
                .ok_or(LedgerError::MissingSnapshot { month: Month::May })?;
            self.portfolio.restore(&baseline);
        }

        self.advance_through(anchor)?;

        let total = self.portfolio.total_investment();
        for holding in self.portfolio.holdings_mut() {
            let weight = self.weights.weight_for(holding.asset_class);
            holding.amount_invested = (total * weight / Decimal::ONE_HUNDRED).floor();
        }

        let statement = BalanceStatement::from_holdings(self.portfolio.holdings());
        tracing::debug!(%anchor, %statement, "portfolio rebalanced");
        Ok(RebalanceOutcome::Rebalanced(statement))
    }

    /// Advances the simulation month by month through `month`, skipping
    /// cached months.
    fn advance_through(&mut self, month: Month) -> LedgerResult<()> {
        for m in month.up_to() {
            if self.cache.contains(m) {
                continue;
            }
            self.apply_month(m)?;
        }
        Ok(())
    }

    /// Applies one month: contribution (except January) then market
    /// movement, then archives the snapshot.
    fn apply_month(&mut self, month: Month) -> LedgerResult<()> {
        let rates = self
            .rates
            .for_month(month)
            .cloned()
            .ok_or(LedgerError::MissingRateForMonth { month })?;

        for holding in self.portfolio.holdings_mut() {
            if !month.is_first() {
                holding.amount_invested += self.schedule.amount_for(holding.asset_class);
            }
            let rate = rates
                .get(&holding.asset_class)
                .copied()
                .unwrap_or(Decimal::ZERO);
            let delta = holding.amount_invested * rate / Decimal::ONE_HUNDRED;
            holding.amount_invested += delta;
        }

        self.cache.insert(month, self.portfolio.snapshot());
        Ok(())
    }
}
