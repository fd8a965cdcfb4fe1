//! The twelve-month simulation calendar.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A calendar month of the simulated year.
///
/// January is the first simulated month; the derived `Ord` follows calendar
/// order, so ranges and ordered maps keyed by `Month` iterate ascending.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Month {
    /// January (month 1).
    January,
    /// February (month 2).
    February,
    /// March (month 3).
    March,
    /// April (month 4).
    April,
    /// May (month 5).
    May,
    /// June (month 6).
    June,
    /// July (month 7).
    July,
    /// August (month 8).
    August,
    /// September (month 9).
    September,
    /// October (month 10).
    October,
    /// November (month 11).
    November,
    /// December (month 12).
    December,
}

impl Month {
    /// The full calendar, January through December.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Returns the calendar number of this month (January=1 .. December=12).
    #[must_use]
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// Looks up a month by its calendar number (1-12).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MonthOutOfRange` if `number` is not in 1..=12.
    pub fn from_number(number: u32) -> Result<Self, CoreError> {
        Self::ALL
            .get(number.wrapping_sub(1) as usize)
            .copied()
            .ok_or(CoreError::MonthOutOfRange { number })
    }

    /// Iterates the months from January through `self`, ascending and
    /// inclusive. This is the advancement order of the balance computation.
    pub fn up_to(self) -> impl Iterator<Item = Month> {
        Self::ALL.into_iter().take(self.number() as usize)
    }

    /// Returns true for January, the only month with no contribution.
    #[must_use]
    pub fn is_first(&self) -> bool {
        matches!(self, Month::January)
    }

    /// Returns the uppercase wire name used in commands.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "JANUARY",
            Month::February => "FEBRUARY",
            Month::March => "MARCH",
            Month::April => "APRIL",
            Month::May => "MAY",
            Month::June => "JUNE",
            Month::July => "JULY",
            Month::August => "AUGUST",
            Month::September => "SEPTEMBER",
            Month::October => "OCTOBER",
            Month::November => "NOVEMBER",
            Month::December => "DECEMBER",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|month| month.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::unknown_month(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(Month::January.number(), 1);
        assert_eq!(Month::June.number(), 6);
        assert_eq!(Month::December.number(), 12);
    }

    #[test]
    fn test_from_number_round_trip() {
        for month in Month::ALL {
            assert_eq!(Month::from_number(month.number()).unwrap(), month);
        }
        assert!(Month::from_number(0).is_err());
        assert!(Month::from_number(13).is_err());
    }

    #[test]
    fn test_up_to() {
        assert_eq!(
            Month::January.up_to().collect::<Vec<_>>(),
            vec![Month::January]
        );
        assert_eq!(
            Month::March.up_to().collect::<Vec<_>>(),
            vec![Month::January, Month::February, Month::March]
        );
        assert_eq!(Month::December.up_to().count(), 12);
    }

    #[test]
    fn test_calendar_order() {
        assert!(Month::January < Month::February);
        assert!(Month::June < Month::December);
    }

    #[test]
    fn test_first_month() {
        assert!(Month::January.is_first());
        assert!(!Month::February.is_first());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("JUNE".parse::<Month>().unwrap(), Month::June);
        assert_eq!("december".parse::<Month>().unwrap(), Month::December);
        assert!("SMARCH".parse::<Month>().is_err());
    }
}
