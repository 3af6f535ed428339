use derive_more::Display;

use crate::time::Month;

/// A year of the proleptic Gregorian calendar. Year 0 exists and is 1 BC.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Display)]
#[display("{_0}")]
pub struct Year(i64);

impl Year {
    #[must_use]
    pub const fn new(year: i64) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// A leap year is a calendar year that contains an additional day added to February, so
    /// it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        self.0.rem_euclid(4) == 0 && (self.0.rem_euclid(100) != 0 || self.0.rem_euclid(400) == 0)
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> u32 {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }
}
