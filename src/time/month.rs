use core::fmt;

use thiserror::Error;

/// A month of the proleptic Gregorian calendar, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    pub const fn months() -> [Self; 12] {
        [
            Self::January,
            Self::February,
            Self::March,
            Self::April,
            Self::May,
            Self::June,
            Self::July,
            Self::August,
            Self::September,
            Self::October,
            Self::November,
            Self::December,
        ]
    }

    /// Returns the month for a 0-based index, the way the host date counts them.
    ///
    /// # Panics
    ///
    /// If the index is not in `0..12`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::months()[index]
    }

    pub const fn as_number(&self) -> u32 {
        *self as u32
    }

    /// The 0-based index of this month.
    pub const fn index(&self) -> u32 {
        self.as_number() - 1
    }

    /// The abbreviated english name, as used by the host rendering.
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::January => "Jan",
            Self::February => "Feb",
            Self::March => "Mar",
            Self::April => "Apr",
            Self::May => "May",
            Self::June => "Jun",
            Self::July => "Jul",
            Self::August => "Aug",
            Self::September => "Sep",
            Self::October => "Oct",
            Self::November => "Nov",
            Self::December => "Dec",
        }
    }
}

impl From<Month> for i64 {
    fn from(month: Month) -> Self {
        month.as_number() as i64
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_number().fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Error)]
#[error("{0} is not a valid month number")]
pub struct InvalidNumberForMonth(pub i64);

impl TryFrom<i64> for Month {
    type Error = InvalidNumberForMonth;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::months()
            .into_iter()
            .find(|month| i64::from(*month) == value)
            .ok_or(InvalidNumberForMonth(value))
    }
}
