//! Day and time arithmetic over time values, the number of milliseconds
//! elapsed since 1970-01-01T00:00:00.000 UTC.
//!
//! Everything here is time zone agnostic. Applying the host offset is the
//! job of [`HostDate`](crate::time::HostDate).

use crate::time::{Month, WeekDay, Year};

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// The largest distance from the epoch a time value may have (100 000 000 days).
pub const MAX_TIME_VALUE: i64 = 100_000_000 * MS_PER_DAY;

/// The days since the epoch of the given day.
///
/// `month` must be in `1..=12`, but `day` may be anything, it is simply added.
///
/// See <https://howardhinnant.github.io/date_algorithms.html#days_from_civil>
#[must_use]
pub fn days_from_civil(year: i128, month: u32, day: i128) -> i128 {
    let month = i128::from(month);
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let day_of_year = (153 * (month + if month > 2 { -3 } else { 9 }) + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * 146_097 + day_of_era - 719_468
}

/// The inverse of [`days_from_civil`].
#[must_use]
pub fn civil_from_days(days: i64) -> (Year, Month, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let day_of_era = z - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };

    let mut year = year_of_era + era * 400;
    if month <= 2 {
        year += 1;
    }

    (Year::new(year), Month::from_index(month as usize - 1), day)
}

/// Years `0..=99` are read as `1900..=1999`, like the host date does for
/// component lists.
#[must_use]
pub const fn full_year(year: i64) -> i64 {
    if 0 <= year && year <= 99 {
        1900 + year
    } else {
        year
    }
}

/// The day number of the `date`th day of the month with the 0-based index
/// `month_index` in `year`. Months outside of `0..12` carry into the year.
#[must_use]
pub fn make_day(year: i128, month_index: i128, date: i128) -> i128 {
    let year = year + month_index.div_euclid(12);
    let month = month_index.rem_euclid(12) as u32 + 1;

    days_from_civil(year, month, 1) + date - 1
}

#[must_use]
pub fn make_time(hours: i128, minutes: i128, seconds: i128, milliseconds: i128) -> i128 {
    hours * i128::from(MS_PER_HOUR)
        + minutes * i128::from(MS_PER_MINUTE)
        + seconds * i128::from(MS_PER_SECOND)
        + milliseconds
}

#[must_use]
pub fn make_date(day: i128, time: i128) -> i128 {
    day * i128::from(MS_PER_DAY) + time
}

/// Returns `None` if the time value is not representable.
#[must_use]
pub fn time_clip(time: i128) -> Option<i64> {
    if time.unsigned_abs() > MAX_TIME_VALUE as u128 {
        return None;
    }

    i64::try_from(time).ok()
}

/// The calendar fields of a time value, without any offset applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields {
    pub year: Year,
    pub month: Month,
    pub date: u32,
    pub week_day: WeekDay,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub milliseconds: u32,
}

impl Fields {
    #[must_use]
    pub fn from_time_value(time: i64) -> Self {
        let days = time.div_euclid(MS_PER_DAY);
        let in_day = time.rem_euclid(MS_PER_DAY);
        let (year, month, date) = civil_from_days(days);

        Self {
            year,
            month,
            date,
            week_day: WeekDay::from_days_since_epoch(days),
            hours: (in_day / MS_PER_HOUR) as u32,
            minutes: (in_day % MS_PER_HOUR / MS_PER_MINUTE) as u32,
            seconds: (in_day % MS_PER_MINUTE / MS_PER_SECOND) as u32,
            milliseconds: (in_day % MS_PER_SECOND) as u32,
        }
    }
}
