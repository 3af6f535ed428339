use core::fmt;
use std::ops::{Add, Sub};

use log::debug;
use serde::{Deserialize, Serialize, Serializer};

use crate::time::{HostDate, WeekDay};
use crate::{DateComponents, DateDuration, DateObject};

/// A point in time that never changes, read in the local time zone of the host.
///
/// Months are counted from 1. Every operation that derives a new date returns
/// a new value. A date is invalid when it was built from an unparseable
/// string or from components outside of the representable range, in that
/// case every getter returns `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct ImmutableDate {
    inner: HostDate,
}

impl ImmutableDate {
    pub const INVALID: Self = Self {
        inner: HostDate::invalid(),
    };

    #[must_use]
    pub fn now() -> Self {
        Self {
            inner: HostDate::now(),
        }
    }

    /// Creates a date from the number of milliseconds since
    /// 1970-01-01T00:00:00.000 UTC.
    #[must_use]
    pub fn from_timestamp(milliseconds: i64) -> Self {
        Self {
            inner: HostDate::from_timestamp(milliseconds),
        }
    }

    /// Parses a date string.
    ///
    /// Dashed dates like `2023-08-04` are read as UTC, date-times without a
    /// zone like `2023-08-04T01:02` and slashed dates like `2023/08/04` as
    /// local time. A string that can not be parsed results in an invalid date.
    #[must_use]
    pub fn from_string(text: &str) -> Self {
        let inner = HostDate::parse(text);
        if !inner.is_valid() {
            debug!("{:?} is not a valid date", text);
        }

        Self { inner }
    }

    /// Copies the instant of a host date, later changes to the host date do
    /// not affect the result.
    #[must_use]
    pub fn from_date(date: impl Into<HostDate>) -> Self {
        Self { inner: date.into() }
    }

    /// Creates a date from local components, missing ones are taken from
    /// 1970-01-01 00:00:00.000 local time.
    #[must_use]
    pub fn from_object(object: DateObject) -> Self {
        Self::from_components(
            object.year.unwrap_or(1970),
            object.month.unwrap_or(1),
            object.date.unwrap_or(1),
            object.hours.unwrap_or(0),
            object.minutes.unwrap_or(0),
            object.seconds.unwrap_or(0),
            object.milliseconds.unwrap_or(0),
        )
    }

    /// Creates a date from local components.
    ///
    /// The month is counted from 1 and years in `0..=99` are read as
    /// `1900..=1999`. Components outside of their usual range carry over,
    /// so month 13 is the January of the next year and the 0th day of a
    /// month is the last day of the month before.
    #[must_use]
    pub fn from_components(
        year: i64,
        month: i64,
        date: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
        milliseconds: i64,
    ) -> Self {
        let inner = HostDate::from_local_components(
            year,
            month.saturating_sub(1),
            date,
            hours,
            minutes,
            seconds,
            milliseconds,
        );

        if !inner.is_valid() {
            debug!(
                "components {:?} are out of range",
                [year, month, date, hours, minutes, seconds, milliseconds]
            );
        }

        Self { inner }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }

    #[must_use]
    pub fn year(&self) -> Option<i64> {
        self.inner.full_year()
    }

    /// The month, counted from 1.
    #[must_use]
    pub fn month(&self) -> Option<u32> {
        self.inner.month_index().map(|index| index + 1)
    }

    /// The day of the month.
    #[must_use]
    pub fn date(&self) -> Option<u32> {
        self.inner.date()
    }

    /// The day of the week, 0 is sunday and 6 is saturday.
    #[must_use]
    pub fn day(&self) -> Option<u32> {
        self.inner.day()
    }

    #[must_use]
    pub fn weekday(&self) -> Option<WeekDay> {
        self.inner.week_day()
    }

    #[must_use]
    pub fn hours(&self) -> Option<u32> {
        self.inner.hours()
    }

    #[must_use]
    pub fn minutes(&self) -> Option<u32> {
        self.inner.minutes()
    }

    #[must_use]
    pub fn seconds(&self) -> Option<u32> {
        self.inner.seconds()
    }

    #[must_use]
    pub fn milliseconds(&self) -> Option<u32> {
        self.inner.milliseconds()
    }

    /// UTC minus local time in minutes, so it is positive west of Greenwich.
    #[must_use]
    pub fn timezone_offset(&self) -> Option<i32> {
        self.inner.timezone_offset()
    }

    /// Replaces the components that are present in `partial`.
    ///
    /// The result is rebuilt from its components, so it may roll over:
    /// setting the date 31 in a month with 30 days gives the 1st of the next
    /// month. An invalid date stays invalid unless all seven components are
    /// replaced.
    #[must_use]
    pub fn set(&self, partial: DateObject) -> Self {
        let current = self.to_object().map(DateObject::from).unwrap_or_default();

        match partial.or(current).complete() {
            Some([year, month, date, hours, minutes, seconds, milliseconds]) => {
                Self::from_components(year, month, date, hours, minutes, seconds, milliseconds)
            }
            None => Self::INVALID,
        }
    }

    /// Replaces the calendar date, `month` and `date` default to 1.
    #[must_use]
    pub fn set_date(
        &self,
        year: i64,
        month: impl Into<Option<i64>>,
        date: impl Into<Option<i64>>,
    ) -> Self {
        self.set(
            DateObject::new()
                .with_year(year)
                .with_month(month.into().unwrap_or(1))
                .with_date(date.into().unwrap_or(1)),
        )
    }

    /// Replaces the time of day, the omitted components default to 0.
    #[must_use]
    pub fn set_time(
        &self,
        hours: i64,
        minutes: impl Into<Option<i64>>,
        seconds: impl Into<Option<i64>>,
        milliseconds: impl Into<Option<i64>>,
    ) -> Self {
        self.set(
            DateObject::new()
                .with_hours(hours)
                .with_minutes(minutes.into().unwrap_or(0))
                .with_seconds(seconds.into().unwrap_or(0))
                .with_milliseconds(milliseconds.into().unwrap_or(0)),
        )
    }

    /// Adds each field of the duration to its component and normalizes the
    /// result once.
    ///
    /// ```
    /// use immutable_date::{DateDuration, ImmutableDate};
    ///
    /// let date = ImmutableDate::from_components(2023, 1, 31, 12, 0, 0, 0);
    /// let date = date.add(DateDuration::months(1));
    ///
    /// // there is no 31st of February
    /// assert_eq!((date.month(), date.date()), (Some(3), Some(3)));
    /// ```
    #[must_use]
    pub fn add(&self, duration: DateDuration) -> Self {
        let Some(components) = self.to_object() else {
            return Self::INVALID;
        };

        let mut values = components.values();
        for (value, delta) in values.iter_mut().zip(duration.values()) {
            *value = value.saturating_add(delta);
        }

        let [year, month, date, hours, minutes, seconds, milliseconds] = values;
        Self::from_components(year, month, date, hours, minutes, seconds, milliseconds)
    }

    #[must_use]
    pub fn subtract(&self, duration: DateDuration) -> Self {
        self.add(-duration)
    }

    #[deprecated(note = "use `subtract` instead")]
    #[must_use]
    pub fn substract(&self, duration: DateDuration) -> Self {
        self.subtract(duration)
    }

    /// The number of milliseconds since 1970-01-01T00:00:00.000 UTC.
    #[must_use]
    pub const fn to_timestamp(&self) -> Option<i64> {
        self.inner.time()
    }

    /// The instant in UTC like `2023-08-04T01:02:03.004Z`.
    #[must_use]
    pub fn to_iso_string(&self) -> Option<String> {
        self.inner.to_iso_string()
    }

    /// The same as [`ImmutableDate::to_iso_string`].
    #[must_use]
    pub fn to_json(&self) -> Option<String> {
        self.to_iso_string()
    }

    /// A host date with the same instant, which can be changed independently.
    #[must_use]
    pub const fn to_date(&self) -> HostDate {
        self.inner
    }

    #[must_use]
    pub fn to_object(&self) -> Option<DateComponents> {
        Some(DateComponents {
            year: self.year()?,
            month: self.month()?,
            date: self.date()?,
            hours: self.hours()?,
            minutes: self.minutes()?,
            seconds: self.seconds()?,
            milliseconds: self.milliseconds()?,
        })
    }

    /// The seven components from the year to the milliseconds, nothing for
    /// an invalid date.
    pub fn iter(&self) -> impl Iterator<Item = i64> {
        self.to_object().into_iter().flatten()
    }

    /// The seven named components, see [`DateComponents::FIELDS`].
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, i64)> {
        self.to_object()
            .into_iter()
            .flat_map(|components| DateComponents::FIELDS.into_iter().zip(components))
    }
}

impl fmt::Display for ImmutableDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl IntoIterator for ImmutableDate {
    type Item = i64;
    type IntoIter = std::iter::Flatten<std::option::IntoIter<DateComponents>>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_object().into_iter().flatten()
    }
}

impl Add<DateDuration> for ImmutableDate {
    type Output = Self;

    fn add(self, rhs: DateDuration) -> Self::Output {
        ImmutableDate::add(&self, rhs)
    }
}

impl Sub<DateDuration> for ImmutableDate {
    type Output = Self;

    fn sub(self, rhs: DateDuration) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Serialize for ImmutableDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}
