use core::fmt;
use std::time::SystemTime;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::time::calendar::{self, Fields, MAX_TIME_VALUE, MS_PER_DAY, MS_PER_MINUTE};
use crate::time::{local, parse, WeekDay};

/// A mutable point in time with the semantics of a platform date value.
///
/// The value is either a time value, the number of milliseconds since
/// 1970-01-01T00:00:00.000 UTC, or invalid. Invalid dates are the result of
/// unparseable strings and of arithmetic that leaves the representable range
/// of ±100 000 000 days around the epoch; every getter of an invalid date
/// returns `None`.
///
/// The getters project the instant into the time zone of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostDate {
    time_value: Option<i64>,
}

impl HostDate {
    #[must_use]
    pub fn now() -> Self {
        Self::from_timestamp(Utc::now().timestamp_millis())
    }

    /// Creates a date from the number of milliseconds since the epoch.
    #[must_use]
    pub fn from_timestamp(milliseconds: i64) -> Self {
        Self {
            time_value: calendar::time_clip(milliseconds.into()),
        }
    }

    #[must_use]
    pub const fn invalid() -> Self {
        Self { time_value: None }
    }

    /// Creates a date from its local components. The month is counted from 0.
    ///
    /// Years in `0..=99` are read as `1900..=1999`. Components outside of
    /// their usual range carry into the next larger one, so the 32nd of
    /// January is the 1st of February and month -1 is the December of the
    /// previous year.
    #[must_use]
    pub fn from_local_components(
        year: i64,
        month_index: i64,
        date: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
        milliseconds: i64,
    ) -> Self {
        let day = calendar::make_day(
            calendar::full_year(year).into(),
            month_index.into(),
            date.into(),
        );
        let time = calendar::make_time(
            hours.into(),
            minutes.into(),
            seconds.into(),
            milliseconds.into(),
        );

        Self::from_local_time_value(calendar::make_date(day, time))
    }

    fn from_local_time_value(local: i128) -> Self {
        // leaves room for the largest offset, the result is clipped anyway
        if local.unsigned_abs() > (MAX_TIME_VALUE + MS_PER_DAY) as u128 {
            return Self::invalid();
        }

        Self {
            time_value: calendar::time_clip(local::local_to_utc(local as i64).into()),
        }
    }

    /// Parses a date string, see [`parse`](crate::time::parse) for the
    /// accepted formats. Unknown formats result in an invalid date.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            time_value: parse::parse(text).and_then(calendar::time_clip),
        }
    }

    /// The number of milliseconds since the epoch.
    #[must_use]
    pub const fn time(&self) -> Option<i64> {
        self.time_value
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.time_value.is_some()
    }

    /// Replaces the instant, returning the new time value.
    pub fn set_time(&mut self, milliseconds: i64) -> Option<i64> {
        *self = Self::from_timestamp(milliseconds);
        self.time_value
    }

    /// Sets the local day of the month, which may carry into other months.
    pub fn set_date(&mut self, date: i64) -> Option<i64> {
        self.replace_local(|components| components.date = date)
    }

    /// Sets the local milliseconds, which may carry into the seconds.
    pub fn set_milliseconds(&mut self, milliseconds: i64) -> Option<i64> {
        self.replace_local(|components| components.milliseconds = milliseconds)
    }

    fn replace_local(&mut self, update: impl FnOnce(&mut LocalComponents)) -> Option<i64> {
        let fields = self.local_fields()?;
        let mut components = LocalComponents {
            year: fields.year.as_i64(),
            month_index: fields.month.index().into(),
            date: fields.date.into(),
            hours: fields.hours.into(),
            minutes: fields.minutes.into(),
            seconds: fields.seconds.into(),
            milliseconds: fields.milliseconds.into(),
        };
        update(&mut components);

        let day = calendar::make_day(
            components.year.into(),
            components.month_index.into(),
            components.date.into(),
        );
        let time = calendar::make_time(
            components.hours.into(),
            components.minutes.into(),
            components.seconds.into(),
            components.milliseconds.into(),
        );

        *self = Self::from_local_time_value(calendar::make_date(day, time));
        self.time_value
    }

    fn local_fields(&self) -> Option<Fields> {
        self.time_value
            .map(|time| Fields::from_time_value(time + local::offset_millis_at(time)))
    }

    fn utc_fields(&self) -> Option<Fields> {
        self.time_value.map(Fields::from_time_value)
    }

    #[must_use]
    pub fn full_year(&self) -> Option<i64> {
        self.local_fields().map(|f| f.year.as_i64())
    }

    /// The month, counted from 0.
    #[must_use]
    pub fn month_index(&self) -> Option<u32> {
        self.local_fields().map(|f| f.month.index())
    }

    /// The day of the month.
    #[must_use]
    pub fn date(&self) -> Option<u32> {
        self.local_fields().map(|f| f.date)
    }

    /// The day of the week, 0 is sunday.
    #[must_use]
    pub fn day(&self) -> Option<u32> {
        self.week_day().map(|day| day.as_number())
    }

    #[must_use]
    pub fn week_day(&self) -> Option<WeekDay> {
        self.local_fields().map(|f| f.week_day)
    }

    #[must_use]
    pub fn hours(&self) -> Option<u32> {
        self.local_fields().map(|f| f.hours)
    }

    #[must_use]
    pub fn minutes(&self) -> Option<u32> {
        self.local_fields().map(|f| f.minutes)
    }

    #[must_use]
    pub fn seconds(&self) -> Option<u32> {
        self.local_fields().map(|f| f.seconds)
    }

    #[must_use]
    pub fn milliseconds(&self) -> Option<u32> {
        self.local_fields().map(|f| f.milliseconds)
    }

    /// The difference between UTC and local time in minutes, positive when
    /// the host is behind UTC.
    #[must_use]
    pub fn timezone_offset(&self) -> Option<i32> {
        self.time_value
            .map(|time| (-local::offset_millis_at(time) / MS_PER_MINUTE) as i32)
    }

    /// The instant in UTC as `YYYY-MM-DDTHH:mm:ss.sssZ`, years outside of
    /// `0..=9999` are written with a sign and six digits.
    #[must_use]
    pub fn to_iso_string(&self) -> Option<String> {
        let fields = self.utc_fields()?;
        let year = fields.year.as_i64();
        let year = if (0..=9999).contains(&year) {
            format!("{:04}", year)
        } else if year < 0 {
            format!("-{:06}", -year)
        } else {
            format!("+{:06}", year)
        };

        Some(format!(
            "{}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            year,
            fields.month.as_number(),
            fields.date,
            fields.hours,
            fields.minutes,
            fields.seconds,
            fields.milliseconds
        ))
    }

    /// The instant in the host time zone, if chrono can represent it.
    #[must_use]
    pub fn to_chrono(&self) -> Option<DateTime<Local>> {
        self.time_value
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.with_timezone(&Local))
    }
}

#[derive(Debug, Clone, Copy)]
struct LocalComponents {
    year: i64,
    month_index: i64,
    date: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    milliseconds: i64,
}

impl fmt::Display for HostDate {
    /// Renders the local time like `Fri Aug 04 2023 01:02:03 GMT+0200`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(fields), Some(time)) = (self.local_fields(), self.time_value) else {
            return f.write_str("Invalid Date");
        };

        let year = fields.year.as_i64();
        let sign = if year < 0 { "-" } else { "" };

        let offset = local::offset_millis_at(time) / MS_PER_MINUTE;
        let offset_sign = if offset < 0 { '-' } else { '+' };

        write!(
            f,
            "{} {} {:02} {}{:04} {:02}:{:02}:{:02} GMT{}{:02}{:02}",
            fields.week_day,
            fields.month.short_name(),
            fields.date,
            sign,
            year.abs(),
            fields.hours,
            fields.minutes,
            fields.seconds,
            offset_sign,
            offset.abs() / 60,
            offset.abs() % 60
        )
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for HostDate {
    fn from(value: DateTime<Tz>) -> Self {
        Self::from_timestamp(value.timestamp_millis())
    }
}

impl From<SystemTime> for HostDate {
    fn from(value: SystemTime) -> Self {
        Self::from(DateTime::<Utc>::from(value))
    }
}
