//! The date-string grammar of the host date.
//!
//! Dashed dates without a time (`2023`, `2023-08`, `2023-08-04`) are midnight
//! UTC, while slashed dates (`2023/`, `2023/08`, `2023/08/04`, `08/04/2023`)
//! are midnight in the host time zone. A time of day without a zone is local
//! time as well, `Z` or a numeric offset pins it.
//!
//! RFC 2822 strings and the `Display` rendering of
//! [`HostDate`](crate::time::HostDate) are understood too.

use chrono::DateTime;
use log::{debug, trace};

use crate::time::calendar::{make_date, make_day, make_time, MS_PER_MINUTE};
use crate::time::{local, Month, Year};
use crate::utils::StrExt;

/// What a parsed wall clock time is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reference {
    Utc,
    Local,
    /// Minutes east of UTC.
    Offset(i64),
}

impl Reference {
    fn resolve(self, wall_clock: i128) -> Option<i128> {
        match self {
            Self::Utc => Some(wall_clock),
            Self::Offset(minutes) => Some(wall_clock - i128::from(minutes * MS_PER_MINUTE)),
            Self::Local => {
                let wall_clock = i64::try_from(wall_clock).ok()?;
                Some(i128::from(local::local_to_utc(wall_clock)))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Time {
    hours: i64,
    minutes: i64,
    seconds: i64,
    milliseconds: i64,
}

impl Time {
    fn is_valid(&self) -> bool {
        if self.hours == 24 {
            return self.minutes == 0 && self.seconds == 0 && self.milliseconds == 0;
        }

        (0..24).contains(&self.hours)
            && (0..60).contains(&self.minutes)
            && (0..60).contains(&self.seconds)
    }

    fn as_millis(&self) -> i128 {
        make_time(
            self.hours.into(),
            self.minutes.into(),
            self.seconds.into(),
            self.milliseconds.into(),
        )
    }
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn is_done(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_any(&mut self, bytes: &[u8]) -> Option<u8> {
        let byte = self.peek().filter(|b| bytes.contains(b))?;
        self.pos += 1;
        Some(byte)
    }

    /// Exactly `width` ascii digits.
    fn digits(&mut self, width: usize) -> Option<i64> {
        let segment = self.bytes.get(self.pos..self.pos + width)?;
        if !segment.iter().all(u8::is_ascii_digit) {
            return None;
        }

        self.pos += width;
        Some(segment.iter().fold(0, |acc, b| acc * 10 + i64::from(b - b'0')))
    }

    /// A non-empty run of ascii digits, returned with its length.
    fn number(&mut self) -> Option<(i64, usize)> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }

        let digits = &self.bytes[start..self.pos];
        if digits.is_empty() || digits.len() > 18 {
            return None;
        }

        let value = digits.iter().fold(0, |acc, b| acc * 10 + i64::from(b - b'0'));
        Some((value, digits.len()))
    }

    /// `.sss`, with any number of digits of which only milliseconds are kept.
    fn fraction(&mut self) -> Option<i64> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }

        let digits = &self.bytes[start..self.pos];
        if digits.is_empty() {
            return None;
        }

        Some(
            (0..3)
                .map(|i| digits.get(i).map_or(0, |b| i64::from(b - b'0')))
                .fold(0, |acc, d| acc * 10 + d),
        )
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// `HH:mm[:ss[.sss]]`
    fn time(&mut self, hour_width: Option<usize>) -> Option<Time> {
        let hours = match hour_width {
            Some(width) => self.digits(width)?,
            None => {
                let (hours, len) = self.number()?;
                if len > 2 {
                    return None;
                }
                hours
            }
        };

        if !self.eat(b':') {
            return None;
        }

        let minutes = self.digits(2)?;
        let mut time = Time {
            hours,
            minutes,
            ..Time::default()
        };

        if self.eat(b':') {
            time.seconds = self.digits(2)?;

            if self.eat(b'.') {
                time.milliseconds = self.fraction()?;
            }
        }

        time.is_valid().then_some(time)
    }

    /// `Z`, `+HH:mm`, `-HHmm`, with an optional `GMT`/`UTC` prefix when
    /// `allow_names` is set.
    fn zone(&mut self, allow_names: bool) -> Option<Reference> {
        if allow_names {
            let rest = &self.bytes[self.pos..];
            if rest.len() >= 3
                && (rest[..3].eq_ignore_ascii_case(b"GMT") || rest[..3].eq_ignore_ascii_case(b"UTC"))
            {
                self.pos += 3;
                if self.is_done() {
                    return Some(Reference::Utc);
                }
            }
        }

        if self.eat_any(b"Zz").is_some() {
            return Some(Reference::Utc);
        }

        let sign = match self.eat_any(b"+-")? {
            b'-' => -1,
            _ => 1,
        };

        let hours = self.digits(2)?;
        self.eat(b':');
        let minutes = self.digits(2)?;

        if hours > 23 || minutes > 59 {
            return None;
        }

        Some(Reference::Offset(sign * (hours * 60 + minutes)))
    }
}

/// The date-time string format: `YYYY[-MM[-DD]][THH:mm[:ss[.sss]][Z|±HH:mm]]`.
fn parse_iso(text: &str) -> Option<i128> {
    let mut cursor = Cursor::new(text);

    let year = match cursor.eat_any(b"+-") {
        Some(sign) => {
            let year = cursor.digits(6)?;
            // -000000 is not a valid year
            if sign == b'-' && year == 0 {
                return None;
            }
            if sign == b'-' {
                -year
            } else {
                year
            }
        }
        None => cursor.digits(4)?,
    };
    let year = Year::new(year);

    let mut month = Month::January;
    let mut day = 1;
    if cursor.eat(b'-') {
        month = Month::try_from(cursor.digits(2)?).ok()?;

        if cursor.eat(b'-') {
            day = cursor.digits(2)?;
            if day < 1 || day > i64::from(year.number_of_days_in_month(month)) {
                return None;
            }
        }
    }

    let day_number = make_day(year.as_i64().into(), month.index().into(), day.into());

    if cursor.is_done() {
        return Some(make_date(day_number, 0));
    }

    cursor.eat_any(b"Tt ")?;
    let time = cursor.time(Some(2))?;
    let reference = if cursor.is_done() {
        Reference::Local
    } else {
        cursor.zone(false)?
    };

    if !cursor.is_done() {
        return None;
    }

    reference.resolve(make_date(day_number, time.as_millis()))
}

/// `YYYY/[MM[/DD]]` or `MM/DD/YYYY`, optionally followed by a time and zone.
fn parse_slashed(text: &str) -> Option<i128> {
    let (date, rest) = text
        .split_once(|c: char| c.is_ascii_whitespace())
        .unwrap_or((text, ""));

    if !date.contains('/') {
        return None;
    }

    let number = |part: &str, max_len: usize| -> Option<i64> {
        if part.is_empty() || part.len() > max_len || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        part.parse().ok()
    };

    let [first, second, third] = date.split_exact::<3>("/");
    let first = first?;
    let (year, month, day) = if first.len() >= 3 {
        let year = number(first, 6)?;
        let month = second.filter(|s| !s.is_empty()).map_or(Some(1), |s| number(s, 2))?;
        let day = third.filter(|s| !s.is_empty()).map_or(Some(1), |s| number(s, 2))?;
        (year, month, day)
    } else {
        let month = number(first, 2)?;
        let day = number(second?, 2)?;
        let third = third?;
        let year = number(third, 6)?;
        let year = match (third.len(), year) {
            (1..=2, 0..=49) => 2000 + year,
            (1..=2, _) => 1900 + year,
            _ => year,
        };
        (year, month, day)
    };

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let mut cursor = Cursor::new(rest.trim());
    let mut time = Time::default();
    let mut reference = Reference::Local;

    if !cursor.is_done() {
        time = cursor.time(None)?;
        cursor.skip_whitespace();

        if !cursor.is_done() {
            reference = cursor.zone(true)?;
        }

        if !cursor.is_done() {
            return None;
        }
    }

    let day_number = make_day(year.into(), i128::from(month - 1), day.into());
    reference.resolve(make_date(day_number, time.as_millis()))
}

fn parse_rfc2822(text: &str) -> Option<i128> {
    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|dt| i128::from(dt.timestamp_millis()))
}

/// The rendering of [`HostDate`](crate::time::HostDate), with or without a
/// trailing zone name in parentheses.
fn parse_rendered(text: &str) -> Option<i128> {
    let text = match text.find(" (") {
        Some(index) if text.ends_with(')') => &text[..index],
        _ => text,
    };

    DateTime::parse_from_str(text, "%a %b %d %Y %H:%M:%S GMT%z")
        .ok()
        .map(|dt| i128::from(dt.timestamp_millis()))
}

/// Parses a date string into a time value, the result has not been clipped.
///
/// Returns `None` if the string is in none of the supported formats.
pub fn parse(text: &str) -> Option<i128> {
    let text = text.trim();

    let parsers: [(&str, fn(&str) -> Option<i128>); 4] = [
        ("iso", parse_iso),
        ("slashed", parse_slashed),
        ("rfc2822", parse_rfc2822),
        ("rendered", parse_rendered),
    ];

    for (name, parser) in parsers {
        if let Some(time) = parser(text) {
            trace!("parsed \"{}\" as {} date", text, name);
            return Some(time);
        }
    }

    debug!("\"{}\" is not in any known date format", text);
    None
}
