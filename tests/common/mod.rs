use chrono::{Local, TimeZone};

use immutable_date::ImmutableDate;

pub const TIMESTAMP: i64 = 1_691_110_923_004;
pub const ISO_STRING: &str = "2023-08-04T01:02:03.004Z";

/// The timestamp of a local wall clock time, as chrono sees it.
#[must_use]
#[allow(dead_code)]
pub fn local_timestamp(
    year: i32,
    month: u32,
    date: u32,
    hours: u32,
    minutes: u32,
    seconds: u32,
    milliseconds: i64,
) -> i64 {
    Local
        .with_ymd_and_hms(year, month, date, hours, minutes, seconds)
        .earliest()
        .expect("local time should exist")
        .timestamp_millis()
        + milliseconds
}

/// The timestamp `shifted` should have after moving the local components of
/// `initial` like the UTC components of `ISO_STRING` moved to `expected`.
///
/// Both only differ by the change of the host offset between the two
/// instants, which is zero in UTC.
#[must_use]
#[allow(dead_code)]
pub fn expected_timestamp(initial: &ImmutableDate, shifted: &ImmutableDate, expected: &str) -> i64 {
    let expected = ImmutableDate::from_string(expected)
        .to_timestamp()
        .expect("expected should be a valid date");
    let offset_change = shifted.timezone_offset().unwrap() - initial.timezone_offset().unwrap();

    expected + i64::from(offset_change) * 60_000
}
