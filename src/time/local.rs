//! The host time zone, as chrono's [`Local`] sees it.

use chrono::{
    DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc,
};

use crate::time::calendar::MS_PER_SECOND;

fn naive_from_millis(time: i64) -> Option<NaiveDateTime> {
    DateTime::<Utc>::from_timestamp_millis(time).map(|dt| dt.naive_utc())
}

/// The offset of `tz` at the given instant.
///
/// Instants outside of what chrono can represent use the offset at the
/// nearest representable instant.
#[must_use]
pub fn offset_in<Tz: TimeZone>(tz: &Tz, time: i64) -> FixedOffset {
    let clamped = time.clamp(
        DateTime::<Utc>::MIN_UTC.timestamp_millis(),
        DateTime::<Utc>::MAX_UTC.timestamp_millis(),
    );

    naive_from_millis(clamped).map_or_else(
        || Utc.fix(),
        |utc| tz.offset_from_utc_datetime(&utc).fix(),
    )
}

fn offset_millis_in<Tz: TimeZone>(tz: &Tz, time: i64) -> i64 {
    i64::from(offset_in(tz, time).local_minus_utc()) * MS_PER_SECOND
}

/// Converts a wall clock time value in `tz` into the instant it denotes.
///
/// A wall clock time that occurs twice resolves to the earlier instant. One
/// that is skipped by a forward transition is read with the offset in force
/// before the transition.
#[must_use]
pub fn local_to_utc_in<Tz: TimeZone>(tz: &Tz, local: i64) -> i64 {
    let Some(naive) = naive_from_millis(local) else {
        return local - offset_millis_in(tz, local);
    };

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.timestamp_millis(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp_millis(),
        LocalResult::None => {
            let before = naive
                .checked_sub_signed(TimeDelta::days(1))
                .map_or(local, |before| before.and_utc().timestamp_millis());
            local - offset_millis_in(tz, before)
        }
    }
}

/// Milliseconds to add to an instant to get the local wall clock.
#[must_use]
pub fn offset_millis_at(time: i64) -> i64 {
    offset_millis_in(&Local, time)
}

#[must_use]
pub fn local_to_utc(local: i64) -> i64 {
    local_to_utc_in(&Local, local)
}
