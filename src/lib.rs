//! An immutable date with months counted from 1.
//!
//! [`ImmutableDate`] wraps the instant of a [`HostDate`](time::HostDate) and
//! projects it into the local time zone of the host. It can be built from
//! components, timestamps, strings, host dates and partial objects, and every
//! operation returns a new date.
//!
//! ```
//! use immutable_date::{DateDuration, ImmutableDate};
//!
//! let date = ImmutableDate::from((2023, 8, 4, 1, 2, 3, 4));
//! let later = date + DateDuration::days(30);
//!
//! assert_eq!(later.to_object().map(|o| o.to_string()).as_deref(), Some("2023-09-03 01:02:03.004"));
//! assert_eq!(date.month(), Some(8));
//! ```

mod duration;
mod immutable_date;
mod object;
mod utils;

pub mod input;
pub mod time;

#[doc(hidden)]
pub use static_assertions;

pub use duration::*;
pub use immutable_date::*;
pub use input::{DateInput, InvalidArguments};
pub use object::*;

/// Builds a date from anything [`ImmutableDate`] can be converted from.
pub fn from(input: impl Into<ImmutableDate>) -> ImmutableDate {
    input.into()
}

/// See [`ImmutableDate::from_date`].
pub fn from_date(date: impl Into<time::HostDate>) -> ImmutableDate {
    ImmutableDate::from_date(date)
}

/// See [`ImmutableDate::from_string`].
pub fn from_string(text: &str) -> ImmutableDate {
    ImmutableDate::from_string(text)
}

/// See [`ImmutableDate::from_object`].
pub fn from_object(object: DateObject) -> ImmutableDate {
    ImmutableDate::from_object(object)
}

/// See [`ImmutableDate::from_timestamp`].
pub fn from_timestamp(milliseconds: i64) -> ImmutableDate {
    ImmutableDate::from_timestamp(milliseconds)
}
