//! The host date this crate builds on and the calendar arithmetic behind it.

pub mod calendar;
pub(crate) mod local;
pub mod parse;

mod month;
pub use month::*;
mod week_day;
pub use week_day::*;
mod year;
pub use year::*;
mod host_date;
pub use host_date::*;
