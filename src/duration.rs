use std::ops::Neg;

use serde::{Deserialize, Serialize};

/// An amount to add to each local component of a date.
///
/// The amounts are added to their components all at once and the result is
/// normalized afterwards, so `{ months: 1, days: 1 }` on the 31st of January
/// is not the same as adding a month and then a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DateDuration {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
}

macro_rules! duration_field {
    ( $( $field:ident => $with:ident ),+ $(,)? ) => {
        impl DateDuration {
            $(
                #[must_use]
                pub const fn $field($field: i64) -> Self {
                    Self::ZERO.$with($field)
                }

                #[must_use]
                pub const fn $with(mut self, $field: i64) -> Self {
                    self.$field = $field;
                    self
                }
            )+
        }
    };
}

duration_field! {
    years => with_years,
    months => with_months,
    days => with_days,
    hours => with_hours,
    minutes => with_minutes,
    seconds => with_seconds,
    milliseconds => with_milliseconds,
}

impl DateDuration {
    pub const ZERO: Self = Self {
        years: 0,
        months: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        milliseconds: 0,
    };

    #[must_use]
    pub fn values(&self) -> [i64; 7] {
        [
            self.years,
            self.months,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
            self.milliseconds,
        ]
    }
}

impl Neg for DateDuration {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            years: -self.years,
            months: -self.months,
            days: -self.days,
            hours: -self.hours,
            minutes: -self.minutes,
            seconds: -self.seconds,
            milliseconds: -self.milliseconds,
        }
    }
}
