use derive_more::Display;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// Numbers with a fraction are truncated, like every component is.
pub(crate) fn truncate(number: &Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|value| value.is_finite())
            .map(|value| value.trunc() as i64)
    })
}

fn truncated<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Number>::deserialize(deserializer)?
        .map(|number| {
            truncate(&number)
                .ok_or_else(|| de::Error::custom(format!("{} is not a valid component", number)))
        })
        .transpose()
}

/// A date given by some of its local components, the month is counted from 1.
///
/// Used to build dates with [`ImmutableDate::from_object`] and to replace
/// components with [`ImmutableDate::set`]. Deserializing ignores unknown keys
/// and truncates fractional components.
///
/// [`ImmutableDate::from_object`]: crate::ImmutableDate::from_object
/// [`ImmutableDate::set`]: crate::ImmutableDate::set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct DateObject {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "truncated")]
    pub year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "truncated")]
    pub month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "truncated")]
    pub date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "truncated")]
    pub hours: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "truncated")]
    pub minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "truncated")]
    pub seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "truncated")]
    pub milliseconds: Option<i64>,
}

impl DateObject {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            year: None,
            month: None,
            date: None,
            hours: None,
            minutes: None,
            seconds: None,
            milliseconds: None,
        }
    }

    #[must_use]
    pub const fn with_year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    #[must_use]
    pub const fn with_month(mut self, month: i64) -> Self {
        self.month = Some(month);
        self
    }

    #[must_use]
    pub const fn with_date(mut self, date: i64) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub const fn with_hours(mut self, hours: i64) -> Self {
        self.hours = Some(hours);
        self
    }

    #[must_use]
    pub const fn with_minutes(mut self, minutes: i64) -> Self {
        self.minutes = Some(minutes);
        self
    }

    #[must_use]
    pub const fn with_seconds(mut self, seconds: i64) -> Self {
        self.seconds = Some(seconds);
        self
    }

    #[must_use]
    pub const fn with_milliseconds(mut self, milliseconds: i64) -> Self {
        self.milliseconds = Some(milliseconds);
        self
    }

    /// Takes every component that is missing in `self` from `other`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self {
            year: self.year.or(other.year),
            month: self.month.or(other.month),
            date: self.date.or(other.date),
            hours: self.hours.or(other.hours),
            minutes: self.minutes.or(other.minutes),
            seconds: self.seconds.or(other.seconds),
            milliseconds: self.milliseconds.or(other.milliseconds),
        }
    }

    /// The components in order, if none of them is missing.
    #[must_use]
    pub fn complete(&self) -> Option<[i64; 7]> {
        Some([
            self.year?,
            self.month?,
            self.date?,
            self.hours?,
            self.minutes?,
            self.seconds?,
            self.milliseconds?,
        ])
    }
}

impl From<DateComponents> for DateObject {
    fn from(value: DateComponents) -> Self {
        let [year, month, date, hours, minutes, seconds, milliseconds] = value.values();

        Self {
            year: Some(year),
            month: Some(month),
            date: Some(date),
            hours: Some(hours),
            minutes: Some(minutes),
            seconds: Some(seconds),
            milliseconds: Some(milliseconds),
        }
    }
}

/// All local components of a valid date, the month is counted from 1.
///
/// Serializes to an object with exactly the seven fields, in this order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, Display,
)]
#[display(
    "{year:04}-{month:02}-{date:02} {hours:02}:{minutes:02}:{seconds:02}.{milliseconds:03}"
)]
pub struct DateComponents {
    pub year: i64,
    pub month: u32,
    pub date: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub milliseconds: u32,
}

impl DateComponents {
    /// The names of the components in iteration order.
    pub const FIELDS: [&'static str; 7] = [
        "year",
        "month",
        "date",
        "hours",
        "minutes",
        "seconds",
        "milliseconds",
    ];

    #[must_use]
    pub fn values(&self) -> [i64; 7] {
        [
            self.year,
            self.month.into(),
            self.date.into(),
            self.hours.into(),
            self.minutes.into(),
            self.seconds.into(),
            self.milliseconds.into(),
        ]
    }

    /// The named components, in the same order as [`DateComponents::FIELDS`].
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, i64)> {
        Self::FIELDS.into_iter().zip(self.values())
    }
}

impl IntoIterator for DateComponents {
    type Item = i64;
    type IntoIter = std::array::IntoIter<i64, 7>;

    fn into_iter(self) -> Self::IntoIter {
        self.values().into_iter()
    }
}
