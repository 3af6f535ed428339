use std::time::SystemTime;

use chrono::{DateTime, TimeZone};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::object::truncate;
use crate::time::HostDate;
use crate::{DateObject, ImmutableDate};

/// Everything a date can be built from.
///
/// Each variant is forwarded to the matching named constructor of
/// [`ImmutableDate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Year, month (from 1), date, hours, minutes, seconds and milliseconds.
    Components([i64; 7]),
    /// Milliseconds since the epoch.
    Timestamp(i64),
    Text(String),
    Native(HostDate),
    Object(DateObject),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArguments {
    #[error("expected a timestamp, a string, an object or a list of components, found {0}")]
    UnexpectedShape(&'static str),
    #[error("expected between 2 and 7 components, found {0}")]
    ComponentCount(usize),
    #[error("component {index} is not a number: {value}")]
    NotANumber { index: usize, value: String },
    #[error("invalid date object: {0}")]
    InvalidObject(String),
}

fn components(items: &[Value]) -> Result<[i64; 7], InvalidArguments> {
    if !(2..=7).contains(&items.len()) {
        return Err(InvalidArguments::ComponentCount(items.len()));
    }

    let mut result = [0, 1, 1, 0, 0, 0, 0];
    for (index, item) in items.iter().enumerate() {
        result[index] = match item {
            Value::Number(number) => truncate(number),
            _ => None,
        }
        .ok_or_else(|| InvalidArguments::NotANumber {
            index,
            value: item.to_string(),
        })?;
    }

    Ok(result)
}

impl TryFrom<&Value> for DateInput {
    type Error = InvalidArguments;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(number) => truncate(number)
                .map(Self::Timestamp)
                .ok_or(InvalidArguments::UnexpectedShape("a number out of range")),
            Value::String(text) => Ok(Self::Text(text.clone())),
            Value::Array(items) => components(items).map(Self::Components),
            Value::Object(_) => DateObject::deserialize(value)
                .map(Self::Object)
                .map_err(|error| InvalidArguments::InvalidObject(error.to_string())),
            Value::Bool(_) => Err(InvalidArguments::UnexpectedShape("a boolean")),
            Value::Null => Err(InvalidArguments::UnexpectedShape("null")),
        }
    }
}

impl TryFrom<Value> for DateInput {
    type Error = InvalidArguments;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

impl From<DateInput> for ImmutableDate {
    fn from(value: DateInput) -> Self {
        match value {
            DateInput::Components([year, month, date, hours, minutes, seconds, milliseconds]) => {
                Self::from_components(year, month, date, hours, minutes, seconds, milliseconds)
            }
            DateInput::Timestamp(milliseconds) => Self::from_timestamp(milliseconds),
            DateInput::Text(text) => Self::from_string(&text),
            DateInput::Native(date) => Self::from_date(date),
            DateInput::Object(object) => Self::from_object(object),
        }
    }
}

impl TryFrom<&Value> for ImmutableDate {
    type Error = InvalidArguments;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        DateInput::try_from(value).map(Self::from)
    }
}

impl TryFrom<Value> for ImmutableDate {
    type Error = InvalidArguments;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        Self::Timestamp(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<HostDate> for DateInput {
    fn from(value: HostDate) -> Self {
        Self::Native(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Native(value.into())
    }
}

impl From<SystemTime> for DateInput {
    fn from(value: SystemTime) -> Self {
        Self::Native(value.into())
    }
}

impl From<DateObject> for DateInput {
    fn from(value: DateObject) -> Self {
        Self::Object(value)
    }
}

impl From<i64> for ImmutableDate {
    fn from(value: i64) -> Self {
        Self::from_timestamp(value)
    }
}

impl From<&str> for ImmutableDate {
    fn from(value: &str) -> Self {
        Self::from_string(value)
    }
}

impl From<String> for ImmutableDate {
    fn from(value: String) -> Self {
        Self::from_string(&value)
    }
}

impl From<HostDate> for ImmutableDate {
    fn from(value: HostDate) -> Self {
        Self::from_date(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for ImmutableDate {
    fn from(value: DateTime<Tz>) -> Self {
        Self::from_date(value)
    }
}

impl From<SystemTime> for ImmutableDate {
    fn from(value: SystemTime) -> Self {
        Self::from_date(value)
    }
}

impl From<DateObject> for ImmutableDate {
    fn from(value: DateObject) -> Self {
        Self::from_object(value)
    }
}

// (year, month) up to (year, month, date, hours, minutes, seconds, milliseconds),
// the missing components default to the first day at midnight
macro_rules! impl_from_components {
    ( $( ( $( $name:ident ),+ ) ),+ $(,)? ) => {
        $(
            impl From<( $( impl_from_components!(@i64 $name), )+ )> for DateInput {
                fn from(( $( $name, )+ ): ( $( impl_from_components!(@i64 $name), )+ )) -> Self {
                    let mut components = [0, 1, 1, 0, 0, 0, 0];
                    for (slot, value) in components.iter_mut().zip([$( $name ),+]) {
                        *slot = value;
                    }
                    Self::Components(components)
                }
            }

            impl From<( $( impl_from_components!(@i64 $name), )+ )> for ImmutableDate {
                fn from(value: ( $( impl_from_components!(@i64 $name), )+ )) -> Self {
                    Self::from(DateInput::from(value))
                }
            }
        )+
    };
    (@i64 $name:ident) => { i64 };
}

impl_from_components! {
    (year, month),
    (year, month, date),
    (year, month, date, hours),
    (year, month, date, hours, minutes),
    (year, month, date, hours, minutes, seconds),
    (year, month, date, hours, minutes, seconds, milliseconds),
}
