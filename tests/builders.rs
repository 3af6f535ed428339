//! Tests the different ways to build a date.

use std::time::SystemTime;

use chrono::{Local, TimeZone, Utc};
use immutable_date::time::HostDate;
use immutable_date::{date, DateInput, DateObject, ImmutableDate, InvalidArguments};
use serde_json::json;

use pretty_assertions::assert_eq;

mod common;

use common::{local_timestamp, ISO_STRING, TIMESTAMP};

#[test]
fn test_from_components() {
    let date = ImmutableDate::from_components(2023, 8, 4, 1, 2, 3, 4);

    assert_eq!(
        date.to_timestamp(),
        Some(local_timestamp(2023, 8, 4, 1, 2, 3, 4))
    );
    assert_eq!(
        date.to_date(),
        HostDate::from_local_components(2023, 7, 4, 1, 2, 3, 4)
    );
}

#[test]
fn test_from_tuples() {
    assert_eq!(
        ImmutableDate::from((2023, 8)),
        ImmutableDate::from_components(2023, 8, 1, 0, 0, 0, 0)
    );
    assert_eq!(
        ImmutableDate::from((2023, 8, 4)),
        ImmutableDate::from_components(2023, 8, 4, 0, 0, 0, 0)
    );
    assert_eq!(
        ImmutableDate::from((2023, 8, 4, 1, 2)),
        ImmutableDate::from_components(2023, 8, 4, 1, 2, 0, 0)
    );
    assert_eq!(
        ImmutableDate::from((2023, 8, 4, 1, 2, 3, 4)),
        ImmutableDate::from_components(2023, 8, 4, 1, 2, 3, 4)
    );
}

#[test]
fn test_from_timestamp() {
    let date = ImmutableDate::from(TIMESTAMP);

    assert_eq!(date, ImmutableDate::from_timestamp(TIMESTAMP));
    assert_eq!(date.to_timestamp(), Some(TIMESTAMP));
    assert_eq!(date.to_iso_string().as_deref(), Some(ISO_STRING));
}

#[test]
fn test_from_string() {
    let date = ImmutableDate::from(ISO_STRING);

    assert_eq!(date, ImmutableDate::from(ISO_STRING.to_string()));
    assert_eq!(date.to_timestamp(), Some(TIMESTAMP));
}

#[test]
fn test_from_date() {
    let host = HostDate::from_local_components(2023, 7, 4, 1, 2, 3, 4);

    assert_eq!(
        ImmutableDate::from(host),
        ImmutableDate::from_components(2023, 8, 4, 1, 2, 3, 4)
    );

    let utc = Utc.timestamp_millis_opt(TIMESTAMP).unwrap();
    assert_eq!(ImmutableDate::from(utc).to_timestamp(), Some(TIMESTAMP));
    assert_eq!(
        ImmutableDate::from(utc.with_timezone(&Local)).to_timestamp(),
        Some(TIMESTAMP)
    );
    assert_eq!(
        ImmutableDate::from(SystemTime::UNIX_EPOCH).to_timestamp(),
        Some(0)
    );
}

#[test]
fn test_from_date_copies() {
    let mut host = HostDate::from_timestamp(TIMESTAMP);
    let date = ImmutableDate::from_date(host);

    host.set_date(1);

    assert_eq!(date.to_timestamp(), Some(TIMESTAMP));
    assert_ne!(host.time(), Some(TIMESTAMP));
}

#[test]
fn test_from_object() {
    let object = DateObject::new()
        .with_year(2023)
        .with_month(8)
        .with_date(4)
        .with_hours(1)
        .with_minutes(2)
        .with_seconds(3)
        .with_milliseconds(4);

    assert_eq!(
        ImmutableDate::from(object),
        ImmutableDate::from_components(2023, 8, 4, 1, 2, 3, 4)
    );
}

#[test]
fn test_from_object_defaults() {
    assert_eq!(
        ImmutableDate::from_object(DateObject::new()).to_timestamp(),
        Some(local_timestamp(1970, 1, 1, 0, 0, 0, 0))
    );

    let cases = [
        (DateObject::new().with_year(2023), (2023, 1, 1, 0, 0, 0)),
        (
            DateObject::new().with_year(2023).with_month(8),
            (2023, 8, 1, 0, 0, 0),
        ),
        (
            DateObject::new().with_year(2023).with_month(8).with_date(4),
            (2023, 8, 4, 0, 0, 0),
        ),
        (
            DateObject::new()
                .with_year(2023)
                .with_month(8)
                .with_date(4)
                .with_hours(1),
            (2023, 8, 4, 1, 0, 0),
        ),
        (
            DateObject::new()
                .with_year(2023)
                .with_month(8)
                .with_date(4)
                .with_hours(1)
                .with_minutes(2)
                .with_seconds(3),
            (2023, 8, 4, 1, 2, 3),
        ),
    ];

    for (object, (year, month, date, hours, minutes, seconds)) in cases {
        assert_eq!(
            ImmutableDate::from_object(object).to_timestamp(),
            Some(local_timestamp(year, month, date, hours, minutes, seconds, 0)),
            "{:?}",
            object
        );
    }
}

#[test]
fn test_now() {
    let before = Utc::now().timestamp_millis();
    let now = ImmutableDate::now().to_timestamp().unwrap();
    let after = Utc::now().timestamp_millis();

    assert!(before <= now && now <= after);
}

#[test]
fn test_module_functions() {
    let host = HostDate::from_timestamp(TIMESTAMP);
    let object = DateObject::new().with_year(2023);

    assert_eq!(immutable_date::from(TIMESTAMP), ImmutableDate::from(TIMESTAMP));
    assert_eq!(immutable_date::from((2023, 8, 4)), ImmutableDate::from((2023, 8, 4)));
    assert_eq!(immutable_date::from_date(host), ImmutableDate::from_date(host));
    assert_eq!(
        immutable_date::from_string(ISO_STRING),
        ImmutableDate::from_string(ISO_STRING)
    );
    assert_eq!(
        immutable_date::from_object(object),
        ImmutableDate::from_object(object)
    );
    assert_eq!(
        immutable_date::from_timestamp(TIMESTAMP),
        ImmutableDate::from_timestamp(TIMESTAMP)
    );
}

#[test]
fn test_date_macro() {
    assert_eq!(date!(2023:8:4), ImmutableDate::from((2023, 8, 4)));
    assert_eq!(
        date!(2024:2:29, 23:59:59),
        ImmutableDate::from((2024, 2, 29, 23, 59, 59))
    );
}

#[test]
fn test_dynamic_input() {
    let cases = [
        (json!(TIMESTAMP), ImmutableDate::from_timestamp(TIMESTAMP)),
        (json!(ISO_STRING), ImmutableDate::from_string(ISO_STRING)),
        (
            json!([2023, 8, 4, 1, 2, 3, 4]),
            ImmutableDate::from_components(2023, 8, 4, 1, 2, 3, 4),
        ),
        (json!([2023, 8]), ImmutableDate::from((2023, 8))),
        (
            json!({ "year": 2023, "month": 8 }),
            ImmutableDate::from_object(DateObject::new().with_year(2023).with_month(8)),
        ),
        (json!({}), ImmutableDate::from_object(DateObject::new())),
        (json!({ "weeks": 1 }), ImmutableDate::from_object(DateObject::new())),
        (
            json!({ "year": 2023.5, "month": 8 }),
            ImmutableDate::from_object(DateObject::new().with_year(2023).with_month(8)),
        ),
    ];

    for (value, expected) in cases {
        assert_eq!(ImmutableDate::try_from(&value), Ok(expected), "{}", value);
    }
}

#[test]
fn test_dynamic_input_rejects_unknown_shapes() {
    for value in [json!(null), json!(false), json!([]), json!([2023]), json!(["2023", 8])] {
        assert!(
            ImmutableDate::try_from(&value).is_err(),
            "{} should be rejected",
            value
        );
    }

    assert_eq!(
        ImmutableDate::try_from(json!(true)),
        Err(InvalidArguments::UnexpectedShape("a boolean"))
    );
}

#[test]
fn test_date_input_dispatch() {
    let host = HostDate::from_timestamp(TIMESTAMP);

    assert_eq!(
        ImmutableDate::from(DateInput::from(host)),
        ImmutableDate::from_date(host)
    );
    assert_eq!(
        ImmutableDate::from(DateInput::from(ISO_STRING)),
        ImmutableDate::from_timestamp(TIMESTAMP)
    );
    assert_eq!(
        ImmutableDate::from(DateInput::from((2023, 8, 4))),
        ImmutableDate::from_components(2023, 8, 4, 0, 0, 0, 0)
    );
}

#[test]
fn test_unparseable_string_is_invalid() {
    for text in ["", "not a date", "2023-13-01", "2023-02-30", "2023-08-04T25:00"] {
        let date = ImmutableDate::from_string(text);
        assert!(!date.is_valid(), "{:?} should be invalid", text);
        assert_eq!(date.to_string(), "Invalid Date");
    }
}
