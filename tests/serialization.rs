//! Tests the conversions of a date into other representations.

use std::time::SystemTime;

use immutable_date::time::HostDate;
use immutable_date::{DateComponents, ImmutableDate};
use serde_json::json;

use pretty_assertions::assert_eq;

mod common;

use common::{ISO_STRING, TIMESTAMP};

const COMPONENTS: DateComponents = DateComponents {
    year: 2023,
    month: 8,
    date: 4,
    hours: 1,
    minutes: 2,
    seconds: 3,
    milliseconds: 4,
};

#[test]
fn test_converters() {
    let date = ImmutableDate::from_string(ISO_STRING);

    assert_eq!(date.to_timestamp(), Some(TIMESTAMP));
    assert_eq!(date.to_iso_string().as_deref(), Some(ISO_STRING));
    assert_eq!(date.to_json(), date.to_iso_string());
    assert_eq!(date.to_date().time(), Some(TIMESTAMP));
    assert_eq!(
        ImmutableDate::from_timestamp(0).to_date(),
        HostDate::from(SystemTime::UNIX_EPOCH)
    );
}

#[test]
fn test_to_string_round_trips() {
    let date = ImmutableDate::from_timestamp(TIMESTAMP - 4);
    let rendered = date.to_string();

    assert_eq!(ImmutableDate::from_string(&rendered), date);
    assert_eq!(rendered, date.to_date().to_string());
    assert!(rendered.contains(" GMT"));
}

#[test]
fn test_to_object() {
    let date = ImmutableDate::from_components(2023, 8, 4, 1, 2, 3, 4);

    assert_eq!(date.to_object(), Some(COMPONENTS));
    assert_eq!(
        ImmutableDate::from_object(COMPONENTS.into()).to_object(),
        Some(COMPONENTS)
    );
    assert_eq!(
        serde_json::to_value(date.to_object()).unwrap(),
        json!({
            "year": 2023,
            "month": 8,
            "date": 4,
            "hours": 1,
            "minutes": 2,
            "seconds": 3,
            "milliseconds": 4,
        })
    );
}

#[test]
fn test_components_round_trip() {
    for components in [
        (2023, 8, 4, 1, 2, 3, 4),
        (2024, 2, 29, 23, 59, 59, 999),
        (1970, 1, 1, 12, 0, 0, 0),
        (1900, 12, 31, 12, 30, 0, 0),
    ] {
        let (year, month, date, hours, minutes, seconds, milliseconds) = components;
        let object = ImmutableDate::from(components).to_object().unwrap();

        assert_eq!(
            object.values(),
            [year, month, date, hours, minutes, seconds, milliseconds]
        );
    }
}

#[test]
fn test_iteration() {
    let date = ImmutableDate::from_components(2023, 8, 4, 1, 2, 3, 4);

    let components = date.iter().collect::<Vec<_>>();
    assert_eq!(components[..3], [2023, 8, 4]);

    assert_eq!(date.iter().count(), 7);
    assert_eq!(date.iter().count(), 7);
    assert_eq!(
        date.into_iter().collect::<Vec<_>>(),
        COMPONENTS.into_iter().collect::<Vec<_>>()
    );
}

#[test]
fn test_entries() {
    let date = ImmutableDate::from_components(2023, 8, 4, 1, 2, 3, 4);

    assert_eq!(
        date.entries().collect::<Vec<_>>(),
        vec![
            ("year", 2023),
            ("month", 8),
            ("date", 4),
            ("hours", 1),
            ("minutes", 2),
            ("seconds", 3),
            ("milliseconds", 4),
        ]
    );
}

#[test]
fn test_serde() {
    let date = ImmutableDate::from_timestamp(TIMESTAMP);

    assert_eq!(
        serde_json::to_string(&date).unwrap(),
        format!("\"{}\"", ISO_STRING)
    );
    assert_eq!(
        serde_json::from_str::<ImmutableDate>(&serde_json::to_string(&date).unwrap()).unwrap(),
        date
    );
    assert_eq!(
        serde_json::from_value::<ImmutableDate>(json!(TIMESTAMP)).unwrap(),
        date
    );
    assert_eq!(
        serde_json::from_value::<ImmutableDate>(json!([2023, 8, 4, 1, 2, 3, 4])).unwrap(),
        ImmutableDate::from_components(2023, 8, 4, 1, 2, 3, 4)
    );

    assert!(serde_json::from_value::<ImmutableDate>(json!(null)).is_err());
    assert!(serde_json::from_value::<ImmutableDate>(json!(true)).is_err());
}

#[test]
fn test_serde_invalid() {
    let date = ImmutableDate::from_string("invalid");

    assert_eq!(serde_json::to_value(date).unwrap(), json!(null));
    assert_eq!(date.to_json(), None);
    assert_eq!(
        serde_json::from_value::<ImmutableDate>(json!("invalid")).unwrap(),
        date
    );
}

#[test]
fn test_string_formats() {
    let utc = ImmutableDate::from_string("2023-08-04");
    let local = ImmutableDate::from_string("2023/08/04");

    assert_eq!(utc.to_iso_string().as_deref(), Some("2023-08-04T00:00:00.000Z"));
    assert_eq!(
        local,
        ImmutableDate::from_components(2023, 8, 4, 0, 0, 0, 0)
    );
    assert_eq!(
        local.to_timestamp().unwrap() - utc.to_timestamp().unwrap(),
        i64::from(local.timezone_offset().unwrap()) * 60_000
    );

    assert_eq!(
        ImmutableDate::from_string("2023-08-04T01:02:03.004"),
        ImmutableDate::from_components(2023, 8, 4, 1, 2, 3, 4)
    );
    assert_eq!(
        ImmutableDate::from_string("2023-08-04T01:02:03.004+00:00").to_timestamp(),
        Some(TIMESTAMP)
    );
    assert_eq!(
        ImmutableDate::from_string("2023-08-04T01:02:03.004-06:00")
            .to_iso_string()
            .as_deref(),
        Some("2023-08-04T07:02:03.004Z")
    );
}
