//! End-to-end tests for epoch timestamps embedded in JSON documents.

use chrono::{DateTime, Utc};
use epoch::EpochTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Heartbeat {
    device: String,
    seen_at: EpochTime,
}

fn instant(secs: i64, nanos: u32) -> EpochTime {
    EpochTime::from_timestamp(secs, nanos).unwrap()
}

#[test]
fn decodes_every_accepted_magnitude_to_the_same_instant() {
    let expected = instant(1_609_459_200, 0);
    for literal in [
        "1609459200",
        "1609459200000",
        "1609459200000000",
        "1609459200000000000",
    ] {
        let doc = format!(r#"{{"device": "a", "seen_at": {literal}}}"#);
        let hb: Heartbeat = serde_json::from_str(&doc).unwrap();
        assert_eq!(hb.seen_at, expected, "literal {literal}");
    }
}

#[test]
fn decodes_sub_second_fields() {
    let hb: Heartbeat =
        serde_json::from_str(r#"{"device": "a", "seen_at": 1609459200123}"#).unwrap();
    assert_eq!(hb.seen_at, instant(1_609_459_200, 123_000_000));

    let hb: Heartbeat =
        serde_json::from_str(r#"{"device": "a", "seen_at": 1609459200123456}"#).unwrap();
    assert_eq!(hb.seen_at, instant(1_609_459_200, 123_456_000));

    let hb: Heartbeat =
        serde_json::from_str(r#"{"device": "a", "seen_at": 1609459200123456789}"#).unwrap();
    assert_eq!(hb.seen_at, instant(1_609_459_200, 123_456_789));
}

#[test]
fn decodes_fractional_second_literals() {
    // The float lexer hands the value over as f64; its shortest display form
    // restores the original literal before normalization.
    let hb: Heartbeat =
        serde_json::from_str(r#"{"device": "a", "seen_at": 1609459200.123}"#).unwrap();
    assert_eq!(hb.seen_at, instant(1_609_459_200, 123_000_000));
}

#[test]
fn decodes_string_wrapped_numerals() {
    let hb: Heartbeat =
        serde_json::from_str(r#"{"device": "a", "seen_at": "1609459200123"}"#).unwrap();
    assert_eq!(hb.seen_at, instant(1_609_459_200, 123_000_000));
}

#[test]
fn encodes_as_bare_millisecond_numeral() {
    let hb = Heartbeat {
        device: "a".to_owned(),
        seen_at: instant(1_609_459_200, 123_000_000),
    };
    assert_eq!(
        serde_json::to_string(&hb).unwrap(),
        r#"{"device":"a","seen_at":1609459200123}"#
    );
}

#[test]
fn encode_of_the_epoch_is_zero() {
    let hb = Heartbeat {
        device: "a".to_owned(),
        seen_at: EpochTime::UNIX_EPOCH,
    };
    assert_eq!(
        serde_json::to_string(&hb).unwrap(),
        r#"{"device":"a","seen_at":0}"#
    );
}

#[test]
fn roundtrips_through_a_document() {
    let hb = Heartbeat {
        device: "a".to_owned(),
        seen_at: instant(1_609_459_200, 123_000_000),
    };
    let doc = serde_json::to_string(&hb).unwrap();
    let back: Heartbeat = serde_json::from_str(&doc).unwrap();
    assert_eq!(back, hb);
}

#[test]
fn digit_count_error_aborts_the_document_parse() {
    let err = serde_json::from_str::<Heartbeat>(r#"{"device": "a", "seen_at": 160945920012}"#)
        .unwrap_err();
    assert!(
        err.to_string()
            .contains("unexpected number of digits in timestamp"),
        "unexpected message: {err}"
    );
}

#[test]
fn malformed_numeral_error_names_the_parser_failure() {
    let err = serde_json::from_str::<Heartbeat>(r#"{"device": "a", "seen_at": "16a9459200"}"#)
        .unwrap_err();
    assert!(
        err.to_string().contains("invalid digit"),
        "unexpected message: {err}"
    );
}

#[test]
fn with_helper_matches_the_newtype_wire_format() {
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Plain {
        #[serde(with = "epoch::serde::ts_epoch")]
        seen_at: DateTime<Utc>,
    }

    let plain: Plain = serde_json::from_str(r#"{"seen_at": 1609459200.5}"#).unwrap();
    assert_eq!(
        plain.seen_at,
        DateTime::from_timestamp(1_609_459_200, 500_000_000).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&plain).unwrap(),
        r#"{"seen_at":1609459200500}"#
    );
}
