//! Integration tests for decoding backend payloads into domain types.
//!
//! Fixtures mirror the JSON bodies the quote and trade endpoints return.
//!
//! Run with:
//! ```bash
//! cargo test --test decode_integration
//! ```

use chrono::{DateTime, FixedOffset};
use market_models::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

const HISTORY_BODY: &str = r#"{
    "type": "day",
    "list": [
        {"timestamp": 1704067200, "temperature": 65, "valuation": 3, "sentiment": 2},
        {"timestamp": "1704153600", "temperature": 58, "valuation": 4, "sentiment": 1}
    ]
}"#;

const CURRENT_BODY: &str = r#"{
    "temperature": 65,
    "description": "Warm",
    "valuation": 3,
    "sentiment": 2,
    "updated_at": 1704067200
}"#;

fn ts(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap()
}

// ─── Market temperature ──────────────────────────────────────────────────────

#[test]
fn current_temperature_accepts_updated_at() {
    let t = decode_market_temperature(CURRENT_BODY, &DecodeConfig::default()).unwrap();
    assert_eq!(
        t,
        MarketTemperature::new(65, "Warm", 3, 2, ts("2024-01-01T00:00:00+00:00"))
    );
}

#[test]
fn current_temperature_debug_string_has_all_fields() {
    let t = decode_market_temperature(CURRENT_BODY, &DecodeConfig::default()).unwrap();
    let s = t.to_string();
    for needle in ["65", "Warm", "3", "2", "2024-01-01T00:00:00+00:00"] {
        assert!(s.contains(needle), "{s} should contain {needle}");
    }
}

#[test]
fn history_preserves_order_and_granularity() {
    let history =
        decode_history_market_temperature(HISTORY_BODY, &DecodeConfig::default()).unwrap();

    assert_eq!(history.granularity(), Granularity::Daily);
    assert_eq!(history.records().len(), 2);
    assert_eq!(history.records()[0].temperature(), 65);
    assert_eq!(history.records()[1].temperature(), 58);
    assert_eq!(
        history.records()[1].timestamp(),
        ts("2024-01-02T00:00:00+00:00")
    );
    // History records carry no description.
    assert_eq!(history.records()[0].description(), "");
}

#[test]
fn history_in_configured_offset() {
    let hkt = FixedOffset::east_opt(8 * 3600).unwrap();
    let config = DecodeConfig::default().with_offset(hkt);
    let history = decode_history_market_temperature(HISTORY_BODY, &config).unwrap();

    let first = history.records()[0].timestamp();
    assert_eq!(first.to_rfc3339(), "2024-01-01T08:00:00+08:00");
    assert_eq!(first, ts("2024-01-01T00:00:00+00:00"));
}

#[test]
fn history_unknown_granularity_passes_data_through() {
    let body = r#"{"type": "quarter", "list": [{"timestamp": 0, "temperature": 1}]}"#;
    let history = decode_history_market_temperature(body, &DecodeConfig::default()).unwrap();
    assert_eq!(history.granularity(), Granularity::Unknown);
    assert_eq!(history.len(), 1);
}

#[test]
fn history_missing_fields_default() {
    let history = decode_history_market_temperature("{}", &DecodeConfig::default()).unwrap();
    assert_eq!(history, HistoryMarketTemperatureResponse::default());

    let body = r#"{"type": "month", "list": [{"temperature": null, "description": null}]}"#;
    let history = decode_history_market_temperature(body, &DecodeConfig::default()).unwrap();
    assert_eq!(history.granularity(), Granularity::Monthly);
    assert_eq!(history.records()[0], MarketTemperature::default());
}

#[test]
fn malformed_payloads_are_errors() {
    let err = decode_history_market_temperature("not json", &DecodeConfig::default()).unwrap_err();
    assert!(matches!(err, SdkError::Serde(_)));

    let body = r#"{"temperature": 1, "timestamp": "soon"}"#;
    let err = decode_market_temperature(body, &DecodeConfig::default()).unwrap_err();
    assert!(matches!(err, SdkError::InvalidTimestamp(_)));
}

// ─── Frozen fees ─────────────────────────────────────────────────────────────

#[test]
fn frozen_fee_is_exact() {
    let body = r#"{"currency": "USD", "frozen_transaction_fee": "12.345"}"#;
    let fee = decode_frozen_transaction_fee(body).unwrap();
    assert_eq!(fee.currency(), "USD");
    assert_eq!(fee.frozen_transaction_fee(), Decimal::from_str("12.345").unwrap());
    assert_eq!(fee.frozen_transaction_fee().to_string(), "12.345");
    assert_eq!(
        fee.to_string(),
        "FrozenTransactionFee [currency=USD, frozenTransactionFee=12.345]"
    );
}

#[test]
fn frozen_fee_list() {
    let body = r#"[
        {"currency": "HKD", "frozen_transaction_fee": ""},
        {"currency": "USD", "frozen_transaction_fee": "0.015"},
        {"currency": "CNH"}
    ]"#;
    let fees = decode_frozen_transaction_fees(body).unwrap();

    assert_eq!(fees.len(), 3);
    assert!(fees[0].frozen_transaction_fee().is_zero());
    assert_eq!(fees[1].frozen_transaction_fee(), Decimal::new(15, 3));
    assert_eq!(fees[2].currency(), "CNH");
    assert!(fees[2].frozen_transaction_fee().is_zero());
}

#[test]
fn frozen_fee_string_amounts_keep_scale_and_precision() {
    let body = r#"[
        {"currency": "USD", "frozen_transaction_fee": "0.10"},
        {"currency": "USD", "frozen_transaction_fee": "12345678901234567.89"}
    ]"#;
    let fees = decode_frozen_transaction_fees(body).unwrap();

    assert_eq!(fees[0].frozen_transaction_fee().to_string(), "0.10");
    assert_eq!(fees[0].frozen_transaction_fee().scale(), 2);
    assert_eq!(
        fees[1].frozen_transaction_fee().to_string(),
        "12345678901234567.89"
    );
}

#[test]
fn frozen_fee_number_amounts_are_rejected() {
    for amount in ["0.10", "12345678901234567.89"] {
        let body = format!(r#"{{"currency": "USD", "frozen_transaction_fee": {amount}}}"#);
        let err = decode_frozen_transaction_fee(&body).unwrap_err();
        assert!(
            matches!(err, SdkError::InvalidDecimal(_)),
            "{amount} sent as a JSON number should be rejected"
        );
    }
}

#[test]
fn frozen_fee_list_null_is_empty() {
    assert!(decode_frozen_transaction_fees("null").unwrap().is_empty());
}

#[test]
fn frozen_fee_bad_amount_is_error() {
    let body = r#"{"currency": "USD", "frozen_transaction_fee": "1.2.3"}"#;
    let err = decode_frozen_transaction_fee(body).unwrap_err();
    assert!(matches!(err, SdkError::InvalidDecimal(_)));
}

// ─── Sharing ─────────────────────────────────────────────────────────────────

#[test]
fn types_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<MarketTemperature>();
    assert_send_sync::<HistoryMarketTemperatureResponse>();
    assert_send_sync::<FrozenTransactionFee>();
}
