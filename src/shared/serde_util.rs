//! Custom serde helpers for backend wire formats.

use crate::error::{SdkError, SdkResult};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A scalar the backend sends either as a JSON number or as a numeric string.
///
/// Kept raw on the wire so conversion can report which value was malformed.
/// Without serde_json's `arbitrary_precision`, `Number` holds non-integers as `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(serde_json::Number),
    Text(String),
}

impl From<i64> for NumberOrString {
    fn from(n: i64) -> Self {
        NumberOrString::Number(n.into())
    }
}

impl From<&str> for NumberOrString {
    fn from(s: &str) -> Self {
        NumberOrString::Text(s.to_string())
    }
}

/// Parses Unix seconds into a UTC instant. Absent or empty means the epoch.
pub fn unix_seconds(raw: Option<&NumberOrString>) -> SdkResult<DateTime<Utc>> {
    let secs = match raw {
        None => 0,
        Some(NumberOrString::Number(n)) => n
            .as_i64()
            .ok_or_else(|| SdkError::InvalidTimestamp(n.to_string()))?,
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => 0,
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| SdkError::InvalidTimestamp(s.clone()))?,
    };
    DateTime::<Utc>::from_timestamp(secs, 0)
        .ok_or_else(|| SdkError::InvalidTimestamp(secs.to_string()))
}

/// Parses a decimal amount sent as a string. Absent or empty means zero.
///
/// JSON numbers are rejected: by the time they reach here they have been
/// through `f64` and their scale and precision can no longer be trusted.
pub fn decimal_empty_is_zero(raw: Option<&NumberOrString>) -> SdkResult<Decimal> {
    let text = match raw {
        None => return Ok(Decimal::ZERO),
        Some(NumberOrString::Number(n)) => {
            return Err(SdkError::InvalidDecimal(format!(
                "expected a decimal string, got JSON number {}",
                n
            )))
        }
        Some(NumberOrString::Text(s)) => s.trim().to_string(),
    };
    if text.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| SdkError::InvalidDecimal(text))
}
