//! Market temperature domain — sentiment readings and their history.

mod convert;
pub mod wire;

use crate::config::DecodeConfig;
use crate::error::SdkResult;
use crate::shared::Granularity;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

// ─── MarketTemperature ───────────────────────────────────────────────────────

/// A single timestamped market sentiment observation.
///
/// Values are reported by the upstream provider and passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketTemperature {
    temperature: i32,
    description: String,
    valuation: i32,
    sentiment: i32,
    timestamp: DateTime<FixedOffset>,
}

impl MarketTemperature {
    pub fn new(
        temperature: i32,
        description: impl Into<String>,
        valuation: i32,
        sentiment: i32,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            temperature,
            description: description.into(),
            valuation,
            sentiment,
            timestamp,
        }
    }

    pub fn temperature(&self) -> i32 {
        self.temperature
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn valuation(&self) -> i32 {
        self.valuation
    }

    pub fn sentiment(&self) -> i32 {
        self.sentiment
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }
}

impl Default for MarketTemperature {
    fn default() -> Self {
        Self {
            temperature: 0,
            description: String::new(),
            valuation: 0,
            sentiment: 0,
            timestamp: DateTime::<Utc>::UNIX_EPOCH.fixed_offset(),
        }
    }
}

impl std::fmt::Display for MarketTemperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MarketTemperature [temperature={}, description={}, valuation={}, sentiment={}, timestamp={}]",
            self.temperature,
            self.description,
            self.valuation,
            self.sentiment,
            self.timestamp.to_rfc3339()
        )
    }
}

// ─── HistoryMarketTemperatureResponse ────────────────────────────────────────

/// Market temperature series at a given granularity.
///
/// Records keep the order the backend delivered them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryMarketTemperatureResponse {
    granularity: Granularity,
    records: Vec<MarketTemperature>,
}

impl HistoryMarketTemperatureResponse {
    pub fn new(granularity: Granularity, records: Vec<MarketTemperature>) -> Self {
        Self {
            granularity,
            records,
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn records(&self) -> &[MarketTemperature] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MarketTemperature> {
        self.records.iter()
    }

    /// Last record as delivered.
    pub fn latest(&self) -> Option<&MarketTemperature> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a HistoryMarketTemperatureResponse {
    type Item = &'a MarketTemperature;
    type IntoIter = std::slice::Iter<'a, MarketTemperature>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl std::fmt::Display for HistoryMarketTemperatureResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HistoryMarketTemperatureResponse [granularity={}, records=[", self.granularity)?;
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", record)?;
        }
        write!(f, "]]")
    }
}

// ─── Decoding ────────────────────────────────────────────────────────────────

/// Decode a market temperature payload (current or historical record).
pub fn decode_market_temperature(
    json: &str,
    config: &DecodeConfig,
) -> SdkResult<MarketTemperature> {
    let raw: wire::MarketTemperatureResponse = serde_json::from_str(json)?;
    let temperature = MarketTemperature::try_from((raw, config))?;
    tracing::debug!(
        "Decoded market temperature at {}",
        temperature.timestamp.to_rfc3339()
    );
    Ok(temperature)
}

/// Decode a market temperature history payload.
pub fn decode_history_market_temperature(
    json: &str,
    config: &DecodeConfig,
) -> SdkResult<HistoryMarketTemperatureResponse> {
    let raw: wire::HistoryMarketTemperatureWire = serde_json::from_str(json)?;
    let history = HistoryMarketTemperatureResponse::try_from((raw, config))?;
    tracing::debug!(
        "Decoded {} market temperature record(s) at granularity {}",
        history.len(),
        history.granularity
    );
    Ok(history)
}
