//! Wire types for market temperature responses (REST).

use crate::shared::serde_util::NumberOrString;
use serde::{Deserialize, Serialize};

/// Raw market temperature record.
///
/// The current-temperature endpoint names the time field `updated_at`,
/// history records name it `timestamp`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketTemperatureResponse {
    #[serde(default)]
    pub temperature: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub valuation: Option<i32>,
    #[serde(default)]
    pub sentiment: Option<i32>,
    #[serde(default, alias = "updated_at")]
    pub timestamp: Option<NumberOrString>,
}

/// Raw market temperature history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryMarketTemperatureWire {
    #[serde(rename = "type", default)]
    pub granularity: Option<String>,
    #[serde(rename = "list", default)]
    pub records: Option<Vec<MarketTemperatureResponse>>,
}
