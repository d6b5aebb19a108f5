//! Conversions: market temperature wire types → domain types.

use super::wire;
use super::{HistoryMarketTemperatureResponse, MarketTemperature};
use crate::config::DecodeConfig;
use crate::error::SdkError;
use crate::shared::serde_util::unix_seconds;
use crate::shared::Granularity;

impl TryFrom<(wire::MarketTemperatureResponse, &DecodeConfig)> for MarketTemperature {
    type Error = SdkError;

    fn try_from(
        (source, config): (wire::MarketTemperatureResponse, &DecodeConfig),
    ) -> Result<Self, Self::Error> {
        let instant = unix_seconds(source.timestamp.as_ref())?;
        Ok(MarketTemperature {
            temperature: source.temperature.unwrap_or_default(),
            description: source.description.unwrap_or_default(),
            valuation: source.valuation.unwrap_or_default(),
            sentiment: source.sentiment.unwrap_or_default(),
            timestamp: config.localize(instant),
        })
    }
}

impl TryFrom<(wire::HistoryMarketTemperatureWire, &DecodeConfig)>
    for HistoryMarketTemperatureResponse
{
    type Error = SdkError;

    fn try_from(
        (source, config): (wire::HistoryMarketTemperatureWire, &DecodeConfig),
    ) -> Result<Self, Self::Error> {
        let granularity = match source.granularity.as_deref() {
            None => Granularity::Unknown,
            Some(token) => {
                let parsed = token.parse::<Granularity>().unwrap_or_default();
                if parsed == Granularity::Unknown && !token.trim().is_empty() {
                    tracing::warn!("Unrecognised granularity {:?}, treating as unknown", token);
                }
                parsed
            }
        };

        let records = source
            .records
            .unwrap_or_default()
            .into_iter()
            .map(|r| MarketTemperature::try_from((r, config)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(HistoryMarketTemperatureResponse {
            granularity,
            records,
        })
    }
}
