//! Fee domain — transaction fees held against pending orders.

mod convert;
pub mod wire;

use crate::error::SdkResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A currency-tagged transaction fee frozen against a pending transaction.
///
/// The amount keeps the exact precision and scale the backend reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrozenTransactionFee {
    currency: String,
    frozen_transaction_fee: Decimal,
}

impl FrozenTransactionFee {
    pub fn new(currency: impl Into<String>, frozen_transaction_fee: Decimal) -> Self {
        Self {
            currency: currency.into(),
            frozen_transaction_fee,
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn frozen_transaction_fee(&self) -> Decimal {
        self.frozen_transaction_fee
    }
}

impl std::fmt::Display for FrozenTransactionFee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FrozenTransactionFee [currency={}, frozenTransactionFee={}]",
            self.currency, self.frozen_transaction_fee
        )
    }
}

/// Decode a single frozen fee payload.
pub fn decode_frozen_transaction_fee(json: &str) -> SdkResult<FrozenTransactionFee> {
    let raw: wire::FrozenTransactionFeeResponse = serde_json::from_str(json)?;
    let fee = FrozenTransactionFee::try_from(raw)?;
    tracing::debug!("Decoded frozen fee {} {}", fee.frozen_transaction_fee, fee.currency);
    Ok(fee)
}

/// Decode a list of frozen fees, as carried in account balance payloads.
pub fn decode_frozen_transaction_fees(json: &str) -> SdkResult<Vec<FrozenTransactionFee>> {
    let raw: Option<Vec<wire::FrozenTransactionFeeResponse>> = serde_json::from_str(json)?;
    let fees = raw
        .unwrap_or_default()
        .into_iter()
        .map(FrozenTransactionFee::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!("Decoded {} frozen fee(s)", fees.len());
    Ok(fees)
}
