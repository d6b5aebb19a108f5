//! Wire types for frozen fee responses (REST).

use crate::shared::serde_util::NumberOrString;
use serde::{Deserialize, Serialize};

/// Raw frozen fee entry. The backend sends an empty string for zero amounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrozenTransactionFeeResponse {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub frozen_transaction_fee: Option<NumberOrString>,
}
