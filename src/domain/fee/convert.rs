//! Conversion: FrozenTransactionFeeResponse → FrozenTransactionFee.

use super::wire;
use super::FrozenTransactionFee;
use crate::error::SdkError;
use crate::shared::serde_util::decimal_empty_is_zero;

impl TryFrom<wire::FrozenTransactionFeeResponse> for FrozenTransactionFee {
    type Error = SdkError;

    fn try_from(source: wire::FrozenTransactionFeeResponse) -> Result<Self, Self::Error> {
        Ok(FrozenTransactionFee {
            currency: source.currency.unwrap_or_default(),
            frozen_transaction_fee: decimal_empty_is_zero(source.frozen_transaction_fee.as_ref())?,
        })
    }
}
