//! Native Transfer DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::use_cases::transfers::EtherTransfer;

/// DTO for sending ether. The recipient's format is checked by the use case,
/// after the amount.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendEtherDto {
    #[validate(required(message = "Recipient address is required"))]
    pub recipient: Option<String>,

    #[validate(required(message = "Amount is required"))]
    pub amount: Option<Decimal>,
}

/// Response for `POST /eth-transfer/send`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEtherResponse {
    pub success: bool,
    pub transaction_hash: String,
    pub from: String,
    pub to: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl From<EtherTransfer> for SendEtherResponse {
    fn from(transfer: EtherTransfer) -> Self {
        Self {
            success: true,
            transaction_hash: transfer.tx_hash.to_string(),
            from: transfer.from.to_string(),
            to: transfer.to.to_string(),
            amount: transfer.amount,
        }
    }
}
