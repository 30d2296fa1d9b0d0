//! Token Contract DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use super::common::validate_ethereum_address;
use crate::application::use_cases::contracts::{ContractInfo, DeployedToken, HealthStatus, NewToken, TokenTransfer};
use crate::domain::models::{DeployedTokenRecord, TransactionOutcome};

/// Response for `GET /contract`
#[derive(Debug, Serialize)]
pub struct ContractInfoResponse {
    pub address: String,
    pub abi: Value,
    pub network: String,
}

impl From<ContractInfo> for ContractInfoResponse {
    fn from(info: ContractInfo) -> Self {
        Self {
            address: info.address.to_string(),
            abi: info.abi,
            network: info.network.to_string(),
        }
    }
}

/// DTO for deploying a new token
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeployTokenDto {
    #[validate(required(message = "Name is required"))]
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[validate(required(message = "Symbol is required"))]
    #[validate(length(min = 1, max = 20, message = "symbol must be between 1 and 20 characters"))]
    pub symbol: Option<String>,

    #[validate(required(message = "Initial supply is required"))]
    pub initial_supply: Option<Decimal>,
}

impl From<DeployTokenDto> for NewToken {
    fn from(dto: DeployTokenDto) -> Self {
        Self {
            name: dto.name.unwrap_or_default(),
            symbol: dto.symbol.unwrap_or_default(),
            initial_supply: dto.initial_supply.unwrap_or_default(),
        }
    }
}

/// A deployed token as listed by the API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployedTokenDto {
    pub address: String,
    pub name: String,
    pub symbol: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub initial_supply: Decimal,
    pub network: String,
}

impl From<DeployedTokenRecord> for DeployedTokenDto {
    fn from(record: DeployedTokenRecord) -> Self {
        Self {
            address: record.address.to_string(),
            name: record.name,
            symbol: record.symbol,
            initial_supply: record.initial_supply,
            network: record.network.to_string(),
        }
    }
}

/// Response for `POST /deploy-token`
#[derive(Debug, Serialize)]
pub struct DeployTokenResponse {
    pub success: bool,
    #[serde(flatten)]
    pub token: DeployedTokenDto,
    pub abi: Value,
}

impl From<DeployedToken> for DeployTokenResponse {
    fn from(deployed: DeployedToken) -> Self {
        Self {
            success: true,
            token: deployed.record.into(),
            abi: deployed.abi,
        }
    }
}

/// Response for `GET /deployed-tokens`
#[derive(Debug, Serialize)]
pub struct DeployedTokensResponse {
    pub tokens: Vec<DeployedTokenDto>,
}

/// Response for `GET /balance/{address}` and `GET /native-balance/{address}`
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub balance: String,
}

/// Response for `GET /owner`
#[derive(Debug, Serialize)]
pub struct OwnerResponse {
    pub owner: String,
}

/// DTO for an owner push transfer
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransferToUserDto {
    #[serde(alias = "userAddress")]
    #[validate(required(message = "Recipient address is required"))]
    #[validate(custom(function = "validate_ethereum_address"))]
    pub recipient_address: Option<String>,

    #[validate(required(message = "Amount is required"))]
    pub amount: Option<Decimal>,
}

/// Response for `POST /transfer-to-user`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferToUserResponse {
    pub success: bool,
    pub tx_hash: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl From<TokenTransfer> for TransferToUserResponse {
    fn from(transfer: TokenTransfer) -> Self {
        Self {
            success: true,
            tx_hash: transfer.tx_hash.to_string(),
            amount: transfer.amount,
        }
    }
}

/// DTO for relaying a signed transaction
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RelayTransactionDto {
    #[validate(required(message = "Signed transaction required"))]
    pub signed_tx: Option<String>,
}

/// Response for `POST /transfer`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayTransactionResponse {
    pub success: bool,
    pub tx_hash: String,
    pub block_number: Option<u64>,
}

impl From<TransactionOutcome> for RelayTransactionResponse {
    fn from(outcome: TransactionOutcome) -> Self {
        Self {
            success: true,
            tx_hash: outcome.hash.to_string(),
            block_number: outcome.block_number,
        }
    }
}

/// Response for `GET /health`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub contract_deployed: bool,
    pub contract_address: Option<String>,
}

impl From<HealthStatus> for HealthResponse {
    fn from(health: HealthStatus) -> Self {
        Self {
            status: "OK",
            contract_deployed: health.contract_deployed,
            contract_address: health.contract_address.map(|a| a.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_transfer_accepts_user_address_alias() {
        let dto: TransferToUserDto = serde_json::from_value(json!({
            "userAddress": "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
            "amount": "2.5",
        }))
        .unwrap();

        assert!(dto.validate().is_ok());
        assert_eq!(dto.amount, Some(dec!(2.5)));
    }

    #[test]
    fn test_transfer_rejects_bad_address() {
        let dto: TransferToUserDto = serde_json::from_value(json!({
            "recipientAddress": "0xnothex",
            "amount": 1,
        }))
        .unwrap();

        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("recipient_address"));
    }

    #[test]
    fn test_deploy_token_requires_all_fields() {
        let dto: DeployTokenDto = serde_json::from_value(json!({"name": "Foo"})).unwrap();

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("symbol"));
        assert!(fields.contains_key("initial_supply"));
    }

    #[test]
    fn test_deploy_response_shape() {
        let response = DeployTokenResponse::from(DeployedToken {
            record: DeployedTokenRecord {
                address: Address::repeat_byte(0x11),
                name: "Foo".to_string(),
                symbol: "FOO".to_string(),
                initial_supply: dec!(100),
                network: crate::domain::models::NetworkName::Localhost,
            },
            abi: json!([]),
        });

        let body = serde_json::to_value(response).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["initialSupply"], json!(100.0));
        assert_eq!(body["network"], "localhost");
        assert_eq!(body["address"], "0x1111111111111111111111111111111111111111");
        assert!(body["abi"].is_array());
    }

    #[test]
    fn test_health_response_shape() {
        let body = serde_json::to_value(HealthResponse::from(HealthStatus {
            contract_deployed: false,
            contract_address: None,
        }))
        .unwrap();

        assert_eq!(body, json!({"status": "OK", "contractDeployed": false, "contractAddress": null}));
    }
}
