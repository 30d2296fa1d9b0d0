//! Shared DTO pieces: network selection, address validation, acknowledgements.

use alloy_primitives::Address;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::models::NetworkName;
use crate::shared::errors::DomainError;

lazy_static! {
    /// Regex for validating Ethereum addresses
    static ref ETHEREUM_ADDRESS_REGEX: Regex = Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("valid regex");
}

/// Validates an Ethereum address format
pub fn validate_ethereum_address(address: &str) -> Result<(), validator::ValidationError> {
    if ETHEREUM_ADDRESS_REGEX.is_match(address.trim()) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("ethereum_address");
        error.message = Some("Invalid Ethereum address format (must be 0x followed by 40 hex characters)".into());
        Err(error)
    }
}

/// Parse an address taken from the URL path
///
/// # Errors
///
/// Returns `DomainError::InvalidAddress` if `raw` is not `0x` plus 40 hex characters.
pub fn parse_address(raw: &str) -> Result<Address, DomainError> {
    if !ETHEREUM_ADDRESS_REGEX.is_match(raw.trim()) {
        return Err(DomainError::InvalidAddress(raw.to_string()));
    }
    raw.trim().parse().map_err(|_| DomainError::InvalidAddress(raw.to_string()))
}

/// `?network=` query parameter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkQuery {
    pub network: Option<String>,
}

impl NetworkQuery {
    /// The requested network, or `default` when the parameter is absent
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnsupportedNetwork` for an unrecognized name.
    pub fn network_or(&self, default: NetworkName) -> Result<NetworkName, DomainError> {
        match self.network.as_deref() {
            None | Some("") => Ok(default),
            Some(name) => name.parse(),
        }
    }
}

/// `{"success": true}`
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub success: bool,
}

impl AckResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ethereum_address() {
        assert!(validate_ethereum_address("0x70997970C51812dc3A010C7d01b50e0d17dc79C8").is_ok());
        assert!(validate_ethereum_address("70997970C51812dc3A010C7d01b50e0d17dc79C8").is_err());
        assert!(validate_ethereum_address("0x1234").is_err());
    }

    #[test]
    fn test_parse_address() {
        let address = parse_address("0x70997970c51812dc3a010c7d01b50e0d17dc79c8").unwrap();
        assert_eq!(address.to_string(), "0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
        assert!(matches!(parse_address("nope"), Err(DomainError::InvalidAddress(_))));
    }

    #[test]
    fn test_network_query_defaults() {
        let query = NetworkQuery::default();
        assert_eq!(query.network_or(NetworkName::Sepolia).unwrap(), NetworkName::Sepolia);

        let query = NetworkQuery {
            network: Some("holesky".to_string()),
        };
        assert_eq!(query.network_or(NetworkName::Localhost).unwrap(), NetworkName::Holesky);

        let query = NetworkQuery {
            network: Some("mainnet".to_string()),
        };
        assert!(matches!(
            query.network_or(NetworkName::Localhost),
            Err(DomainError::UnsupportedNetwork(_))
        ));
    }
}
