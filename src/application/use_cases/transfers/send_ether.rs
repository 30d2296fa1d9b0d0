//! Send Ether Use Case
//!
//! Sends native currency from the network's configured signer.

use std::str::FromStr;
use std::sync::Arc;

use alloy_primitives::{Address, TxHash};
use rust_decimal::Decimal;

use crate::application::registry::NetworkContractRegistry;
use crate::domain::models::amount::{ether_to_wei, require_positive};
use crate::domain::models::NetworkName;
use crate::shared::errors::{ChainError, DomainError, UseCaseError};

/// Confirmed native transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtherTransfer {
    pub tx_hash: TxHash,
    pub from: Address,
    pub to: Address,
    /// Amount in ether, as requested
    pub amount: Decimal,
}

/// Use case for sending ether from the network signer
pub struct SendEtherUseCase {
    registry: Arc<NetworkContractRegistry>,
}

impl SendEtherUseCase {
    #[must_use]
    pub fn new(registry: Arc<NetworkContractRegistry>) -> Self {
        Self { registry }
    }

    /// Execute the use case and wait for confirmation
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` for a non-positive amount or a malformed
    /// recipient (both checked before any chain access), a configuration error
    /// if the network has no signer, and `ChainError::InsufficientBalance` when
    /// the signer cannot cover the amount.
    pub async fn execute(
        &self,
        network: NetworkName,
        recipient: &str,
        amount: Decimal,
    ) -> Result<EtherTransfer, UseCaseError> {
        let amount = require_positive(amount)?;
        let to = Address::from_str(recipient.trim())
            .map_err(|_| DomainError::InvalidAddress("Invalid recipient address".to_string()))?;
        let wei = ether_to_wei(amount)?;

        let signer = self.registry.provider_and_signer(network)?;
        let from = signer.signer_address();

        let balance = signer.native_balance(from).await?;
        if balance < wei {
            tracing::warn!(%network, %from, %balance, requested = %wei, "Signer balance too low");
            return Err(ChainError::InsufficientBalance.into());
        }

        tracing::info!(%network, %from, %to, %amount, "Sending ether");
        let outcome = signer.send_ether(to, wei).await?;
        tracing::info!(%network, tx_hash = %outcome.hash, "Ether transfer confirmed");

        Ok(EtherTransfer {
            tx_hash: outcome.hash,
            from,
            to,
            amount,
        })
    }
}
