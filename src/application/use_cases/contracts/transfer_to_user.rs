//! Transfer To User Use Case
//!
//! Owner push transfer of the network's token, used for initial distribution.

use std::sync::Arc;

use alloy_primitives::{Address, TxHash};
use rust_decimal::Decimal;

use crate::application::registry::NetworkContractRegistry;
use crate::domain::models::amount::{ether_to_wei, require_positive};
use crate::domain::models::NetworkName;
use crate::shared::errors::UseCaseError;

/// Confirmed token transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTransfer {
    pub tx_hash: TxHash,
    /// Amount in whole tokens, as requested
    pub amount: Decimal,
}

/// Use case for `secureTransfer` from the contract owner to a user
pub struct TransferToUserUseCase {
    registry: Arc<NetworkContractRegistry>,
}

impl TransferToUserUseCase {
    #[must_use]
    pub fn new(registry: Arc<NetworkContractRegistry>) -> Self {
        Self { registry }
    }

    /// Execute the use case and wait for confirmation
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` for a non-positive amount, before any chain
    /// access; otherwise registry and chain errors.
    pub async fn execute(
        &self,
        network: NetworkName,
        recipient: Address,
        amount: Decimal,
    ) -> Result<TokenTransfer, UseCaseError> {
        let units = ether_to_wei(require_positive(amount)?)?;
        let record = self.registry.contract_instance(network).await?;

        tracing::info!(%network, %recipient, %amount, "Transferring tokens to user");
        let outcome = record.contract().secure_transfer(recipient, units).await?;
        tracing::info!(%network, tx_hash = %outcome.hash, "Token transfer confirmed");

        Ok(TokenTransfer {
            tx_hash: outcome.hash,
            amount,
        })
    }
}
