//! Relay Signed Transaction Use Case
//!
//! Broadcasts a transaction signed by the caller. The payload is forwarded
//! unmodified; only the node validates it.

use std::str::FromStr;
use std::sync::Arc;

use alloy_primitives::Bytes;

use crate::application::registry::NetworkContractRegistry;
use crate::domain::models::{NetworkName, TransactionOutcome};
use crate::shared::errors::UseCaseError;

/// Use case for relaying a pre-signed raw transaction
pub struct RelaySignedTransactionUseCase {
    registry: Arc<NetworkContractRegistry>,
}

impl RelaySignedTransactionUseCase {
    #[must_use]
    pub fn new(registry: Arc<NetworkContractRegistry>) -> Self {
        Self { registry }
    }

    /// Execute the use case and wait for the receipt
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if `signed_tx` is empty or not hex,
    /// otherwise the node's rejection verbatim.
    pub async fn execute(&self, network: NetworkName, signed_tx: &str) -> Result<TransactionOutcome, UseCaseError> {
        let signed_tx = signed_tx.trim();
        if signed_tx.is_empty() {
            return Err(UseCaseError::Validation(vec!["signedTx: Signed transaction required".to_string()]));
        }
        let raw = Bytes::from_str(signed_tx)
            .map_err(|_| UseCaseError::Validation(vec!["signedTx: Must be a hex-encoded transaction".to_string()]))?;

        let reader = self.registry.reader(network)?;
        let outcome = reader.send_raw_transaction(raw).await?;
        tracing::info!(%network, tx_hash = %outcome.hash, block = ?outcome.block_number, "Relayed transaction confirmed");
        Ok(outcome)
    }
}
