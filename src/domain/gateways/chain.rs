//! Chain Gateways
//!
//! Abstract access to an EVM node. Readers need only an RPC URL; signers
//! additionally hold the network's signing key.

use std::sync::Arc;

use alloy_primitives::{Address, Bytes, TxHash, U256};
use async_trait::async_trait;

use crate::domain::models::network::NetworkName;
use crate::domain::models::transaction::{ChainTransaction, TransactionOutcome};
use crate::shared::errors::ChainError;
use crate::shared::SecretString;

/// Read-only chain access plus relaying of already-signed transactions
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Native currency balance in wei
    async fn native_balance(&self, account: Address) -> Result<U256, ChainError>;

    /// Latest block number
    async fn block_number(&self) -> Result<u64, ChainError>;

    /// Hashes of the transactions that emitted logs at `address` in the block range
    async fn log_transaction_hashes(
        &self,
        address: Address,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<TxHash>, ChainError>;

    /// Look up a transaction by hash
    async fn transaction(&self, hash: TxHash) -> Result<Option<ChainTransaction>, ChainError>;

    /// Timestamp (unix seconds) of a block
    async fn block_timestamp(&self, number: u64) -> Result<Option<u64>, ChainError>;

    /// `balanceOf(account)` on a token contract, in base units
    async fn token_balance(&self, token: Address, account: Address) -> Result<U256, ChainError>;

    /// `owner()` of a token contract
    async fn token_owner(&self, token: Address) -> Result<Address, ChainError>;

    /// Broadcast a raw signed transaction unmodified and wait for its receipt
    async fn send_raw_transaction(&self, raw: Bytes) -> Result<TransactionOutcome, ChainError>;
}

/// Chain access authorized by the network's signer
#[async_trait]
pub trait ChainSigner: ChainReader {
    /// Address of the signing account
    fn signer_address(&self) -> Address;

    /// Deploy the token contract and wait for confirmation
    async fn deploy_token(&self, bytecode: Bytes, initial_supply: U256) -> Result<Address, ChainError>;

    /// Owner push transfer via `secureTransfer(recipient, amount)`, waits for confirmation
    async fn secure_transfer(
        &self,
        token: Address,
        recipient: Address,
        amount: U256,
    ) -> Result<TransactionOutcome, ChainError>;

    /// Native currency transfer from the signer, waits for confirmation
    async fn send_ether(&self, recipient: Address, amount: U256) -> Result<TransactionOutcome, ChainError>;
}

/// Builds chain clients from static network settings
pub trait ChainConnector: Send + Sync {
    /// Connect a read-only client
    ///
    /// # Errors
    ///
    /// Returns `ChainError::InvalidUrl` if the RPC URL cannot be parsed.
    fn reader(&self, network: NetworkName, rpc_url: &str) -> Result<Arc<dyn ChainReader>, ChainError>;

    /// Connect a client that signs with `private_key`
    ///
    /// # Errors
    ///
    /// Returns `ChainError::InvalidUrl` or `ChainError::InvalidKey` for bad settings.
    fn signer(
        &self,
        network: NetworkName,
        rpc_url: &str,
        private_key: &SecretString,
    ) -> Result<Arc<dyn ChainSigner>, ChainError>;
}
