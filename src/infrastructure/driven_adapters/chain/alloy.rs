//! Alloy Chain Adapter
//!
//! JSON-RPC access to EVM nodes over HTTP. A fresh provider is built for
//! every connection request; nothing is pooled here.

use std::fmt::Display;
use std::sync::Arc;

use alloy_consensus::Transaction as _;
use alloy_network::{EthereumWallet, TransactionBuilder, TransactionResponse};
use alloy_primitives::{Address, Bytes, TxHash, U256};
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_rpc_types_eth::{BlockNumberOrTag, Filter, TransactionReceipt, TransactionRequest};
use alloy_signer_local::PrivateKeySigner;
use alloy_sol_types::SolValue;
use async_trait::async_trait;
use reqwest::Url;

use super::contract::ITransferToken;
use crate::domain::gateways::chain::{ChainConnector, ChainReader, ChainSigner};
use crate::domain::models::network::NetworkName;
use crate::domain::models::transaction::{ChainTransaction, TransactionOutcome};
use crate::shared::errors::ChainError;
use crate::shared::SecretString;

fn rpc_error(err: impl Display) -> ChainError {
    ChainError::Rpc(err.to_string())
}

fn parse_rpc_url(rpc_url: &str) -> Result<Url, ChainError> {
    rpc_url
        .parse()
        .map_err(|e| ChainError::InvalidUrl(format!("{rpc_url}: {e}")))
}

fn confirmed(receipt: &TransactionReceipt) -> Result<TransactionOutcome, ChainError> {
    if !receipt.status() {
        return Err(ChainError::Reverted(receipt.transaction_hash.to_string()));
    }
    Ok(TransactionOutcome {
        hash: receipt.transaction_hash,
        block_number: receipt.block_number,
    })
}

/// Builds alloy HTTP providers for a network
#[derive(Debug, Default, Clone)]
pub struct AlloyChainConnector;

impl AlloyChainConnector {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ChainConnector for AlloyChainConnector {
    fn reader(&self, network: NetworkName, rpc_url: &str) -> Result<Arc<dyn ChainReader>, ChainError> {
        let url = parse_rpc_url(rpc_url)?;
        tracing::debug!(%network, rpc_url = %url, "Connecting read-only provider");
        let provider = ProviderBuilder::new().connect_http(url).erased();
        Ok(Arc::new(AlloyChainClient {
            network,
            provider,
            signer: None,
        }))
    }

    fn signer(
        &self,
        network: NetworkName,
        rpc_url: &str,
        private_key: &SecretString,
    ) -> Result<Arc<dyn ChainSigner>, ChainError> {
        let url = parse_rpc_url(rpc_url)?;
        let signer: PrivateKeySigner = private_key
            .expose()
            .trim()
            .parse()
            .map_err(|e| ChainError::InvalidKey(format!("{network}: {e}")))?;
        let address = signer.address();
        tracing::debug!(%network, rpc_url = %url, signer = %address, "Connecting signing provider");

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(url)
            .erased();
        Ok(Arc::new(AlloyChainClient {
            network,
            provider,
            signer: Some(address),
        }))
    }
}

/// Chain client backed by an alloy provider
pub struct AlloyChainClient {
    network: NetworkName,
    provider: DynProvider,
    signer: Option<Address>,
}

impl AlloyChainClient {
    fn token(&self, address: Address) -> ITransferToken::ITransferTokenInstance<DynProvider> {
        ITransferToken::new(address, self.provider.clone())
    }

    fn from_address(&self) -> Address {
        self.signer.unwrap_or_default()
    }
}

#[async_trait]
impl ChainReader for AlloyChainClient {
    async fn native_balance(&self, account: Address) -> Result<U256, ChainError> {
        self.provider.get_balance(account).await.map_err(rpc_error)
    }

    async fn block_number(&self) -> Result<u64, ChainError> {
        self.provider.get_block_number().await.map_err(rpc_error)
    }

    async fn log_transaction_hashes(
        &self,
        address: Address,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<TxHash>, ChainError> {
        let filter = Filter::new().address(address).from_block(from_block).to_block(to_block);
        let logs = self.provider.get_logs(&filter).await.map_err(rpc_error)?;
        Ok(logs.into_iter().filter_map(|log| log.transaction_hash).collect())
    }

    async fn transaction(&self, hash: TxHash) -> Result<Option<ChainTransaction>, ChainError> {
        let tx = self
            .provider
            .get_transaction_by_hash(hash)
            .await
            .map_err(rpc_error)?;
        Ok(tx.map(|tx| ChainTransaction {
            hash: tx.tx_hash(),
            from: TransactionResponse::from(&tx),
            to: tx.to(),
            value: tx.value(),
            block_number: tx.block_number,
        }))
    }

    async fn block_timestamp(&self, number: u64) -> Result<Option<u64>, ChainError> {
        let block = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Number(number))
            .await
            .map_err(rpc_error)?;
        Ok(block.map(|block| block.header.timestamp))
    }

    async fn token_balance(&self, token: Address, account: Address) -> Result<U256, ChainError> {
        self.token(token).balanceOf(account).call().await.map_err(rpc_error)
    }

    async fn token_owner(&self, token: Address) -> Result<Address, ChainError> {
        self.token(token).owner().call().await.map_err(rpc_error)
    }

    async fn send_raw_transaction(&self, raw: Bytes) -> Result<TransactionOutcome, ChainError> {
        tracing::info!(network = %self.network, bytes = raw.len(), "Relaying signed transaction");
        let pending = self.provider.send_raw_transaction(&raw).await.map_err(rpc_error)?;
        let receipt = pending.get_receipt().await.map_err(rpc_error)?;
        confirmed(&receipt)
    }
}

#[async_trait]
impl ChainSigner for AlloyChainClient {
    fn signer_address(&self) -> Address {
        self.from_address()
    }

    async fn deploy_token(&self, bytecode: Bytes, initial_supply: U256) -> Result<Address, ChainError> {
        // Creation code followed by the ABI-encoded constructor argument
        let mut code = bytecode.to_vec();
        code.extend_from_slice(&initial_supply.abi_encode());

        let request = TransactionRequest::default()
            .with_from(self.from_address())
            .with_deploy_code(code);
        let pending = self.provider.send_transaction(request).await.map_err(rpc_error)?;
        tracing::debug!(network = %self.network, tx_hash = %pending.tx_hash(), "Deployment submitted");

        let receipt = pending.get_receipt().await.map_err(rpc_error)?;
        confirmed(&receipt)?;
        receipt.contract_address.ok_or(ChainError::MissingContractAddress)
    }

    async fn secure_transfer(
        &self,
        token: Address,
        recipient: Address,
        amount: U256,
    ) -> Result<TransactionOutcome, ChainError> {
        let pending = self
            .token(token)
            .secureTransfer(recipient, amount)
            .from(self.from_address())
            .send()
            .await
            .map_err(rpc_error)?;
        let receipt = pending.get_receipt().await.map_err(rpc_error)?;
        confirmed(&receipt)
    }

    async fn send_ether(&self, recipient: Address, amount: U256) -> Result<TransactionOutcome, ChainError> {
        let request = TransactionRequest::default()
            .with_from(self.from_address())
            .with_to(recipient)
            .with_value(amount);
        let pending = self.provider.send_transaction(request).await.map_err(rpc_error)?;
        let receipt = pending.get_receipt().await.map_err(rpc_error)?;
        confirmed(&receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known Hardhat development key #0
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_signer_address_is_derived_from_key() {
        let connector = AlloyChainConnector::new();
        let signer = connector
            .signer(NetworkName::Localhost, "http://127.0.0.1:8545", &SecretString::new(DEV_KEY))
            .unwrap();
        assert_eq!(
            signer.signer_address().to_string(),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
    }

    #[test]
    fn test_invalid_key_is_rejected() {
        let connector = AlloyChainConnector::new();
        let result = connector.signer(
            NetworkName::Sepolia,
            "http://127.0.0.1:8545",
            &SecretString::new("not-a-key"),
        );
        assert!(matches!(result, Err(ChainError::InvalidKey(_))));
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let connector = AlloyChainConnector::new();
        let result = connector.reader(NetworkName::Holesky, "not a url");
        assert!(matches!(result, Err(ChainError::InvalidUrl(_))));
    }
}
