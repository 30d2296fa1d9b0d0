//! In-Memory Chain
//!
//! A deterministic stand-in for an EVM node. Every transaction is mined into
//! its own block immediately. Deployments can be delayed or made to fail,
//! and the chain counts connections and deployments so callers can assert on
//! how often the node was touched.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::{keccak256, Address, Bytes, TxHash, U256};
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::gateways::chain::{ChainConnector, ChainReader, ChainSigner};
use crate::domain::models::network::NetworkName;
use crate::domain::models::transaction::{ChainTransaction, TransactionOutcome};
use crate::shared::errors::ChainError;
use crate::shared::SecretString;

const GENESIS_TIMESTAMP: u64 = 1_700_000_000;
const BLOCK_TIME_SECS: u64 = 12;

#[derive(Debug, Default)]
struct TokenState {
    owner: Address,
    balances: HashMap<Address, U256>,
}

#[derive(Debug)]
struct LogEntry {
    block_number: u64,
    emitter: Address,
    tx_hash: TxHash,
}

#[derive(Debug, Default)]
struct ChainState {
    block_number: u64,
    native: HashMap<Address, U256>,
    tokens: HashMap<Address, TokenState>,
    transactions: HashMap<TxHash, ChainTransaction>,
    logs: Vec<LogEntry>,
    deployments: Vec<(NetworkName, Address)>,
    relayed: Vec<Bytes>,
}

impl ChainState {
    fn mine(&mut self, from: Address, to: Option<Address>, value: U256, emitter: Option<Address>) -> TransactionOutcome {
        self.block_number += 1;
        let block_number = self.block_number;
        let hash = keccak256(block_number.to_be_bytes());
        self.transactions.insert(
            hash,
            ChainTransaction {
                hash,
                from,
                to,
                value,
                block_number: Some(block_number),
            },
        );
        if let Some(emitter) = emitter {
            self.logs.push(LogEntry {
                block_number,
                emitter,
                tx_hash: hash,
            });
        }
        TransactionOutcome {
            hash,
            block_number: Some(block_number),
        }
    }

    fn token(&self, token: Address) -> Result<&TokenState, ChainError> {
        self.tokens
            .get(&token)
            .ok_or_else(|| ChainError::Rpc(format!("could not decode result data: no contract at {token}")))
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: Mutex<ChainState>,
    deploy_delay: Mutex<Duration>,
    fail_deployments: AtomicBool,
    connections: AtomicUsize,
}

/// Shared in-memory chain; cloning yields another handle to the same chain
#[derive(Debug, Clone, Default)]
pub struct InMemoryChain {
    inner: Arc<Inner>,
}

impl InMemoryChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold every deployment for `delay` before it is mined
    pub async fn set_deploy_delay(&self, delay: Duration) {
        *self.inner.deploy_delay.lock().await = delay;
    }

    /// Make deployments fail as if the signer could not pay for gas
    pub fn set_fail_deployments(&self, fail: bool) {
        self.inner.fail_deployments.store(fail, Ordering::SeqCst);
    }

    /// Credit native currency to an account
    pub async fn fund(&self, account: Address, wei: U256) {
        let mut state = self.inner.state.lock().await;
        *state.native.entry(account).or_default() += wei;
    }

    /// Record a plain transfer that emits a log at `emitter`, as a token transfer would
    pub async fn record_logged_transfer(&self, from: Address, emitter: Address, value: U256) -> TransactionOutcome {
        self.inner.state.lock().await.mine(from, Some(emitter), value, Some(emitter))
    }

    /// Emit one more log at `emitter` from an already mined transaction
    pub async fn record_extra_log(&self, tx_hash: TxHash, emitter: Address) {
        let mut state = self.inner.state.lock().await;
        let block_number = state
            .transactions
            .get(&tx_hash)
            .and_then(|tx| tx.block_number)
            .unwrap_or(state.block_number);
        state.logs.push(LogEntry {
            block_number,
            emitter,
            tx_hash,
        });
    }

    /// Total number of contract deployments on any network
    pub async fn deployment_count(&self) -> usize {
        self.inner.state.lock().await.deployments.len()
    }

    /// Number of contract deployments on one network
    pub async fn deployments_on(&self, network: NetworkName) -> usize {
        self.inner
            .state
            .lock()
            .await
            .deployments
            .iter()
            .filter(|(n, _)| *n == network)
            .count()
    }

    /// Raw transactions relayed so far, in order
    pub async fn relayed(&self) -> Vec<Bytes> {
        self.inner.state.lock().await.relayed.clone()
    }

    /// Number of readers and signers handed out
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.inner.connections.load(Ordering::SeqCst)
    }

    fn client(&self, network: NetworkName, signer: Address) -> InMemoryClient {
        self.inner.connections.fetch_add(1, Ordering::SeqCst);
        InMemoryClient {
            chain: self.clone(),
            network,
            signer,
        }
    }
}

impl ChainConnector for InMemoryChain {
    fn reader(&self, network: NetworkName, _rpc_url: &str) -> Result<Arc<dyn ChainReader>, ChainError> {
        Ok(Arc::new(self.client(network, Address::ZERO)))
    }

    fn signer(
        &self,
        network: NetworkName,
        _rpc_url: &str,
        private_key: &SecretString,
    ) -> Result<Arc<dyn ChainSigner>, ChainError> {
        let key: PrivateKeySigner = private_key
            .expose()
            .trim()
            .parse()
            .map_err(|e| ChainError::InvalidKey(format!("{network}: {e}")))?;
        Ok(Arc::new(self.client(network, key.address())))
    }
}

/// A connection to the in-memory chain
pub struct InMemoryClient {
    chain: InMemoryChain,
    network: NetworkName,
    signer: Address,
}

#[async_trait]
impl ChainReader for InMemoryClient {
    async fn native_balance(&self, account: Address) -> Result<U256, ChainError> {
        let state = self.chain.inner.state.lock().await;
        Ok(state.native.get(&account).copied().unwrap_or_default())
    }

    async fn block_number(&self) -> Result<u64, ChainError> {
        Ok(self.chain.inner.state.lock().await.block_number)
    }

    async fn log_transaction_hashes(
        &self,
        address: Address,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<TxHash>, ChainError> {
        let state = self.chain.inner.state.lock().await;
        Ok(state
            .logs
            .iter()
            .filter(|log| log.emitter == address && (from_block..=to_block).contains(&log.block_number))
            .map(|log| log.tx_hash)
            .collect())
    }

    async fn transaction(&self, hash: TxHash) -> Result<Option<ChainTransaction>, ChainError> {
        Ok(self.chain.inner.state.lock().await.transactions.get(&hash).cloned())
    }

    async fn block_timestamp(&self, number: u64) -> Result<Option<u64>, ChainError> {
        let state = self.chain.inner.state.lock().await;
        Ok((number <= state.block_number).then(|| GENESIS_TIMESTAMP + number * BLOCK_TIME_SECS))
    }

    async fn token_balance(&self, token: Address, account: Address) -> Result<U256, ChainError> {
        let state = self.chain.inner.state.lock().await;
        Ok(state.token(token)?.balances.get(&account).copied().unwrap_or_default())
    }

    async fn token_owner(&self, token: Address) -> Result<Address, ChainError> {
        let state = self.chain.inner.state.lock().await;
        Ok(state.token(token)?.owner)
    }

    async fn send_raw_transaction(&self, raw: Bytes) -> Result<TransactionOutcome, ChainError> {
        if raw.is_empty() {
            return Err(ChainError::Rpc("invalid raw transaction: empty payload".to_string()));
        }
        let mut state = self.chain.inner.state.lock().await;
        state.relayed.push(raw);
        Ok(state.mine(Address::ZERO, None, U256::ZERO, None))
    }
}

#[async_trait]
impl ChainSigner for InMemoryClient {
    fn signer_address(&self) -> Address {
        self.signer
    }

    async fn deploy_token(&self, bytecode: Bytes, initial_supply: U256) -> Result<Address, ChainError> {
        let delay = *self.chain.inner.deploy_delay.lock().await;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if self.chain.inner.fail_deployments.load(Ordering::SeqCst) {
            return Err(ChainError::Rpc(
                "insufficient funds for intrinsic transaction cost".to_string(),
            ));
        }
        if bytecode.is_empty() {
            return Err(ChainError::Rpc("contract creation code is empty".to_string()));
        }

        let mut state = self.chain.inner.state.lock().await;
        let seed = [
            self.signer.as_slice(),
            &(state.deployments.len() as u64).to_be_bytes(),
        ]
        .concat();
        let address = Address::from_word(keccak256(seed));

        let mut token = TokenState {
            owner: self.signer,
            ..TokenState::default()
        };
        token.balances.insert(self.signer, initial_supply);
        state.tokens.insert(address, token);
        state.deployments.push((self.network, address));
        state.mine(self.signer, None, U256::ZERO, Some(address));
        Ok(address)
    }

    async fn secure_transfer(
        &self,
        token: Address,
        recipient: Address,
        amount: U256,
    ) -> Result<TransactionOutcome, ChainError> {
        let mut state = self.chain.inner.state.lock().await;
        let contract = state
            .tokens
            .get_mut(&token)
            .ok_or_else(|| ChainError::Rpc(format!("no contract at {token}")))?;
        if contract.owner != self.signer {
            return Err(ChainError::Rpc("execution reverted: caller is not the owner".to_string()));
        }
        let owner_balance = contract.balances.entry(self.signer).or_default();
        if *owner_balance < amount {
            return Err(ChainError::Rpc("execution reverted: insufficient balance".to_string()));
        }
        *owner_balance -= amount;
        *contract.balances.entry(recipient).or_default() += amount;
        Ok(state.mine(self.signer, Some(token), U256::ZERO, Some(token)))
    }

    async fn send_ether(&self, recipient: Address, amount: U256) -> Result<TransactionOutcome, ChainError> {
        let mut state = self.chain.inner.state.lock().await;
        let balance = state.native.entry(self.signer).or_default();
        if *balance < amount {
            return Err(ChainError::Rpc("insufficient funds for transfer".to_string()));
        }
        *balance -= amount;
        *state.native.entry(recipient).or_default() += amount;
        Ok(state.mine(self.signer, Some(recipient), amount, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn signer(chain: &InMemoryChain) -> Arc<dyn ChainSigner> {
        chain
            .signer(NetworkName::Localhost, "memory://", &SecretString::new(DEV_KEY))
            .unwrap()
    }

    #[tokio::test]
    async fn test_deploy_mints_supply_to_signer() {
        let chain = InMemoryChain::new();
        let client = signer(&chain);

        let token = client
            .deploy_token(Bytes::from_static(&[0x60, 0x80]), U256::from(1000u64))
            .await
            .unwrap();

        assert_eq!(client.token_owner(token).await.unwrap(), client.signer_address());
        assert_eq!(
            client.token_balance(token, client.signer_address()).await.unwrap(),
            U256::from(1000u64)
        );
        assert_eq!(chain.deployments_on(NetworkName::Localhost).await, 1);
    }

    #[tokio::test]
    async fn test_secure_transfer_moves_tokens() {
        let chain = InMemoryChain::new();
        let client = signer(&chain);
        let token = client
            .deploy_token(Bytes::from_static(&[0x60]), U256::from(100u64))
            .await
            .unwrap();
        let recipient = Address::repeat_byte(0x11);

        let outcome = client.secure_transfer(token, recipient, U256::from(40u64)).await.unwrap();

        assert!(outcome.block_number.is_some());
        assert_eq!(client.token_balance(token, recipient).await.unwrap(), U256::from(40u64));
    }

    #[tokio::test]
    async fn test_send_ether_requires_funds() {
        let chain = InMemoryChain::new();
        let client = signer(&chain);
        let recipient = Address::repeat_byte(0x22);

        assert!(client.send_ether(recipient, U256::from(1u64)).await.is_err());

        chain.fund(client.signer_address(), U256::from(10u64)).await;
        client.send_ether(recipient, U256::from(4u64)).await.unwrap();
        assert_eq!(client.native_balance(recipient).await.unwrap(), U256::from(4u64));
    }

    #[tokio::test]
    async fn test_failed_deployments_leave_no_contract() {
        let chain = InMemoryChain::new();
        chain.set_fail_deployments(true);
        let client = signer(&chain);

        let result = client.deploy_token(Bytes::from_static(&[0x60]), U256::from(1u64)).await;

        assert!(result.is_err());
        assert_eq!(chain.deployment_count().await, 0);
    }
}
