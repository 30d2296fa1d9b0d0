//! Token Contract Models
//!
//! Records of token contracts deployed by this process. Nothing here is
//! persisted; the chain is the only durable record.

use std::fmt;
use std::sync::Arc;

use alloy_primitives::{Address, Bytes, U256};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::domain::gateways::chain::ChainSigner;
use crate::domain::models::network::NetworkName;
use crate::domain::models::transaction::TransactionOutcome;
use crate::shared::errors::ChainError;

/// Compiled token contract: interface description and creation bytecode
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub abi: Value,
    pub bytecode: Bytes,
}

/// Live handle to a token contract, bound to its address and a network signer
#[derive(Clone)]
pub struct TokenContract {
    address: Address,
    signer: Arc<dyn ChainSigner>,
}

impl TokenContract {
    #[must_use]
    pub fn new(address: Address, signer: Arc<dyn ChainSigner>) -> Self {
        Self { address, signer }
    }

    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    /// Token balance of `account`, in base units
    ///
    /// # Errors
    ///
    /// Returns the chain error verbatim.
    pub async fn balance_of(&self, account: Address) -> Result<U256, ChainError> {
        self.signer.token_balance(self.address, account).await
    }

    /// Current contract owner
    ///
    /// # Errors
    ///
    /// Returns the chain error verbatim.
    pub async fn owner(&self) -> Result<Address, ChainError> {
        self.signer.token_owner(self.address).await
    }

    /// Push `amount` tokens from the owner to `recipient`
    ///
    /// # Errors
    ///
    /// Returns the chain error verbatim.
    pub async fn secure_transfer(&self, recipient: Address, amount: U256) -> Result<TransactionOutcome, ChainError> {
        self.signer.secure_transfer(self.address, recipient, amount).await
    }
}

impl fmt::Debug for TokenContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenContract")
            .field("address", &self.address)
            .field("signer", &self.signer.signer_address())
            .finish()
    }
}

/// The registry's contract for one network
#[derive(Debug, Clone)]
pub struct ContractRecord {
    network: NetworkName,
    contract: TokenContract,
}

impl ContractRecord {
    #[must_use]
    pub fn new(network: NetworkName, contract: TokenContract) -> Self {
        Self { network, contract }
    }

    #[must_use]
    pub fn network(&self) -> NetworkName {
        self.network
    }

    #[must_use]
    pub fn address(&self) -> Address {
        self.contract.address()
    }

    #[must_use]
    pub fn contract(&self) -> &TokenContract {
        &self.contract
    }
}

/// A token deployed explicitly through the deploy endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedTokenRecord {
    pub address: Address,
    pub name: String,
    pub symbol: String,
    /// Initial supply in whole tokens, as requested
    pub initial_supply: Decimal,
    pub network: NetworkName,
}
