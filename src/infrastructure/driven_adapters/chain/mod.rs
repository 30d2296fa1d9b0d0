//! Chain Adapters
//!
//! Implementations of the chain gateways: alloy HTTP providers for real
//! nodes and, behind the `test-utils` feature, an in-memory chain for tests.

pub mod alloy;
pub mod contract;
#[cfg(any(test, feature = "test-utils"))]
pub mod in_memory;

pub use alloy::{AlloyChainClient, AlloyChainConnector};
#[cfg(any(test, feature = "test-utils"))]
pub use in_memory::{InMemoryChain, InMemoryClient};
