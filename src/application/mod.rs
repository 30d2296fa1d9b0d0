//! Application Layer
//!
//! Contains the network contract registry and the use cases that orchestrate
//! business logic. Use cases depend on domain gateways (abstractions), not
//! concrete implementations.

pub mod registry;
pub mod use_cases;

pub use registry::NetworkContractRegistry;
