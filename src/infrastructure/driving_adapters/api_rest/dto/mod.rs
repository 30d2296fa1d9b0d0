//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API. Field names follow the JSON
//! the gateway has always served: camelCase for chain endpoints, the
//! provider's snake_case inside CoinGate orders.

pub mod balance;
pub mod coingate;
pub mod common;
pub mod contract;
pub mod nowpayments;
pub mod transfer;

pub use common::{AckResponse, NetworkQuery};
