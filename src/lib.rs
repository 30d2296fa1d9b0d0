//! Chain Payments Gateway
//!
//! HTTP gateway in front of EVM networks and crypto payment processors:
//! a per-network token contract deployed on demand, native and token
//! transfers, relaying of client-signed transactions, and CoinGate and
//! NowPayments checkouts. Laid out along Clean/Hexagonal Architecture lines.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
