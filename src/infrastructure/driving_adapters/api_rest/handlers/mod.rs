//! HTTP Handlers
//!
//! Axum handlers grouped by resource. Each module exposes a `router()`
//! mounted under `/api`.

pub mod balances;
pub mod coingate;
pub mod contracts;
pub mod eth_transfer;
pub mod health;
pub mod nowpayments;
