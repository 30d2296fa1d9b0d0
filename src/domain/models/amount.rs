//! Ether-denominated amounts
//!
//! Amounts arrive as decimal ether values and travel on-chain as wei.

use alloy_primitives::utils::{format_ether as format_wei_as_ether, parse_ether};
use alloy_primitives::U256;
use rust_decimal::Decimal;

use crate::shared::errors::DomainError;

const ETHER_DECIMALS: u32 = 18;

/// Reject zero and negative amounts
///
/// # Errors
///
/// Returns `DomainError::InvalidAmount` when `amount <= 0`.
pub fn require_positive(amount: Decimal) -> Result<Decimal, DomainError> {
    if amount <= Decimal::ZERO {
        return Err(DomainError::InvalidAmount("Amount must be a positive number".to_string()));
    }
    Ok(amount)
}

/// Convert a decimal ether amount to wei (18 decimals)
///
/// # Errors
///
/// Returns `DomainError::InvalidAmount` for negative values or more than 18 decimals.
pub fn ether_to_wei(amount: Decimal) -> Result<U256, DomainError> {
    if amount.is_sign_negative() {
        return Err(DomainError::InvalidAmount("Amount must be a positive number".to_string()));
    }
    let amount = amount.normalize();
    if amount.scale() > ETHER_DECIMALS {
        return Err(DomainError::InvalidAmount(format!(
            "Amount {amount} has more than {ETHER_DECIMALS} decimals"
        )));
    }
    let wei = parse_ether(&amount.to_string())
        .map_err(|e| DomainError::InvalidAmount(format!("Amount {amount} is not a valid ether value: {e}")))?;
    if wei.is_zero() && !amount.is_zero() {
        return Err(DomainError::InvalidAmount(format!("Amount {amount} is below one wei")));
    }
    Ok(wei)
}

/// Format wei as ether, trimming trailing zeros but keeping one decimal ("1.0")
#[must_use]
pub fn format_ether(wei: U256) -> String {
    let formatted = format_wei_as_ether(wei);
    match formatted.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                format!("{whole}.0")
            } else {
                format!("{whole}.{fraction}")
            }
        }
        None => format!("{formatted}.0"),
    }
}
