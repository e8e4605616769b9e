//! Value Objects for the Teller Domain
//!
//! Immutable, validated domain primitives.
//! All value objects enforce invariants at construction time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::AccountId;

/// Domain errors for value object validation and registry lookups
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Amount must be positive
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Overdraft floor must be zero or negative
    #[error("Invalid overdraft floor: {0}")]
    InvalidOverdraftFloor(String),

    /// Account is not registered in the ledger
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

// =============================================================================
// Amount
// =============================================================================

/// Amount represents a strictly positive integer sum of money
///
/// # Invariants
/// - Must be > 0
///
/// Amounts share the `i64` range of account balances. Balance arithmetic
/// is unchecked, so callers must keep running sums within `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Amount(i64);

impl Amount {
    /// Create a new Amount with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidAmount` if value <= 0
    pub fn new(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::InvalidAmount("Amount must be positive".to_string()));
        }
        Ok(Self(value))
    }

    /// Get the underlying integer value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// OverdraftFloor
// =============================================================================

/// OverdraftFloor is the minimum (most negative) balance an account
/// may reach after a withdrawal
///
/// # Invariants
/// - Must be <= 0
/// - Fixed at account construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OverdraftFloor(i64);

impl OverdraftFloor {
    /// Create a new OverdraftFloor with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidOverdraftFloor` if value > 0
    pub fn new(value: i64) -> DomainResult<Self> {
        if value > 0 {
            return Err(DomainError::InvalidOverdraftFloor(
                "Overdraft floor must be zero or negative".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// A floor of zero: the account may never go negative
    pub fn zero() -> Self {
        Self(0)
    }

    /// Get the underlying integer value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for OverdraftFloor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_accepts_positive_values() {
        let amount = Amount::new(500).unwrap();
        assert_eq!(amount.as_i64(), 500);
        assert_eq!(amount.to_string(), "500");
    }

    #[test]
    fn amount_rejects_zero_and_negative() {
        assert!(matches!(Amount::new(0), Err(DomainError::InvalidAmount(_))));
        assert!(matches!(Amount::new(-1), Err(DomainError::InvalidAmount(_))));
    }

    #[test]
    fn overdraft_floor_accepts_zero_and_negative() {
        assert_eq!(OverdraftFloor::new(0).unwrap().as_i64(), 0);
        assert_eq!(OverdraftFloor::new(-100).unwrap().as_i64(), -100);
        assert_eq!(OverdraftFloor::zero().as_i64(), 0);
    }

    #[test]
    fn overdraft_floor_rejects_positive() {
        assert!(matches!(
            OverdraftFloor::new(1),
            Err(DomainError::InvalidOverdraftFloor(_))
        ));
    }

    #[test]
    fn amount_ordering_follows_value() {
        let small = Amount::new(10).unwrap();
        let large = Amount::new(20).unwrap();
        assert!(small < large);
    }
}
