//! Engine layer error types.
//!
//! Overdraft refusals and skipped composite children are outcomes, not
//! errors. The only engine-level failure is a command addressing an account
//! the ledger does not hold.

use teller_domain::{AccountId, DomainError};
use thiserror::Error;

/// Errors that can occur during command execution or reversal.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Domain error
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Command targets an account that is not registered in the ledger
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
