//! Simulation error types.

use teller_domain::DomainError;
use teller_engine::EngineError;
use thiserror::Error;

/// Simulation-level errors.
#[derive(Debug, Error)]
pub enum SimError {
    /// Domain error
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Engine error
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
