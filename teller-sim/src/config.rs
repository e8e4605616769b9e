//! Simulation configuration.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::error::{SimError, SimResult};
use std::env;
use std::fmt;

// =============================================================================
// Configuration
// =============================================================================

/// Simulation configuration.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Initial deposit into the source account
    pub initial_deposit: i64,
    /// Amount for the successful transfer scenario
    pub transfer_amount: i64,
    /// Amount for the failing transfer scenario
    pub failing_amount: i64,
    /// Overdraft floor of the source account (zero or negative)
    pub overdraft_floor: i64,
    /// Environment (test, development, production)
    pub environment: Environment,
}

/// Environment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Test environment
    Test,
    /// Development environment
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Test => write!(f, "test"),
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            initial_deposit: 1000,
            transfer_amount: 500,
            failing_amount: 5000,
            overdraft_floor: -100,
            environment: Environment::Development,
        }
    }
}

impl SimConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TELLER_ENV`: Environment (test, development, production)
    /// - `TELLER_INITIAL_DEPOSIT`: Source funding (default: 1000)
    /// - `TELLER_TRANSFER_AMOUNT`: Successful transfer (default: 500)
    /// - `TELLER_FAILING_AMOUNT`: Failing transfer (default: 5000)
    /// - `TELLER_OVERDRAFT_FLOOR`: Source floor (default: -100)
    ///
    /// # Errors
    ///
    /// Returns `SimError::Config` on unparseable values or a positive
    /// overdraft floor.
    pub fn from_env() -> SimResult<Self> {
        let defaults = Self::default();

        let environment = match env::var("TELLER_ENV").as_deref() {
            Ok("test") => Environment::Test,
            Ok("production") => Environment::Production,
            Ok("development") | Err(_) => Environment::Development,
            Ok(other) => {
                return Err(SimError::Config(format!("Unknown TELLER_ENV: {}", other)));
            },
        };

        let config = Self {
            initial_deposit: parse_var("TELLER_INITIAL_DEPOSIT", defaults.initial_deposit)?,
            transfer_amount: parse_var("TELLER_TRANSFER_AMOUNT", defaults.transfer_amount)?,
            failing_amount: parse_var("TELLER_FAILING_AMOUNT", defaults.failing_amount)?,
            overdraft_floor: parse_var("TELLER_OVERDRAFT_FLOOR", defaults.overdraft_floor)?,
            environment,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> SimResult<()> {
        if self.overdraft_floor > 0 {
            return Err(SimError::Config(
                "TELLER_OVERDRAFT_FLOOR must be zero or negative".to_string(),
            ));
        }
        for (name, value) in [
            ("TELLER_INITIAL_DEPOSIT", self.initial_deposit),
            ("TELLER_TRANSFER_AMOUNT", self.transfer_amount),
            ("TELLER_FAILING_AMOUNT", self.failing_amount),
        ] {
            if value <= 0 {
                return Err(SimError::Config(format!("{} must be positive", name)));
            }
        }
        Ok(())
    }
}

fn parse_var(name: &str, default: i64) -> SimResult<i64> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| SimError::Config(format!("Cannot parse {}: {}", name, raw))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_canonical_scenarios() {
        let config = SimConfig::default();
        assert_eq!(config.initial_deposit, 1000);
        assert_eq!(config.transfer_amount, 500);
        assert_eq!(config.failing_amount, 5000);
        assert_eq!(config.overdraft_floor, -100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn positive_floor_is_rejected() {
        let config = SimConfig {
            overdraft_floor: 10,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(SimError::Config(_))));
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let config = SimConfig {
            transfer_amount: 0,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(SimError::Config(_))));
    }
}
