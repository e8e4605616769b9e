//! Teller Simulation
//!
//! Replays the three canonical transfer scenarios against a fresh
//! in-memory ledger: a successful transfer with reversal, a
//! short-circuited transfer, and the independent-composite hazard.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod scenarios;

pub use config::{Environment, SimConfig};
pub use error::{SimError, SimResult};
pub use scenarios::{run, ScenarioReport, SimReport};
