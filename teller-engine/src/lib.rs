//! Teller Engine Layer
//!
//! Reversible command execution against the ledger: the command state
//! machine, ordered composites with independent/dependent composition
//! policies, and the two-step money transfer.
//!
//! Deterministic and fully synchronous. Execution order equals insertion
//! order; reversal order is the exact inverse.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod composite;
pub mod error;
pub mod observer;
pub mod transfer;

pub use command::{Action, Command, Outcome};
pub use composite::{Composite, Policy};
pub use error::{EngineError, EngineResult};
pub use observer::TracingObserver;
pub use transfer::Transfer;
