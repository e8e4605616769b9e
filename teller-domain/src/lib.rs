//! Teller Domain Layer
//!
//! Pure domain logic with zero I/O dependencies.
//! Contains the ledger account entity, validated value objects,
//! the account registry, and the observation port.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod entities;
pub mod events;
pub mod ledger;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{Account, AccountId};
pub use events::{AccountObserver, NullObserver, OperationKind, OperationRecord};
pub use ledger::Ledger;
pub use value_objects::{Amount, DomainError, DomainResult, OverdraftFloor};
