//! Test helpers for Teller.
//!
//! Provides a recording observer and ledger seeding helpers shared by
//! engine and scenario tests.

mod helpers;

pub use helpers::{funded_pair, ledger_with_account};

use teller_domain::{AccountObserver, OperationKind, OperationRecord};

/// Observer that records every operation it sees.
///
/// Useful for asserting that skipped composite children produced zero side
/// effects, and that refused withdrawals were still reported.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    records: Vec<OperationRecord>,
}

impl RecordingObserver {
    /// Create an empty recording observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// All records seen so far, in arrival order.
    pub fn records(&self) -> &[OperationRecord] {
        &self.records
    }

    /// Number of records seen.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records of a given kind.
    pub fn count_of(&self, kind: OperationKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }

    /// Number of refused operations.
    pub fn refusal_count(&self) -> usize {
        self.records.iter().filter(|r| !r.succeeded).count()
    }

    /// Drop all recorded operations (useful between test phases).
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl AccountObserver for RecordingObserver {
    fn on_operation(&mut self, record: OperationRecord) {
        self.records.push(record);
    }
}
