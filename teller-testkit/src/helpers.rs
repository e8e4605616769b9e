//! Ledger seeding helpers.

use teller_domain::{AccountId, Ledger, OverdraftFloor};

/// Seed a ledger with a single account.
///
/// Returns (ledger, account_id).
pub fn ledger_with_account(balance: i64, floor: i64) -> (Ledger, AccountId) {
    let mut ledger = Ledger::new();
    let floor = OverdraftFloor::new(floor).expect("test floor must be <= 0");
    let id = ledger.open_account(balance, floor);
    (ledger, id)
}

/// Seed a ledger with a funded source account and an empty destination.
///
/// The source gets `balance` and `floor`; the destination starts at zero
/// with no overdraft. Returns (ledger, source_id, destination_id).
pub fn funded_pair(balance: i64, floor: i64) -> (Ledger, AccountId, AccountId) {
    let mut ledger = Ledger::new();
    let floor = OverdraftFloor::new(floor).expect("test floor must be <= 0");
    let source = ledger.open_account(balance, floor);
    let destination = ledger.open_account(0, OverdraftFloor::zero());
    (ledger, source, destination)
}
