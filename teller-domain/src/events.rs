//! Operation Records and the Observation Port
//!
//! Every deposit/withdraw attempt produces an immutable record that is
//! pushed to an observer. The record is for display and audit, never for
//! control flow.

use crate::entities::AccountId;
use crate::value_objects::{Amount, OverdraftFloor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The two mutating primitives an account exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Balance increased
    Deposit,
    /// Balance decreased (subject to the overdraft floor)
    Withdraw,
}

/// Immutable record of one deposit/withdraw attempt
///
/// Emitted on every attempt, including refused withdrawals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    /// Account the operation targeted
    pub account_id: AccountId,
    /// Which primitive was invoked
    pub kind: OperationKind,
    /// Requested amount
    pub amount: Amount,
    /// Balance after the attempt (unchanged on refusal)
    pub resulting_balance: i64,
    /// Whether the operation was accepted
    pub succeeded: bool,
    /// The account's overdraft floor at the time of the attempt
    pub overdraft_floor: OverdraftFloor,
    /// When the attempt occurred
    pub occurred_at: DateTime<Utc>,
}

/// Observation port for account operations
///
/// The account calls this on every deposit/withdraw attempt. Implementations
/// are unconstrained: a console line, a structured log, a UI update, a test
/// recorder.
pub trait AccountObserver {
    /// Receive one operation record
    fn on_operation(&mut self, record: OperationRecord);
}

/// Observer that drops every record
///
/// For callers that do not observe operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl AccountObserver for NullObserver {
    fn on_operation(&mut self, _record: OperationRecord) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Account;
    use crate::value_objects::OverdraftFloor;

    struct CountingObserver {
        seen: Vec<OperationRecord>,
    }

    impl AccountObserver for CountingObserver {
        fn on_operation(&mut self, record: OperationRecord) {
            self.seen.push(record);
        }
    }

    #[test]
    fn every_attempt_is_observed_including_refusals() {
        let floor = OverdraftFloor::new(-100).unwrap();
        let mut account = Account::new(0, floor);
        let mut observer = CountingObserver { seen: Vec::new() };

        account.deposit(Amount::new(50).unwrap(), &mut observer);
        account.withdraw(Amount::new(500).unwrap(), &mut observer);

        assert_eq!(observer.seen.len(), 2);

        let deposit = &observer.seen[0];
        assert_eq!(deposit.kind, OperationKind::Deposit);
        assert!(deposit.succeeded);
        assert_eq!(deposit.resulting_balance, 50);

        let refusal = &observer.seen[1];
        assert_eq!(refusal.kind, OperationKind::Withdraw);
        assert!(!refusal.succeeded);
        assert_eq!(refusal.resulting_balance, 50);
        assert_eq!(refusal.overdraft_floor, floor);
    }
}
