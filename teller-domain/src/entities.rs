//! Domain Entities for Teller
//!
//! The ledger account entity and its mutation primitives.
//! Accounts are mutated only through deposit/withdraw; every attempt
//! notifies the observation port.

use crate::events::{AccountObserver, OperationKind, OperationRecord};
use crate::value_objects::{Amount, OverdraftFloor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an Account
pub type AccountId = Uuid;

// =============================================================================
// Account
// =============================================================================

/// Account is a simple ledger entity: a balance guarded by an overdraft floor
///
/// # Invariants
/// - After any accepted operation, `balance >= overdraft_floor`
/// - The overdraft floor is fixed at construction
///
/// Accounts assume a single calling actor. No locking is provided; callers
/// must serialize access if the same account participates in overlapping
/// command sequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier
    pub id: AccountId,
    /// Current balance (may be negative down to the overdraft floor)
    pub balance: i64,
    /// Minimum balance this account may reach
    pub overdraft_floor: OverdraftFloor,

    // Audit
    /// When the account was opened
    pub created_at: DateTime<Utc>,
    /// When the account was last mutated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Open a new account with an initial balance and a fixed overdraft floor
    pub fn new(initial_balance: i64, overdraft_floor: OverdraftFloor) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            balance: initial_balance,
            overdraft_floor,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether a withdrawal of `amount` would be accepted
    pub fn can_withdraw(&self, amount: Amount) -> bool {
        self.balance - amount.as_i64() >= self.overdraft_floor.as_i64()
    }

    /// Deposit an amount. Total: always succeeds and returns the new balance.
    ///
    /// Notifies the observer with a successful deposit record.
    pub fn deposit(&mut self, amount: Amount, observer: &mut dyn AccountObserver) -> i64 {
        self.balance += amount.as_i64();
        self.updated_at = Utc::now();
        observer.on_operation(OperationRecord {
            account_id: self.id,
            kind: OperationKind::Deposit,
            amount,
            resulting_balance: self.balance,
            succeeded: true,
            overdraft_floor: self.overdraft_floor,
            occurred_at: self.updated_at,
        });
        self.balance
    }

    /// Withdraw an amount if the resulting balance stays at or above the
    /// overdraft floor.
    ///
    /// Returns `true` and subtracts the amount on success. On refusal the
    /// balance is unchanged and `false` is returned. An overdraft refusal is
    /// an expected outcome, not an error.
    ///
    /// Notifies the observer either way, with the success flag set
    /// accordingly.
    pub fn withdraw(&mut self, amount: Amount, observer: &mut dyn AccountObserver) -> bool {
        let now = Utc::now();
        let succeeded = self.can_withdraw(amount);
        if succeeded {
            self.balance -= amount.as_i64();
            self.updated_at = now;
        }
        observer.on_operation(OperationRecord {
            account_id: self.id,
            kind: OperationKind::Withdraw,
            amount,
            resulting_balance: self.balance,
            succeeded,
            overdraft_floor: self.overdraft_floor,
            occurred_at: now,
        });
        succeeded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NullObserver;

    fn amount(value: i64) -> Amount {
        Amount::new(value).unwrap()
    }

    #[test]
    fn deposit_is_total_and_returns_new_balance() {
        let mut account = Account::new(0, OverdraftFloor::zero());
        let balance = account.deposit(amount(1000), &mut NullObserver);
        assert_eq!(balance, 1000);
        assert_eq!(account.balance, 1000);
    }

    #[test]
    fn withdraw_succeeds_within_the_floor() {
        let floor = OverdraftFloor::new(-100).unwrap();
        let mut account = Account::new(50, floor);
        assert!(account.withdraw(amount(150), &mut NullObserver));
        assert_eq!(account.balance, -100);
    }

    #[test]
    fn withdraw_exactly_to_the_floor_is_accepted() {
        let floor = OverdraftFloor::new(-100).unwrap();
        let mut account = Account::new(0, floor);
        assert!(account.withdraw(amount(100), &mut NullObserver));
        assert_eq!(account.balance, -100);
    }

    #[test]
    fn withdraw_past_the_floor_is_refused_and_balance_unchanged() {
        let floor = OverdraftFloor::new(-100).unwrap();
        let mut account = Account::new(1000, floor);
        assert!(!account.withdraw(amount(5000), &mut NullObserver));
        assert_eq!(account.balance, 1000);
    }

    #[test]
    fn withdraw_record_timestamp_matches_the_entity() {
        use crate::events::{AccountObserver, OperationRecord};

        struct LastRecord(Option<OperationRecord>);

        impl AccountObserver for LastRecord {
            fn on_operation(&mut self, record: OperationRecord) {
                self.0 = Some(record);
            }
        }

        let floor = OverdraftFloor::new(-100).unwrap();
        let mut account = Account::new(1000, floor);
        let mut observer = LastRecord(None);

        assert!(account.withdraw(amount(300), &mut observer));
        let record = observer.0.take().unwrap();
        assert_eq!(record.occurred_at, account.updated_at);

        // A refused withdrawal leaves updated_at alone.
        let before = account.updated_at;
        assert!(!account.withdraw(amount(5000), &mut observer));
        assert_eq!(account.updated_at, before);
    }

    #[test]
    fn can_withdraw_matches_withdraw_acceptance() {
        let floor = OverdraftFloor::new(-100).unwrap();
        let mut account = Account::new(0, floor);
        assert!(account.can_withdraw(amount(100)));
        assert!(!account.can_withdraw(amount(101)));
        assert!(account.withdraw(amount(100), &mut NullObserver));
        assert!(!account.withdraw(amount(1), &mut NullObserver));
    }
}
