//! Two-step money transfer.
//!
//! A dependent composite fixed to exactly two children: withdraw from the
//! source, then deposit into the destination. Atomic-looking by
//! construction, not by locking: the deposit never executes unless the
//! withdrawal succeeded.

use serde::{Deserialize, Serialize};
use teller_domain::{AccountId, AccountObserver, Amount, Ledger};
use tracing::info;

use crate::command::Command;
use crate::composite::Composite;
use crate::error::EngineResult;

/// A reversible transfer between two accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    source: AccountId,
    destination: AccountId,
    amount: Amount,
    steps: Composite,
}

impl Transfer {
    /// Build a transfer of `amount` from `source` to `destination`.
    pub fn new(source: AccountId, destination: AccountId, amount: Amount) -> Self {
        let steps = Composite::dependent(vec![
            Command::withdraw(source, amount),
            Command::deposit(destination, amount),
        ]);
        Self {
            source,
            destination,
            amount,
            steps,
        }
    }

    /// The account money leaves.
    pub fn source(&self) -> AccountId {
        self.source
    }

    /// The account money enters.
    pub fn destination(&self) -> AccountId {
        self.destination
    }

    /// The transferred amount.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// The withdrawal step (child 1).
    pub fn withdrawal(&self) -> &Command {
        &self.steps.commands()[0]
    }

    /// The deposit step (child 2).
    pub fn deposit(&self) -> &Command {
        &self.steps.commands()[1]
    }

    /// Whether both steps succeeded.
    pub fn succeeded(&self) -> bool {
        self.withdrawal().succeeded() && self.deposit().succeeded()
    }

    /// Execute the transfer: withdraw, then deposit only if the withdrawal
    /// was accepted.
    ///
    /// # Errors
    ///
    /// Propagates `EngineError::AccountNotFound` from either step.
    pub fn execute(
        &mut self,
        ledger: &mut Ledger,
        observer: &mut dyn AccountObserver,
    ) -> EngineResult<()> {
        self.steps.execute(ledger, observer)?;
        info!(
            source = %self.source,
            destination = %self.destination,
            amount = %self.amount,
            succeeded = self.succeeded(),
            "Transfer executed"
        );
        Ok(())
    }

    /// Reverse the transfer: deposit first, then withdrawal, each a no-op
    /// unless that step succeeded.
    ///
    /// # Errors
    ///
    /// Propagates `EngineError::AccountNotFound` from either step.
    pub fn undo(
        &mut self,
        ledger: &mut Ledger,
        observer: &mut dyn AccountObserver,
    ) -> EngineResult<()> {
        self.steps.undo(ledger, observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Outcome;
    use teller_domain::NullObserver;
    use teller_testkit::funded_pair;

    fn amount(value: i64) -> Amount {
        Amount::new(value).unwrap()
    }

    #[test]
    fn transfer_is_built_as_withdraw_then_deposit() {
        let (_ledger, source, destination) = funded_pair(1000, -100);

        let transfer = Transfer::new(source, destination, amount(500));
        assert_eq!(transfer.withdrawal().account(), source);
        assert_eq!(transfer.deposit().account(), destination);
        assert_eq!(transfer.withdrawal().outcome(), Outcome::Unexecuted);
        assert_eq!(transfer.deposit().outcome(), Outcome::Unexecuted);
    }

    #[test]
    fn successful_transfer_moves_the_amount() {
        let (mut ledger, source, destination) = funded_pair(1000, -100);

        let mut transfer = Transfer::new(source, destination, amount(500));
        transfer.execute(&mut ledger, &mut NullObserver).unwrap();

        assert!(transfer.succeeded());
        assert_eq!(ledger.balance_of(&source), Some(500));
        assert_eq!(ledger.balance_of(&destination), Some(500));
    }

    #[test]
    fn failing_transfer_leaves_both_accounts_untouched() {
        let (mut ledger, source, destination) = funded_pair(1000, -100);

        let mut transfer = Transfer::new(source, destination, amount(5000));
        transfer.execute(&mut ledger, &mut NullObserver).unwrap();

        assert!(!transfer.succeeded());
        assert_eq!(transfer.withdrawal().outcome(), Outcome::Failed);
        assert_eq!(transfer.deposit().outcome(), Outcome::Failed);
        assert_eq!(ledger.balance_of(&source), Some(1000));
        assert_eq!(ledger.balance_of(&destination), Some(0));
    }

    #[test]
    fn undo_restores_both_balances() {
        let (mut ledger, source, destination) = funded_pair(1000, -100);

        let mut transfer = Transfer::new(source, destination, amount(500));
        transfer.execute(&mut ledger, &mut NullObserver).unwrap();
        transfer.undo(&mut ledger, &mut NullObserver).unwrap();

        assert_eq!(ledger.balance_of(&source), Some(1000));
        assert_eq!(ledger.balance_of(&destination), Some(0));
    }
}
