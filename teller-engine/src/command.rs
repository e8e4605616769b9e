//! The reversible command state machine.
//!
//! A command is a unit of work against one account, carrying enough state
//! to reverse itself: the target account handle, the action, the amount,
//! and the recorded outcome.
//!
//! # States
//!
//! ```text
//! Unexecuted → {Succeeded, Failed} → (optionally) Undone
//! ```

use serde::{Deserialize, Serialize};
use teller_domain::{Account, AccountId, AccountObserver, Amount, Ledger};
use tracing::debug;

use crate::error::{EngineError, EngineResult};

// =============================================================================
// Action and Outcome
// =============================================================================

/// The closed set of actions a command can apply to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Add the amount to the balance (total, never refused)
    Deposit,
    /// Subtract the amount, subject to the overdraft floor
    Withdraw,
}

impl Action {
    /// The action that reverses this one.
    pub fn inverse(self) -> Self {
        match self {
            Action::Deposit => Action::Withdraw,
            Action::Withdraw => Action::Deposit,
        }
    }
}

/// Recorded result of a command.
///
/// Governs whether `undo()` has any effect: only a `Succeeded` command is
/// ever reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Execution has not been invoked
    Unexecuted,
    /// The action was applied
    Succeeded,
    /// The action was refused, or the command was skipped by a dependent
    /// composite
    Failed,
    /// A succeeded command has been reversed
    Undone,
}

// =============================================================================
// Command
// =============================================================================

/// A reversible unit of work against one account.
///
/// The command does not own its account: it holds an [`AccountId`] resolved
/// against the [`Ledger`] at execution time, so the ledger must outlive
/// every command referencing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    account: AccountId,
    action: Action,
    amount: Amount,
    outcome: Outcome,
}

impl Command {
    /// Create a command in the `Unexecuted` state.
    pub fn new(account: AccountId, action: Action, amount: Amount) -> Self {
        Self {
            account,
            action,
            amount,
            outcome: Outcome::Unexecuted,
        }
    }

    /// Shorthand for a deposit command.
    pub fn deposit(account: AccountId, amount: Amount) -> Self {
        Self::new(account, Action::Deposit, amount)
    }

    /// Shorthand for a withdraw command.
    pub fn withdraw(account: AccountId, amount: Amount) -> Self {
        Self::new(account, Action::Withdraw, amount)
    }

    /// The account this command targets.
    pub fn account(&self) -> AccountId {
        self.account
    }

    /// The action this command applies.
    pub fn action(&self) -> Action {
        self.action
    }

    /// The amount this command moves.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// The recorded outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether the command executed and was accepted.
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, Outcome::Succeeded)
    }

    /// Force the outcome to `Failed` without executing.
    ///
    /// Used by the dependent composite for children skipped after an
    /// earlier failure, so their state machine reads "did not happen" and
    /// their `undo()` stays a no-op.
    pub(crate) fn mark_skipped(&mut self) {
        self.outcome = Outcome::Failed;
    }

    /// Execute the command against the ledger and record the outcome.
    ///
    /// Returns the success flag: a deposit always succeeds, a withdraw
    /// succeeds iff the account's overdraft check accepts it.
    ///
    /// # Limitation
    ///
    /// Calling `execute` a second time without an intervening `undo` is
    /// left unspecified: the command re-applies its action and overwrites
    /// the recorded outcome.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::AccountNotFound` if the target account is not
    /// registered in the ledger.
    pub fn execute(
        &mut self,
        ledger: &mut Ledger,
        observer: &mut dyn AccountObserver,
    ) -> EngineResult<bool> {
        let account = lookup(ledger, &self.account)?;
        let succeeded = match self.action {
            Action::Deposit => {
                account.deposit(self.amount, observer);
                true
            },
            Action::Withdraw => account.withdraw(self.amount, observer),
        };
        self.outcome = if succeeded { Outcome::Succeeded } else { Outcome::Failed };
        debug!(
            account_id = %self.account,
            action = ?self.action,
            amount = %self.amount,
            succeeded,
            "Command executed"
        );
        Ok(succeeded)
    }

    /// Reverse the command if, and only if, it succeeded.
    ///
    /// Applies the inverse primitive on the same account (a successful
    /// deposit is undone by a withdraw of the same amount, and vice versa)
    /// and marks the command `Undone`. For any other outcome this is a
    /// guaranteed no-op, never an error.
    ///
    /// # Known gap
    ///
    /// Undoing a deposit is a withdraw, which the overdraft floor can
    /// refuse. The refusal is not reported back: the command is still
    /// marked `Undone` and the caller cannot observe that the balance was
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::AccountNotFound` if the target account is not
    /// registered in the ledger.
    pub fn undo(
        &mut self,
        ledger: &mut Ledger,
        observer: &mut dyn AccountObserver,
    ) -> EngineResult<()> {
        if self.outcome != Outcome::Succeeded {
            return Ok(());
        }
        let account = lookup(ledger, &self.account)?;
        match self.action.inverse() {
            Action::Deposit => {
                account.deposit(self.amount, observer);
            },
            Action::Withdraw => {
                // May be refused by the overdraft floor; not propagated.
                account.withdraw(self.amount, observer);
            },
        }
        self.outcome = Outcome::Undone;
        debug!(
            account_id = %self.account,
            action = ?self.action,
            amount = %self.amount,
            "Command undone"
        );
        Ok(())
    }
}

/// Resolve an account handle against the ledger.
fn lookup<'a>(ledger: &'a mut Ledger, id: &AccountId) -> EngineResult<&'a mut Account> {
    ledger
        .account_mut(id)
        .map_err(|_| EngineError::AccountNotFound(*id))
}
