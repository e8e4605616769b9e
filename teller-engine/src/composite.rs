//! Ordered command groups with two composition policies.
//!
//! A composite owns its command sequence: insertion order is execution
//! order, reversal order is the exact inverse. It never reorders children
//! and never touches an account except through a child's own
//! execute/undo.

use serde::{Deserialize, Serialize};
use teller_domain::{AccountObserver, Ledger};
use tracing::debug;

use crate::command::Command;
use crate::error::EngineResult;

// =============================================================================
// Policy
// =============================================================================

/// How a composite treats a child failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Every child executes regardless of prior outcomes.
    ///
    /// Unsafe for semantically linked steps: a later step can succeed even
    /// though an earlier, logically prerequisite step failed. Use
    /// [`Policy::Dependent`] for linked steps.
    Independent,
    /// The first failing child halts the pass; every later child is
    /// skipped and forced `Failed` without executing.
    Dependent,
}

// =============================================================================
// Composite
// =============================================================================

/// An ordered group of commands executed under one composition policy.
///
/// The composite carries no aggregate success state of its own; outcomes
/// live on the children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composite {
    policy: Policy,
    commands: Vec<Command>,
}

impl Composite {
    /// Create a composite with an explicit policy.
    pub fn new(policy: Policy, commands: Vec<Command>) -> Self {
        Self { policy, commands }
    }

    /// Create an always-run composite.
    pub fn independent(commands: Vec<Command>) -> Self {
        Self::new(Policy::Independent, commands)
    }

    /// Create a short-circuiting composite.
    pub fn dependent(commands: Vec<Command>) -> Self {
        Self::new(Policy::Dependent, commands)
    }

    /// Append a command at the end of the execution order.
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// The composition policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Read-only view of the children, in execution order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the composite has no children.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Execute the children in insertion order under the policy.
    ///
    /// Independent: every child runs. Dependent: a `continuing` flag,
    /// reconstructed on each pass, starts `true` and adopts each child's
    /// success flag; once it drops to `false` the remaining children are
    /// not executed and are forced `Failed`. There is no retry and no
    /// partial continuation.
    ///
    /// # Errors
    ///
    /// Propagates `EngineError::AccountNotFound` from a child; children
    /// after the failing lookup are left untouched.
    pub fn execute(
        &mut self,
        ledger: &mut Ledger,
        observer: &mut dyn AccountObserver,
    ) -> EngineResult<()> {
        match self.policy {
            Policy::Independent => {
                for command in &mut self.commands {
                    command.execute(ledger, observer)?;
                }
            },
            Policy::Dependent => {
                let mut continuing = true;
                for command in &mut self.commands {
                    if continuing {
                        continuing = command.execute(ledger, observer)?;
                        if !continuing {
                            debug!(
                                account_id = %command.account(),
                                action = ?command.action(),
                                "Dependent composite halted"
                            );
                        }
                    } else {
                        command.mark_skipped();
                    }
                }
            },
        }
        Ok(())
    }

    /// Undo the children in exact reverse insertion order.
    ///
    /// Shared by both policies: a child whose outcome is not `Succeeded`
    /// no-ops, which makes reversal of a short-circuited pass correct
    /// without extra bookkeeping.
    ///
    /// # Errors
    ///
    /// Propagates `EngineError::AccountNotFound` from a child.
    pub fn undo(
        &mut self,
        ledger: &mut Ledger,
        observer: &mut dyn AccountObserver,
    ) -> EngineResult<()> {
        for command in self.commands.iter_mut().rev() {
            command.undo(ledger, observer)?;
        }
        Ok(())
    }
}
