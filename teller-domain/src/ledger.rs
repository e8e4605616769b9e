//! In-memory account registry
//!
//! Commands reference accounts through a non-owning `AccountId` handle keyed
//! into this registry, so the ledger outlives every command referencing it.
//! Single-actor: no locking is provided.

use crate::entities::{Account, AccountId};
use crate::value_objects::{DomainError, DomainResult, OverdraftFloor};
use std::collections::HashMap;

/// Registry of accounts keyed by id
///
/// Accounts are mutated only through their own deposit/withdraw primitives,
/// reached via [`Ledger::account_mut`].
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<AccountId, Account>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    /// Open a new account and return its id
    pub fn open_account(&mut self, initial_balance: i64, overdraft_floor: OverdraftFloor) -> AccountId {
        let account = Account::new(initial_balance, overdraft_floor);
        let id = account.id;
        self.accounts.insert(id, account);
        id
    }

    /// Register a pre-built account
    pub fn insert(&mut self, account: Account) -> AccountId {
        let id = account.id;
        self.accounts.insert(id, account);
        id
    }

    /// Look up an account by id
    pub fn account(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Mutable access to an account, for command execution
    ///
    /// # Errors
    /// Returns `DomainError::AccountNotFound` if the id is not registered
    pub fn account_mut(&mut self, id: &AccountId) -> DomainResult<&mut Account> {
        self.accounts
            .get_mut(id)
            .ok_or(DomainError::AccountNotFound(*id))
    }

    /// Current balance of an account, if registered
    pub fn balance_of(&self, id: &AccountId) -> Option<i64> {
        self.accounts.get(id).map(|account| account.balance)
    }

    /// Number of registered accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the ledger has no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
