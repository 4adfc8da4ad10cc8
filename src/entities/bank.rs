// 🏦 Bank Entity - the registry that owns every Account
//
// "One identifier, one account"
//
// Rules:
// - Accounts are keyed by identifier (exact, case-sensitive match)
// - Creating an existing identifier is an error, never an overwrite
// - Accounts are never removed

use std::collections::hash_map::{Entry, HashMap};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::account::Account;
use crate::error::{BankError, Result};

// ============================================================================
// BANK REGISTRY
// ============================================================================

/// Registry of all accounts
///
/// Owns its map outright. Callers get borrowed references; a mutation made
/// through `get_account_mut` is a mutation of the stored account.
#[derive(Debug, Default)]
pub struct Bank {
    accounts: HashMap<String, Account>,
}

impl Bank {
    /// Create new empty registry
    pub fn new() -> Self {
        Bank {
            accounts: HashMap::new(),
        }
    }

    /// Open a zero-balance account under `identifier`
    ///
    /// Fails with `AlreadyExists` if the identifier is taken; the existing
    /// account is left untouched.
    pub fn create_account(&mut self, identifier: impl Into<String>) -> Result<&mut Account> {
        match self.accounts.entry(identifier.into()) {
            Entry::Occupied(entry) => {
                warn!(identifier = %entry.key(), "account creation rejected: already exists");
                Err(BankError::AlreadyExists(entry.key().clone()))
            }
            Entry::Vacant(entry) => {
                debug!(identifier = %entry.key(), "account created");
                let account = Account::open(entry.key().clone());
                Ok(entry.insert(account))
            }
        }
    }

    /// Look up an account for reading
    pub fn get_account(&self, identifier: &str) -> Result<&Account> {
        self.accounts
            .get(identifier)
            .ok_or_else(|| BankError::NotFound(identifier.to_string()))
    }

    /// Look up an account for deposit / withdraw
    pub fn get_account_mut(&mut self, identifier: &str) -> Result<&mut Account> {
        self.accounts
            .get_mut(identifier)
            .ok_or_else(|| BankError::NotFound(identifier.to_string()))
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.accounts.contains_key(identifier)
    }

    /// Number of accounts held
    pub fn count(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// All accounts, sorted by identifier
    pub fn all_accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.identifier().cmp(b.identifier()));
        accounts
    }

    /// Sum of every balance in the registry
    ///
    /// Fails with `Overflow` when the sum is not representable.
    pub fn total_balance(&self) -> Result<Decimal> {
        self.accounts
            .values()
            .map(Account::balance)
            .try_fold(Decimal::ZERO, |total, balance| {
                total
                    .checked_add(balance)
                    .ok_or(BankError::Overflow { amount: balance })
            })
    }

    /// Pretty JSON snapshot of all accounts, in identifier order
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.all_accounts())?)
    }
}

// ============================================================================
// TESTS
// ============================================================================
