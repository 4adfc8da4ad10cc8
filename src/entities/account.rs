// 💳 Account Entity - a named balance record
//
// "Identifier is IDENTITY (never changes), balance is the VALUE that moves"
//
// Rules:
// - Accounts are opened by the Bank registry only, always at zero
// - Balance only moves through deposit / withdraw
// - Balance never drops below zero; a rejected operation changes nothing

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{BankError, Result};

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Account Entity - identifier plus a non-negative balance
///
/// Identity: `identifier` (fixed at creation)
/// Value: `balance` (changes through deposit / withdraw)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    /// Stable identity - NEVER changes
    identifier: String,

    /// Current balance, always >= 0
    balance: Decimal,

    /// When the registry opened this account
    opened_at: DateTime<Utc>,
}

impl Account {
    /// Open a zero-balance account. Only the registry calls this.
    pub(crate) fn open(identifier: String) -> Self {
        Account {
            identifier,
            balance: Decimal::ZERO,
            opened_at: Utc::now(),
        }
    }

    /// Add `amount` to the balance
    ///
    /// Fails with `InvalidArgument` when `amount <= 0`, and with `Overflow`
    /// when the new balance is not representable.
    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        Self::ensure_positive(&self.identifier, amount)?;

        let Some(balance) = self.balance.checked_add(amount) else {
            warn!(identifier = %self.identifier, %amount, balance = %self.balance, "deposit rejected: balance overflow");
            return Err(BankError::Overflow { amount });
        };

        self.balance = balance;
        debug!(identifier = %self.identifier, %amount, balance = %self.balance, "deposit applied");
        Ok(())
    }

    /// Take `amount` out of the balance
    ///
    /// Fails with `InvalidArgument` when `amount <= 0`, then with
    /// `InsufficientFunds` when `amount` exceeds the balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        Self::ensure_positive(&self.identifier, amount)?;

        if amount > self.balance {
            warn!(identifier = %self.identifier, %amount, balance = %self.balance, "withdrawal rejected: insufficient funds");
            return Err(BankError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        debug!(identifier = %self.identifier, %amount, balance = %self.balance, "withdrawal applied");
        Ok(())
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// True when nothing is held in the account
    pub fn is_empty(&self) -> bool {
        self.balance.is_zero()
    }

    fn ensure_positive(identifier: &str, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            warn!(identifier = %identifier, %amount, "rejected non-positive amount");
            return Err(BankError::InvalidArgument { amount });
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
