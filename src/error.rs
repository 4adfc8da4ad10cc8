use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BankError {
    #[error("Amount must be positive, got {amount}")]
    InvalidArgument { amount: Decimal },

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// The result would exceed the largest representable balance
    #[error("Amount overflows the balance: {amount}")]
    Overflow { amount: Decimal },

    #[error("Account already exists: {0}")]
    AlreadyExists(String),

    #[error("Account not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BankError>;
