// Entity Models
//
// - Account: identifier + non-negative balance
// - Bank: registry that owns accounts by identifier

pub mod account;
pub mod bank;

pub use account::Account;
pub use bank::Bank;
