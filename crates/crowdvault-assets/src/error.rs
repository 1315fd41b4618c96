//! Asset primitive error types.

use thiserror::Error;

/// Errors that can occur during balance-book operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// A debit exceeded the account's available balance.
    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: u64, available: u64 },

    /// A credit would overflow the account's balance.
    #[error("balance overflow for account {account}")]
    BalanceOverflow { account: String },

    /// The balance book's lock was poisoned by a panicking writer.
    #[error("asset book lock poisoned")]
    LockPoisoned,
}
