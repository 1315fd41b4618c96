//! Fungible-asset primitive for crowdvault.
//!
//! This crate provides:
//! - **Error types** for balance operations ([`AssetError`]).
//! - **The balance book** ([`AssetBook`]): exact-amount fungible balances
//!   per account for one asset type, with zero-balance account construction.
//!
//! Every operation moves exact amounts with no implicit fees; a debit that
//! exceeds the available balance aborts with [`AssetError::InsufficientFunds`].

#![deny(unsafe_code)]

pub mod book;
pub mod error;

pub use book::AssetBook;
pub use error::AssetError;
