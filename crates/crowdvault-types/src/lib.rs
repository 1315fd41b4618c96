//! Shared vocabulary for the crowdvault treasury workspace.
//!
//! This crate provides:
//! - **Account identities** ([`AccountId`]) for founders, investors, and
//!   beneficiaries.
//! - **Asset markers** ([`Asset`]) and the phantom-typed amount ([`Units`])
//!   that keeps funding-asset and vault-asset arithmetic apart at compile
//!   time.
//! - **Vote choices** ([`VoteChoice`]) cast against withdrawal proposals.

#![deny(unsafe_code)]

pub mod account;
pub mod asset;
pub mod vote;

pub use account::AccountId;
pub use asset::{Asset, Units};
pub use vote::VoteChoice;
