//! Governance-gated crowd-funding treasuries.
//!
//! This crate provides:
//! - Per-founder treasuries with an immutable funding cap and partial
//!   admission of over-cap investments
//! - Investment positions that double as voting weight on withdrawal
//!   proposals, with one ballot per investor per proposal
//! - Execution of approved withdrawals against single-use resolution
//!   capabilities issued by the governance engine
//! - Investor exits: penalized redemption back into the funding asset, or
//!   pro-rata conversion into the founder's vault asset, each shrinking the
//!   live voting threshold by the retired position
//!
//! Asset movement is delegated to [`crowdvault_assets::AssetBook`] and
//! proposal lifecycle to [`crowdvault_governance::GovernanceEngine`]; this
//! crate owns the funding-round rules that tie them together.

#![deny(unsafe_code)]

pub mod error;
pub mod ledger;
pub mod service;
pub mod types;

mod proposals;
mod redemption;
mod state;
mod withdraw;

pub use error::{TreasuryError, WithdrawError};
pub use ledger::InvestmentLedger;
pub use service::TreasuryService;
pub use types::{VotingConfig, WithdrawalRequest};

// Re-export the collaborating primitives so integrators can depend on one
// crate.
pub use crowdvault_assets as assets;
pub use crowdvault_governance as governance;
pub use crowdvault_types as core_types;
