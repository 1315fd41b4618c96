//! Generic weighted-vote governance primitive for crowdvault.
//!
//! This crate provides:
//! - **Error types** for governance failures ([`GovernanceError`]).
//! - **Proposal records and states** ([`ProposalRecord`], [`ProposalState`])
//!   plus the single-use [`ResolvedProposal`] capability.
//! - **The engine** ([`GovernanceEngine`]): per-resource proposal boards
//!   with weighted yes/no tallies and time-bounded resolution.
//! - **Clocks** ([`Clock`], [`SystemClock`], [`ManualClock`]) so tests and
//!   local runs can drive the voting window deterministically.
//!
//! The engine is payload-generic: it registers one proposal board per
//! resource and carries an opaque payload `P` through creation and
//! resolution. Deduplicating voters and computing vote weight are the
//! caller's concern; the engine only tallies what it is handed.

#![deny(unsafe_code)]

pub mod clock;
pub mod engine;
pub mod error;
pub mod proposal;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::GovernanceEngine;
pub use error::GovernanceError;
pub use proposal::{execution_fingerprint, ProposalRecord, ProposalState, ResolvedProposal};
