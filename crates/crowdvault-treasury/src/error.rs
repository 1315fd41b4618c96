//! Treasury error types.

use crowdvault_assets::AssetError;
use crowdvault_governance::{GovernanceError, ResolvedProposal};
use crowdvault_types::{AccountId, Asset};
use thiserror::Error;

use crate::types::WithdrawalRequest;

/// Errors that can occur during treasury operations.
///
/// Every error leaves the treasury untouched: operations validate before
/// they mutate, so a failed call has zero side effects.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreasuryError {
    /// No treasury exists for the founder.
    #[error("no treasury exists for founder {0}")]
    TreasuryNotFound(AccountId),

    /// A treasury was already created for the founder.
    #[error("a treasury already exists for founder {0}")]
    TreasuryAlreadyExists(AccountId),

    /// The funding target must be positive.
    #[error("funding target must be positive")]
    InvalidTarget,

    /// The funding cap is already met; no part of the investment can be
    /// admitted.
    #[error("funding target for {0} is already met")]
    NoGap(AccountId),

    /// The investor already voted on this proposal.
    #[error("{investor} already voted on proposal {proposal_id}")]
    AlreadyVoted {
        investor: AccountId,
        proposal_id: u64,
    },

    /// No investment position exists for (investor, founder).
    #[error("no investment position for {investor} with founder {founder}")]
    PositionNotFound {
        investor: AccountId,
        founder: AccountId,
    },

    /// A checked subtraction went below zero. Hard abort, never clamped.
    #[error("arithmetic underflow while {context}")]
    Underflow { context: &'static str },

    /// A checked addition exceeded the amount domain.
    #[error("arithmetic overflow while {context}")]
    Overflow { context: &'static str },

    /// Failure in the fungible-asset primitive.
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Failure in the governance primitive.
    #[error(transparent)]
    Governance(#[from] GovernanceError),

    /// A per-founder state lock was poisoned by a panicking writer.
    #[error("treasury state lock poisoned")]
    LockPoisoned,
}

/// Errors from [`withdraw`](crate::TreasuryService::withdraw).
///
/// A capability presented against the wrong treasury is handed back inside
/// the error, in the `std::sync::mpsc::SendError` tradition: the withdrawal
/// stays executable against its own board.
#[derive(Debug, Error)]
pub enum WithdrawError<F: Asset> {
    /// The capability belongs to another founder's board.
    #[error("resolved proposal {id} does not belong to founder {founder}", id = .resolved.proposal_id())]
    Mismatch {
        founder: AccountId,
        resolved: ResolvedProposal<WithdrawalRequest<F>>,
    },

    /// Any other treasury failure.
    #[error(transparent)]
    Treasury(#[from] TreasuryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = TreasuryError::TreasuryNotFound(AccountId::new("alice"));
        assert_eq!(err.to_string(), "no treasury exists for founder alice");
    }

    #[test]
    fn asset_errors_convert_transparently() {
        let err: TreasuryError = AssetError::InsufficientFunds {
            required: 10,
            available: 3,
        }
        .into();
        assert_eq!(err.to_string(), "insufficient funds: required 10, available 3");
    }
}
