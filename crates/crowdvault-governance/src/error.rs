//! Governance error types.

use thiserror::Error;

/// Errors that can occur during proposal-board operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GovernanceError {
    /// No proposal board is registered for the resource.
    #[error("no proposal board registered for {0}")]
    NotRegistered(String),

    /// A proposal board already exists for the resource.
    #[error("proposal board already registered for {0}")]
    AlreadyRegistered(String),

    /// The proposal id does not exist on the resource's board.
    #[error("proposal {id} not found for {resource}")]
    ProposalNotFound { resource: String, id: u64 },

    /// The voting window has closed (or the proposal is already resolved).
    #[error("voting closed for proposal {id}")]
    VotingClosed { id: u64 },

    /// Resolution was attempted before the voting window elapsed.
    #[error("voting still open for proposal {id} until {ends_at_secs}")]
    VotingStillOpen { id: u64, ends_at_secs: u64 },

    /// The proposal did not pass and cannot be resolved.
    #[error("proposal {id} failed its vote")]
    ProposalFailed { id: u64 },

    /// The proposal was already resolved; the capability is single-use.
    #[error("proposal {id} already resolved")]
    AlreadyResolved { id: u64 },

    /// A weighted tally would overflow.
    #[error("vote weight overflow on proposal {id}")]
    WeightOverflow { id: u64 },

    /// The board lock was poisoned by a panicking writer.
    #[error("governance board lock poisoned")]
    LockPoisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voting_still_open_display() {
        let err = GovernanceError::VotingStillOpen {
            id: 3,
            ends_at_secs: 10_000,
        };
        assert_eq!(err.to_string(), "voting still open for proposal 3 until 10000");
    }

    #[test]
    fn already_resolved_display() {
        let err = GovernanceError::AlreadyResolved { id: 7 };
        assert_eq!(err.to_string(), "proposal 7 already resolved");
    }
}
