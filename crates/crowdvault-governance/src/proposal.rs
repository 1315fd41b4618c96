//! Proposal records, lifecycle states, and the single-use resolution
//! capability.

use crowdvault_types::AccountId;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a proposal.
///
/// `Open` until the voting window elapses; then `Succeeded` or `Failed`
/// from the accumulated tallies; `Resolved` once the resolution capability
/// has been handed out. `Resolved` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalState {
    Open,
    Succeeded,
    Failed,
    Resolved,
}

/// One proposal on a resource's board.
///
/// The threshold and voting duration are snapshotted from the caller at
/// creation time; later configuration changes never touch an existing
/// record. Only the tallies and the resolved flag mutate afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProposalRecord<P> {
    pub id: u64,
    pub proposer: AccountId,
    pub payload: P,
    /// Fingerprint of the execution step this proposal authorizes.
    pub fingerprint: [u8; 32],
    /// Minimum total weight required for the vote to count, snapshotted at
    /// creation.
    pub min_threshold: u64,
    /// Length of the voting window in seconds, snapshotted at creation.
    pub voting_duration_secs: u64,
    pub created_at_secs: u64,
    pub yes_weight: u64,
    pub no_weight: u64,
    pub resolved: bool,
}

impl<P> ProposalRecord<P> {
    /// First instant at which the proposal can be resolved.
    pub fn voting_ends_at_secs(&self) -> u64 {
        self.created_at_secs
            .saturating_add(self.voting_duration_secs)
    }

    /// State as observed at `now_secs`.
    ///
    /// A proposal succeeds when approvals outweigh rejections and the total
    /// cast weight meets the snapshotted threshold.
    pub fn state_at(&self, now_secs: u64) -> ProposalState {
        if self.resolved {
            return ProposalState::Resolved;
        }
        if now_secs < self.voting_ends_at_secs() {
            return ProposalState::Open;
        }

        let total = self.yes_weight.saturating_add(self.no_weight);
        if self.yes_weight > self.no_weight && total >= self.min_threshold {
            ProposalState::Succeeded
        } else {
            ProposalState::Failed
        }
    }
}

/// Proof that a proposal resolved successfully.
///
/// Produced exactly once per proposal by [`GovernanceEngine::resolve`] and
/// consumed by value when the authorized action executes. Deliberately
/// neither `Clone` nor `Copy`, and not constructible outside this crate.
///
/// [`GovernanceEngine::resolve`]: crate::engine::GovernanceEngine::resolve
#[derive(Debug, PartialEq)]
pub struct ResolvedProposal<P> {
    resource: AccountId,
    proposal_id: u64,
    payload: P,
}

impl<P> ResolvedProposal<P> {
    pub(crate) fn new(resource: AccountId, proposal_id: u64, payload: P) -> Self {
        Self {
            resource,
            proposal_id,
            payload,
        }
    }

    /// The resource (board key) this capability belongs to.
    pub fn resource(&self) -> &AccountId {
        &self.resource
    }

    pub fn proposal_id(&self) -> u64 {
        self.proposal_id
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Consume the capability, yielding the authorized payload.
    pub fn into_payload(self) -> P {
        self.payload
    }
}

/// Fingerprint an execution step (e.g. the serialized withdrawal script a
/// resolved proposal authorizes) with a domain-separated blake3 hash.
pub fn execution_fingerprint(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"crowdvault-execution-v1:");
    hasher.update(bytes);
    *hasher.finalize().as_bytes()
}
