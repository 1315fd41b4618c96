//! The proposal engine: per-resource boards, weighted tallies, resolution.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crowdvault_types::{AccountId, VoteChoice};
use tracing::{debug, info};

use crate::clock::Clock;
use crate::error::GovernanceError;
use crate::proposal::{ProposalRecord, ProposalState, ResolvedProposal};

#[derive(Default)]
struct Board<P> {
    next_id: u64,
    proposals: HashMap<u64, ProposalRecord<P>>,
}

/// Weighted-vote proposal engine, generic over the proposal payload `P`.
///
/// One board per registered resource; proposal ids are sequential per board,
/// so proposals are globally keyed by (resource, id).
pub struct GovernanceEngine<P> {
    clock: Arc<dyn Clock>,
    boards: RwLock<HashMap<AccountId, Board<P>>>,
}

impl<P> GovernanceEngine<P> {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            boards: RwLock::new(HashMap::new()),
        }
    }

    /// The engine's clock, shared so callers can observe the same timeline.
    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<AccountId, Board<P>>>, GovernanceError> {
        self.boards.read().map_err(|_| GovernanceError::LockPoisoned)
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, HashMap<AccountId, Board<P>>>, GovernanceError> {
        self.boards
            .write()
            .map_err(|_| GovernanceError::LockPoisoned)
    }

    /// Register a proposal board for `resource`. One board per resource;
    /// a duplicate registration aborts.
    pub fn register(&self, resource: &AccountId) -> Result<(), GovernanceError> {
        let mut boards = self.write()?;
        if boards.contains_key(resource) {
            return Err(GovernanceError::AlreadyRegistered(resource.to_string()));
        }
        boards.insert(
            resource.clone(),
            Board {
                next_id: 0,
                proposals: HashMap::new(),
            },
        );
        info!(resource = %resource, "proposal board registered");
        Ok(())
    }

    /// Create a proposal, snapshotting `min_threshold` and
    /// `voting_duration_secs` into the record. Returns the new id.
    pub fn create_proposal(
        &self,
        proposer: AccountId,
        resource: &AccountId,
        payload: P,
        fingerprint: [u8; 32],
        min_threshold: u64,
        voting_duration_secs: u64,
    ) -> Result<u64, GovernanceError> {
        let mut boards = self.write()?;
        let board = boards
            .get_mut(resource)
            .ok_or_else(|| GovernanceError::NotRegistered(resource.to_string()))?;

        let id = board.next_id;
        board.next_id += 1;

        let record = ProposalRecord {
            id,
            proposer,
            payload,
            fingerprint,
            min_threshold,
            voting_duration_secs,
            created_at_secs: self.clock.now_secs(),
            yes_weight: 0,
            no_weight: 0,
            resolved: false,
        };
        board.proposals.insert(id, record);

        info!(
            resource = %resource,
            proposal_id = id,
            min_threshold,
            voting_duration_secs,
            "proposal created"
        );
        Ok(id)
    }

    /// Add `weight` to the proposal's tally for `choice`.
    ///
    /// Votes are accepted only while the window is open; the engine does not
    /// deduplicate voters — that invariant belongs to the caller.
    pub fn cast_vote(
        &self,
        resource: &AccountId,
        id: u64,
        weight: u64,
        choice: VoteChoice,
    ) -> Result<(), GovernanceError> {
        let now = self.clock.now_secs();
        let mut boards = self.write()?;
        let board = boards
            .get_mut(resource)
            .ok_or_else(|| GovernanceError::NotRegistered(resource.to_string()))?;
        let record =
            board
                .proposals
                .get_mut(&id)
                .ok_or_else(|| GovernanceError::ProposalNotFound {
                    resource: resource.to_string(),
                    id,
                })?;

        if record.resolved || now >= record.voting_ends_at_secs() {
            return Err(GovernanceError::VotingClosed { id });
        }

        let tally = match choice {
            VoteChoice::Approve => &mut record.yes_weight,
            VoteChoice::Reject => &mut record.no_weight,
        };
        *tally = tally
            .checked_add(weight)
            .ok_or(GovernanceError::WeightOverflow { id })?;

        debug!(
            resource = %resource,
            proposal_id = id,
            weight,
            ?choice,
            yes = record.yes_weight,
            no = record.no_weight,
            "vote tallied"
        );
        Ok(())
    }

    /// State of (resource, id) as of the engine clock.
    pub fn proposal_state(
        &self,
        resource: &AccountId,
        id: u64,
    ) -> Result<ProposalState, GovernanceError> {
        let now = self.clock.now_secs();
        let boards = self.read()?;
        let record = boards
            .get(resource)
            .ok_or_else(|| GovernanceError::NotRegistered(resource.to_string()))?
            .proposals
            .get(&id)
            .ok_or_else(|| GovernanceError::ProposalNotFound {
                resource: resource.to_string(),
                id,
            })?;
        Ok(record.state_at(now))
    }

    /// Resolve a succeeded proposal into its single-use capability.
    ///
    /// Fails while the window is still open, when the vote failed, or when
    /// the proposal was already resolved. The record is flipped to resolved
    /// before the capability is returned, so at most one capability can ever
    /// exist per proposal.
    pub fn resolve(
        &self,
        resource: &AccountId,
        id: u64,
    ) -> Result<ResolvedProposal<P>, GovernanceError>
    where
        P: Clone,
    {
        let now = self.clock.now_secs();
        let mut boards = self.write()?;
        let board = boards
            .get_mut(resource)
            .ok_or_else(|| GovernanceError::NotRegistered(resource.to_string()))?;
        let record =
            board
                .proposals
                .get_mut(&id)
                .ok_or_else(|| GovernanceError::ProposalNotFound {
                    resource: resource.to_string(),
                    id,
                })?;

        match record.state_at(now) {
            ProposalState::Open => Err(GovernanceError::VotingStillOpen {
                id,
                ends_at_secs: record.voting_ends_at_secs(),
            }),
            ProposalState::Failed => Err(GovernanceError::ProposalFailed { id }),
            ProposalState::Resolved => Err(GovernanceError::AlreadyResolved { id }),
            ProposalState::Succeeded => {
                record.resolved = true;
                info!(
                    resource = %resource,
                    proposal_id = id,
                    yes = record.yes_weight,
                    no = record.no_weight,
                    "proposal resolved"
                );
                Ok(ResolvedProposal::new(
                    resource.clone(),
                    id,
                    record.payload.clone(),
                ))
            }
        }
    }

    /// Read-only copy of a proposal record.
    pub fn proposal(
        &self,
        resource: &AccountId,
        id: u64,
    ) -> Result<ProposalRecord<P>, GovernanceError>
    where
        P: Clone,
    {
        let boards = self.read()?;
        boards
            .get(resource)
            .ok_or_else(|| GovernanceError::NotRegistered(resource.to_string()))?
            .proposals
            .get(&id)
            .cloned()
            .ok_or_else(|| GovernanceError::ProposalNotFound {
                resource: resource.to_string(),
                id,
            })
    }
}
