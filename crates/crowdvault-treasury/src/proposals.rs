//! Withdrawal proposals and weighted investor voting.

use crowdvault_types::{AccountId, Asset, Units, VoteChoice};
use tracing::info;

use crate::error::TreasuryError;
use crate::service::TreasuryService;
use crate::types::WithdrawalRequest;

impl<F: Asset, V: Asset> TreasuryService<F, V> {
    /// Open a withdrawal proposal on `founder`'s board.
    ///
    /// The treasury's current voting configuration is snapshotted into the
    /// proposal, so exits after creation do not move its threshold. Returns
    /// the proposal id.
    pub fn propose_withdrawal(
        &self,
        founder: &AccountId,
        amount: Units<F>,
        beneficiary: AccountId,
        fingerprint: [u8; 32],
    ) -> Result<u64, TreasuryError> {
        let state = self.founder_state(founder)?;
        let state = Self::lock_state(&state)?;

        let request = WithdrawalRequest {
            amount,
            beneficiary: beneficiary.clone(),
        };
        let id = self.governance.create_proposal(
            founder.clone(),
            founder,
            request,
            fingerprint,
            state.voting.min_voting_threshold,
            state.voting.voting_duration_secs,
        )?;

        info!(
            founder = %founder,
            proposal_id = id,
            amount = %amount,
            beneficiary = %beneficiary,
            "withdrawal proposed"
        );
        Ok(id)
    }

    /// Cast the investor's full position as a ballot on a proposal.
    ///
    /// The weight is the position as it stands when the vote is cast, not
    /// when the proposal was created. One ballot per investor per proposal;
    /// a duplicate aborts before the tally is touched.
    pub fn vote(
        &self,
        investor: &AccountId,
        founder: &AccountId,
        proposal_id: u64,
        choice: VoteChoice,
    ) -> Result<(), TreasuryError> {
        let state = self.founder_state(founder)?;
        let mut state = Self::lock_state(&state)?;

        if state
            .votes_cast
            .contains(&(investor.clone(), proposal_id))
        {
            return Err(TreasuryError::AlreadyVoted {
                investor: investor.clone(),
                proposal_id,
            });
        }

        let weight = self.ledger.weight(investor, founder)?.ok_or_else(|| {
            TreasuryError::PositionNotFound {
                investor: investor.clone(),
                founder: founder.clone(),
            }
        })?;

        self.governance
            .cast_vote(founder, proposal_id, weight.raw(), choice)?;
        state.votes_cast.insert((investor.clone(), proposal_id));

        info!(
            investor = %investor,
            founder = %founder,
            proposal_id,
            weight = %weight,
            ?choice,
            "ballot cast"
        );
        Ok(())
    }
}
