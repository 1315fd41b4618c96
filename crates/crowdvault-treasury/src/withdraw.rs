//! Execution of resolved withdrawal proposals.

use crowdvault_governance::ResolvedProposal;
use crowdvault_types::{AccountId, Asset};
use tracing::info;

use crate::error::{TreasuryError, WithdrawError};
use crate::service::TreasuryService;
use crate::types::WithdrawalRequest;

impl<F: Asset, V: Asset> TreasuryService<F, V> {
    /// Execute an approved withdrawal, consuming its resolution capability.
    ///
    /// The capability must come from `founder`'s own board; one issued
    /// against another treasury is handed back inside
    /// [`WithdrawError::Mismatch`] so it can still be executed where it
    /// belongs. On success the payout is debited from the pooled principal
    /// and credited to the beneficiary named in the proposal.
    pub fn withdraw(
        &self,
        founder: &AccountId,
        resolved: ResolvedProposal<WithdrawalRequest<F>>,
    ) -> Result<(), WithdrawError<F>> {
        if resolved.resource() != founder {
            return Err(WithdrawError::Mismatch {
                founder: founder.clone(),
                resolved,
            });
        }

        let state = self.founder_state(founder)?;
        let mut state = Self::lock_state(&state)?;

        let proposal_id = resolved.proposal_id();
        let request = resolved.into_payload();

        let new_balance = state
            .balance
            .checked_sub(request.amount)
            .ok_or(TreasuryError::Underflow {
                context: "paying a withdrawal out of the treasury",
            })?;

        self.funding
            .credit(&request.beneficiary, request.amount)
            .map_err(TreasuryError::from)?;
        state.balance = new_balance;

        info!(
            founder = %founder,
            proposal_id,
            amount = %request.amount,
            beneficiary = %request.beneficiary,
            supply = %state.balance,
            "withdrawal executed"
        );
        Ok(())
    }
}
