//! Investor exits: penalized redemption and vault conversion.
//!
//! Both paths retire the investor's entire position and shrink the live
//! voting threshold by the position's full weight. The threshold decrement
//! is a checked subtraction; when past exits have already driven the
//! threshold below the position, the exit aborts rather than clamping.

use crowdvault_types::{AccountId, Asset, Units};
use tracing::info;

use crate::error::TreasuryError;
use crate::service::TreasuryService;

/// Redeeming investors keep 9/10 of their principal; the pool retains the
/// remainder as the exit penalty.
const REDEEM_NUMERATOR: u128 = 9;
const REDEEM_DENOMINATOR: u128 = 10;

impl<F: Asset, V: Asset> TreasuryService<F, V> {
    /// Redeem the investor's entire position for the funding asset, minus
    /// the exit penalty. Returns the payout.
    pub fn redeem_all(
        &self,
        investor: &AccountId,
        founder: &AccountId,
    ) -> Result<Units<F>, TreasuryError> {
        let state = self.founder_state(founder)?;
        let mut state = Self::lock_state(&state)?;

        let position = self.ledger.weight(investor, founder)?.ok_or_else(|| {
            TreasuryError::PositionNotFound {
                investor: investor.clone(),
                founder: founder.clone(),
            }
        })?;

        let payout_raw = (position.raw() as u128) * REDEEM_NUMERATOR / REDEEM_DENOMINATOR;
        let payout = Units::new(payout_raw as u64);

        let new_balance = state
            .balance
            .checked_sub(payout)
            .ok_or(TreasuryError::Underflow {
                context: "paying a redemption out of the treasury",
            })?;
        let new_threshold = state
            .voting
            .min_voting_threshold
            .checked_sub(position.raw())
            .ok_or(TreasuryError::Underflow {
                context: "retiring the position's voting threshold share",
            })?;

        self.funding.credit(investor, payout)?;
        self.ledger.remove_all(investor, founder)?;
        state.balance = new_balance;
        state.voting.min_voting_threshold = new_threshold;

        info!(
            investor = %investor,
            founder = %founder,
            principal = %position,
            payout = %payout,
            supply = %state.balance,
            min_voting_threshold = state.voting.min_voting_threshold,
            "position redeemed"
        );
        Ok(payout)
    }

    /// Convert the investor's entire position into the founder's vault
    /// asset.
    ///
    /// The principal passes to the founder's funding-asset balance, and the
    /// investor receives `floor(position * vault / target)` of the vault
    /// reserve. Returns the vault payout.
    pub fn convert_all(
        &self,
        investor: &AccountId,
        founder: &AccountId,
    ) -> Result<Units<V>, TreasuryError> {
        let state = self.founder_state(founder)?;
        let mut state = Self::lock_state(&state)?;

        let position = self.ledger.weight(investor, founder)?.ok_or_else(|| {
            TreasuryError::PositionNotFound {
                investor: investor.clone(),
                founder: founder.clone(),
            }
        })?;

        let new_balance = state
            .balance
            .checked_sub(position)
            .ok_or(TreasuryError::Underflow {
                context: "releasing converted principal from the treasury",
            })?;
        let new_threshold = state
            .voting
            .min_voting_threshold
            .checked_sub(position.raw())
            .ok_or(TreasuryError::Underflow {
                context: "retiring the position's voting threshold share",
            })?;

        // target is positive for every created treasury
        let payout_raw = (position.raw() as u128) * (state.vault_balance.raw() as u128)
            / (state.target.raw() as u128);
        let payout = Units::new(u64::try_from(payout_raw).map_err(|_| {
            TreasuryError::Overflow {
                context: "computing the vault conversion payout",
            }
        })?);
        let new_vault =
            state
                .vault_balance
                .checked_sub(payout)
                .ok_or(TreasuryError::Underflow {
                    context: "draining the founder vault",
                })?;

        self.funding.credit(founder, position)?;
        self.vault.credit(investor, payout)?;
        self.ledger.remove_all(investor, founder)?;
        state.balance = new_balance;
        state.voting.min_voting_threshold = new_threshold;
        state.vault_balance = new_vault;

        info!(
            investor = %investor,
            founder = %founder,
            principal = %position,
            payout = %payout,
            vault_balance = %state.vault_balance,
            min_voting_threshold = state.voting.min_voting_threshold,
            "position converted"
        );
        Ok(payout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redemption_payout_floors() {
        for (principal, expected) in [(10u128, 9u128), (15, 13), (1, 0), (0, 0), (11, 9)] {
            assert_eq!(principal * REDEEM_NUMERATOR / REDEEM_DENOMINATOR, expected);
        }
    }
}
