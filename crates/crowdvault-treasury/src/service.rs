//! The treasury service: creation, cap-bounded investment, and read-side
//! queries.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use crowdvault_assets::AssetBook;
use crowdvault_governance::GovernanceEngine;
use crowdvault_types::{AccountId, Asset, Units};
use tracing::info;

use crate::error::TreasuryError;
use crate::ledger::InvestmentLedger;
use crate::state::FounderState;
use crate::types::{VotingConfig, WithdrawalRequest};

type SharedState<F, V> = Arc<Mutex<FounderState<F, V>>>;

/// Crowd-funding treasuries keyed by founder, generic over the funding
/// asset `F` and the founder's vault asset `V`.
///
/// Each founder's state sits behind its own mutex; an operation takes that
/// mutex once, runs every check against the snapshot it sees, and only then
/// mutates. Failed operations therefore never leave partial effects.
pub struct TreasuryService<F: Asset, V: Asset> {
    pub(crate) funding: Arc<AssetBook<F>>,
    pub(crate) vault: Arc<AssetBook<V>>,
    pub(crate) governance: Arc<GovernanceEngine<WithdrawalRequest<F>>>,
    pub(crate) ledger: InvestmentLedger<F>,
    founders: RwLock<HashMap<AccountId, SharedState<F, V>>>,
}

impl<F: Asset, V: Asset> TreasuryService<F, V> {
    pub fn new(
        funding: Arc<AssetBook<F>>,
        vault: Arc<AssetBook<V>>,
        governance: Arc<GovernanceEngine<WithdrawalRequest<F>>>,
    ) -> Self {
        Self {
            funding,
            vault,
            governance,
            ledger: InvestmentLedger::new(),
            founders: RwLock::new(HashMap::new()),
        }
    }

    pub(crate) fn founder_state(
        &self,
        founder: &AccountId,
    ) -> Result<SharedState<F, V>, TreasuryError> {
        let founders = self
            .founders
            .read()
            .map_err(|_| TreasuryError::LockPoisoned)?;
        founders
            .get(founder)
            .cloned()
            .ok_or_else(|| TreasuryError::TreasuryNotFound(founder.clone()))
    }

    pub(crate) fn lock_state<'a>(
        state: &'a SharedState<F, V>,
    ) -> Result<MutexGuard<'a, FounderState<F, V>>, TreasuryError> {
        state.lock().map_err(|_| TreasuryError::LockPoisoned)
    }

    /// Open a treasury for `founder`.
    ///
    /// The funding target is fixed for the treasury's lifetime and must be
    /// positive (conversion divides payouts by it). `vault_seed` is moved
    /// out of the founder's vault-asset balance into the treasury's reserve,
    /// and a proposal board is registered for the founder.
    pub fn create_treasury(
        &self,
        founder: &AccountId,
        target: Units<F>,
        min_voting_threshold: u64,
        voting_duration_secs: u64,
        vault_seed: Units<V>,
    ) -> Result<(), TreasuryError> {
        if target.is_zero() {
            return Err(TreasuryError::InvalidTarget);
        }

        let mut founders = self
            .founders
            .write()
            .map_err(|_| TreasuryError::LockPoisoned)?;
        if founders.contains_key(founder) {
            return Err(TreasuryError::TreasuryAlreadyExists(founder.clone()));
        }

        self.vault.debit(founder, vault_seed)?;
        if let Err(err) = self.governance.register(founder) {
            // The board was already taken on a shared engine; hand the seed
            // back. The credit cannot overflow: the debit just removed it.
            self.vault.credit(founder, vault_seed)?;
            return Err(err.into());
        }
        self.funding.open_account(founder)?;

        let voting = VotingConfig {
            min_voting_threshold,
            voting_duration_secs,
        };
        founders.insert(
            founder.clone(),
            Arc::new(Mutex::new(FounderState::new(target, vault_seed, voting))),
        );

        info!(
            founder = %founder,
            target = %target,
            min_voting_threshold,
            voting_duration_secs,
            vault_seed = %vault_seed,
            "treasury created"
        );
        Ok(())
    }

    /// Invest `amount` of the funding asset into `founder`'s treasury.
    ///
    /// Only the portion fitting under the funding cap is admitted; the rest
    /// stays with the investor. Returns the admitted amount. With the cap
    /// already met the call aborts with [`TreasuryError::NoGap`] and moves
    /// nothing.
    pub fn invest(
        &self,
        investor: &AccountId,
        founder: &AccountId,
        amount: Units<F>,
    ) -> Result<Units<F>, TreasuryError> {
        let state = self.founder_state(founder)?;
        let mut state = Self::lock_state(&state)?;

        let admitted = amount.min(state.gap());
        if admitted.is_zero() {
            return Err(TreasuryError::NoGap(founder.clone()));
        }

        // Pre-compute both additions so no mutation can fail after the debit.
        let new_balance = state
            .balance
            .checked_add(admitted)
            .ok_or(TreasuryError::Overflow {
                context: "growing the treasury balance",
            })?;
        let position = self
            .ledger
            .weight(investor, founder)?
            .unwrap_or_else(Units::zero);
        position
            .checked_add(admitted)
            .ok_or(TreasuryError::Overflow {
                context: "growing an investment position",
            })?;

        self.funding.debit(investor, admitted)?;
        state.balance = new_balance;
        self.ledger.increase(investor, founder, admitted)?;

        info!(
            investor = %investor,
            founder = %founder,
            requested = %amount,
            admitted = %admitted,
            supply = %state.balance,
            "investment admitted"
        );
        Ok(admitted)
    }

    /// Whether a treasury exists for `founder`.
    pub fn has_treasury(&self, founder: &AccountId) -> Result<bool, TreasuryError> {
        let founders = self
            .founders
            .read()
            .map_err(|_| TreasuryError::LockPoisoned)?;
        Ok(founders.contains_key(founder))
    }

    /// Pooled principal currently held by the treasury.
    pub fn treasury_supply(&self, founder: &AccountId) -> Result<Units<F>, TreasuryError> {
        let state = self.founder_state(founder)?;
        let state = Self::lock_state(&state)?;
        Ok(state.balance)
    }

    /// The treasury's immutable funding cap.
    pub fn treasury_max_supply(&self, founder: &AccountId) -> Result<Units<F>, TreasuryError> {
        let state = self.founder_state(founder)?;
        let state = Self::lock_state(&state)?;
        Ok(state.target)
    }

    /// Remaining vault-asset reserve backing conversions.
    pub fn vault_balance(&self, founder: &AccountId) -> Result<Units<V>, TreasuryError> {
        let state = self.founder_state(founder)?;
        let state = Self::lock_state(&state)?;
        Ok(state.vault_balance)
    }

    /// Live voting configuration (threshold reflects past exits).
    pub fn voting_config(&self, founder: &AccountId) -> Result<VotingConfig, TreasuryError> {
        let state = self.founder_state(founder)?;
        let state = Self::lock_state(&state)?;
        Ok(state.voting)
    }

    /// The investor's position with `founder`, or `None` without one.
    pub fn investment_weight(
        &self,
        investor: &AccountId,
        founder: &AccountId,
    ) -> Result<Option<Units<F>>, TreasuryError> {
        self.ledger.weight(investor, founder)
    }
}
