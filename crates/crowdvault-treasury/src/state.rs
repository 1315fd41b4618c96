//! Internal per-founder treasury state.

use std::collections::HashSet;

use crowdvault_types::{AccountId, Asset, Units};

use crate::types::VotingConfig;

/// Everything keyed by one founder, guarded by that founder's mutex.
///
/// All checks in an operation run against one consistent snapshot of this
/// state; mutations are applied only after every check has passed.
pub(crate) struct FounderState<F: Asset, V: Asset> {
    /// Pooled principal currently held by the treasury.
    pub balance: Units<F>,
    /// Immutable funding cap fixed at creation.
    pub target: Units<F>,
    /// Founder-asset reserve drained pro rata by conversions.
    pub vault_balance: Units<V>,
    /// Live voting configuration; the threshold shrinks as investors exit.
    pub voting: VotingConfig,
    /// (investor, proposal id) pairs that have already voted.
    pub votes_cast: HashSet<(AccountId, u64)>,
}

impl<F: Asset, V: Asset> FounderState<F, V> {
    pub fn new(target: Units<F>, vault_balance: Units<V>, voting: VotingConfig) -> Self {
        Self {
            balance: Units::zero(),
            target,
            vault_balance,
            voting,
            votes_cast: HashSet::new(),
        }
    }

    /// Remaining room under the funding cap.
    pub fn gap(&self) -> Units<F> {
        // balance never exceeds target, so the subtraction cannot underflow
        self.target
            .checked_sub(self.balance)
            .unwrap_or_else(Units::zero)
    }
}
