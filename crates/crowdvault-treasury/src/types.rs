//! Shared treasury types.

use crowdvault_types::{AccountId, Asset, Units};
use serde::{Deserialize, Serialize};

/// Per-treasury voting configuration.
///
/// `min_voting_threshold` starts at the value chosen at treasury creation
/// and is decremented by the exiting investor's full principal on every
/// redemption or conversion. Proposals snapshot the value current at their
/// creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingConfig {
    pub min_voting_threshold: u64,
    pub voting_duration_secs: u64,
}

/// Payload of a withdrawal proposal: how much to pay out of the treasury
/// pool, and to whom.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct WithdrawalRequest<F: Asset> {
    pub amount: Units<F>,
    pub beneficiary: AccountId,
}
