//! Account identities shared by every crowdvault component.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of an account: a founder, an investor, or a beneficiary.
///
/// Treasuries, voting configs, and founder vaults are keyed by the founder's
/// `AccountId`; investment positions are keyed by (investor, founder).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
