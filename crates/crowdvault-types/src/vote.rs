//! Vote direction for weighted ballots.

use serde::{Deserialize, Serialize};

/// Direction of a single ballot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteChoice {
    Approve,
    Reject,
}

impl VoteChoice {
    pub fn is_approve(self) -> bool {
        matches!(self, VoteChoice::Approve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&VoteChoice::Approve).unwrap(),
            "\"approve\""
        );
        assert_eq!(
            serde_json::from_str::<VoteChoice>("\"reject\"").unwrap(),
            VoteChoice::Reject
        );
    }

    #[test]
    fn approve_predicate() {
        assert!(VoteChoice::Approve.is_approve());
        assert!(!VoteChoice::Reject.is_approve());
    }
}
