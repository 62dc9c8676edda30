//! Vote entity - one user's recorded vote on a post

use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// Direction of a vote. Serialized as the integer `1` or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum VoteValue {
    Up,
    Down,
}

impl VoteValue {
    /// Signed contribution of this vote to the score
    #[inline]
    pub const fn value(self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

impl From<VoteValue> for i64 {
    fn from(value: VoteValue) -> Self {
        value.value()
    }
}

impl TryFrom<i64> for VoteValue {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Up),
            -1 => Ok(Self::Down),
            other => Err(format!("invalid vote value: {other}")),
        }
    }
}

/// Vote record stored in a post's ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    #[serde(rename = "user")]
    pub user_id: UserId,
    pub vote: VoteValue,
}

impl Vote {
    pub fn new(user_id: UserId, vote: VoteValue) -> Self {
        Self { user_id, vote }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_value_wire_format() {
        let vote = Vote::new(UserId::new(7), VoteValue::Down);
        let json = serde_json::to_value(vote).unwrap();
        assert_eq!(json, serde_json::json!({ "user": 7, "vote": -1 }));

        let back: Vote = serde_json::from_value(json).unwrap();
        assert_eq!(back, vote);
    }

    #[test]
    fn test_zero_vote_is_rejected() {
        let result: Result<Vote, _> = serde_json::from_str(r#"{"user": 1, "vote": 0}"#);
        assert!(result.is_err());
    }
}
