//! Vote ledger - score and upvote percentage transitions on a post
//!
//! Every post keeps at most one [`Vote`] per user. The counters follow the
//! transitions below, where `upvotecount` is a running accumulator of vote
//! contributions rather than a literal count of positive votes:
//!
//! | From      | Operation | To        | score | upvotecount | votecount |
//! |-----------|-----------|-----------|-------|-------------|-----------|
//! | NoVote    | Vote(+1)  | Upvoted   | +1    | +1          | +1        |
//! | NoVote    | Vote(-1)  | Downvoted | -1    | -1          | +1        |
//! | Upvoted   | Vote(+1)  | Upvoted   | 0     | 0           | 0         |
//! | Upvoted   | Vote(-1)  | Downvoted | -2    | -1          | 0         |
//! | Downvoted | Vote(-1)  | Downvoted | 0     | 0           | 0         |
//! | Downvoted | Vote(+1)  | Upvoted   | +2    | +1          | 0         |
//! | Upvoted   | Unvote    | NoVote    | -1    | -1          | -1        |
//! | Downvoted | Unvote    | NoVote    | +1    | 0           | -1        |
//! | NoVote    | Unvote    | error     |       |             |           |
//!
//! After each change `upvotePercentage = upvotecount * 100 / votecount`
//! (truncating), or `0` when nobody has voted.

use crate::entities::{Post, Vote, VoteValue};
use crate::value_objects::UserId;

/// A user's standing against one post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteState {
    NoVote,
    Upvoted,
    Downvoted,
}

/// Whether a ledger operation changed the post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerChange {
    Changed,
    Unchanged,
}

impl LedgerChange {
    #[inline]
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Ledger rule violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("user {0} has no vote on this post")]
    NoVote(UserId),
}

impl Post {
    /// Current vote state of `user_id`
    pub fn vote_state(&self, user_id: UserId) -> VoteState {
        match self.votes.iter().find(|v| v.user_id == user_id) {
            None => VoteState::NoVote,
            Some(v) if v.vote == VoteValue::Up => VoteState::Upvoted,
            Some(_) => VoteState::Downvoted,
        }
    }

    /// Record `value` for `user_id`, replacing any opposite vote
    pub fn apply_vote(&mut self, user_id: UserId, value: VoteValue) -> LedgerChange {
        match self.votes.iter_mut().find(|v| v.user_id == user_id) {
            Some(existing) if existing.vote == value => return LedgerChange::Unchanged,
            Some(existing) => {
                self.score += value.value() - existing.vote.value();
                self.upvote_count += value.value();
                existing.vote = value;
            }
            None => {
                self.votes.push(Vote::new(user_id, value));
                self.score += value.value();
                self.upvote_count += value.value();
                self.vote_count += 1;
            }
        }

        self.recompute_percentage();
        LedgerChange::Changed
    }

    /// Withdraw the vote of `user_id`
    pub fn remove_vote(&mut self, user_id: UserId) -> Result<LedgerChange, LedgerError> {
        let index = self
            .votes
            .iter()
            .position(|v| v.user_id == user_id)
            .ok_or(LedgerError::NoVote(user_id))?;

        let removed = self.votes.remove(index);
        match removed.vote {
            VoteValue::Up => {
                self.score -= 1;
                self.upvote_count -= 1;
            }
            VoteValue::Down => self.score += 1,
        }
        self.vote_count -= 1;

        self.recompute_percentage();
        Ok(LedgerChange::Changed)
    }

    /// Refresh `upvote_percentage` from the counters
    pub fn recompute_percentage(&mut self) {
        self.upvote_percentage = if self.vote_count > 0 {
            self.upvote_count * 100 / self.vote_count
        } else {
            0
        };
    }
}
