//! Domain entities - the post document and what it embeds

mod comment;
mod post;
mod vote;

pub use comment::Comment;
pub use post::{Author, Post, PostKind};
pub use vote::{Vote, VoteValue};

use chrono::{DateTime, SubsecRound, Utc};

/// Current UTC time truncated to whole seconds.
///
/// Documents store RFC 3339 timestamps without fractional seconds.
pub(crate) fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}
