//! Views of the core types shaped for the presentation layer.

mod ballot;
mod identity;
mod vote;

pub use ballot::BallotDescription;
pub use identity::IdentityProfile;
pub use vote::{CastVoteResponse, VoteHistoryEntry};
