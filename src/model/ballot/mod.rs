mod ballot_core;
mod store;
mod tally;
mod vote;

pub use ballot_core::{Ballot, BallotCore, BallotSpec, BallotState};
pub use store::{BallotFilter, BallotStore};
pub use tally::{RankedCandidate, Tally};
pub use vote::{Vote, VoteCore};
