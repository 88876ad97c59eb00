use log::{info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::id::{Id, IdSequence};
use crate::model::identity::Identity;

use super::ballot_core::{Ballot, BallotSpec, BallotState};
use super::tally::Tally;
use super::vote::{Vote, VoteCore};

/// In-memory store of ballot definitions and the append-only vote ledger.
///
/// The store owns both collections exclusively. It reads the current
/// identity (passed in by the caller) but never mutates identity state.
/// Every check-then-act guard in here is safe only because all operations
/// run on a single logical thread; a concurrent port would have to make
/// `create` and `cast_vote` atomic on their uniqueness keys.
#[derive(Debug)]
pub struct BallotStore {
    ballots: Vec<Ballot>,
    votes: Vec<Vote>,
    ballot_ids: IdSequence,
    vote_ids: IdSequence,
}

impl BallotStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_ballots(Vec::new())
    }

    /// Create a store pre-populated with the given ballots. The ID sequence
    /// continues after them.
    pub fn with_ballots(ballots: Vec<Ballot>) -> Self {
        let ballot_ids = IdSequence::starting_after("vote", ballots.iter().map(|b| &b.id));
        Self {
            ballots,
            votes: Vec::new(),
            ballot_ids,
            vote_ids: IdSequence::new("cast", 1),
        }
    }

    /// All ballots matching the filter, in creation order. The filter is a
    /// pure predicate; there is no pagination.
    pub fn list(&self, filter: BallotFilter) -> Vec<&Ballot> {
        self.ballots
            .iter()
            .filter(|ballot| filter.matches(ballot.state))
            .collect()
    }

    /// Direct lookup by ID.
    pub fn get(&self, id: &Id) -> Option<&Ballot> {
        self.ballots.iter().find(|ballot| &ballot.id == id)
    }

    /// Create a new ballot from raw form input. Only administrators may
    /// create ballots; any failure leaves the store untouched.
    pub fn create(
        &mut self,
        caller: Option<&Identity>,
        title: &str,
        description: &str,
        candidates_csv: &str,
    ) -> Result<&Ballot> {
        if !caller.map_or(false, |identity| identity.is_administrator) {
            warn!("Ballot creation rejected: caller is not an administrator");
            return Err(Error::NotAuthorized);
        }
        let spec = BallotSpec::parse(title, description, candidates_csv)?;

        let id = self.ballot_ids.next();
        info!("Created ballot {id}: {}", spec.title);
        self.ballots.push(Ballot {
            id,
            ballot: spec.into(),
        });
        // Unwrap safe: the ballot was pushed above.
        Ok(self.ballots.last().unwrap())
    }

    /// Cast a vote on a ballot as `caller`.
    ///
    /// Guards run in order: authentication, duplicate vote, selection
    /// validity, then ballot state (only if enforcement is configured). The
    /// duplicate key is `(voter, ballot)` alone; the candidate is not part
    /// of it.
    pub fn cast_vote(
        &mut self,
        caller: Option<&Identity>,
        ballot_id: &Id,
        candidate: &str,
        config: &Config,
    ) -> Result<&Vote> {
        let voter = caller.ok_or(Error::NotLoggedIn)?;

        // First-match scan; the ledger has no uniqueness index.
        if self.has_voted(&voter.id, ballot_id) {
            warn!("{} has already voted on {ballot_id}", voter.username);
            return Err(Error::AlreadyVoted);
        }

        let ballot = self
            .ballots
            .iter()
            .find(|ballot| &ballot.id == ballot_id)
            .ok_or(Error::InvalidSelection)?;
        if !ballot.has_candidate(candidate) {
            return Err(Error::InvalidSelection);
        }
        if config.enforce_ballot_state() && ballot.state != BallotState::Active {
            warn!("Vote rejected, ballot {ballot_id} is not active");
            return Err(Error::BallotClosed);
        }

        let id = self.vote_ids.next();
        info!(
            "Vote cast by {} for {candidate} on {ballot_id}",
            voter.username
        );
        self.votes.push(Vote {
            id,
            vote: VoteCore {
                voter_id: voter.id.clone(),
                ballot_id: ballot_id.clone(),
                candidate: candidate.to_string(),
            },
        });
        // Unwrap safe: the vote was pushed above.
        Ok(self.votes.last().unwrap())
    }

    /// All votes cast by `voter_id`, in cast order. Callers reverse for
    /// most-recent-first display.
    pub fn votes_by(&self, voter_id: &Id) -> Vec<&Vote> {
        self.votes
            .iter()
            .filter(|vote| &vote.voter_id == voter_id)
            .collect()
    }

    /// Whether `voter_id` has already voted on `ballot_id`. The same check
    /// as the duplicate guard in [`cast_vote`](Self::cast_vote).
    pub fn has_voted(&self, voter_id: &Id, ballot_id: &Id) -> bool {
        self.votes
            .iter()
            .any(|vote| &vote.voter_id == voter_id && &vote.ballot_id == ballot_id)
    }

    /// Tally the votes for `ballot_id`. An unknown ballot yields an empty
    /// candidate map, with `total_votes` still counting any votes that
    /// reference the ID.
    pub fn results(&self, ballot_id: &Id) -> Tally {
        let candidates = self
            .get(ballot_id)
            .map(|ballot| ballot.candidates.clone())
            .unwrap_or_default();
        Tally::count(
            &candidates,
            self.votes.iter().filter(|vote| &vote.ballot_id == ballot_id),
        )
    }

    /// The whole ledger, in cast order.
    pub fn votes(&self) -> &[Vote] {
        &self.votes
    }

    /// Insert a raw ledger entry, bypassing the cast guards.
    #[cfg(test)]
    pub(crate) fn insert_vote(&mut self, vote: Vote) {
        self.votes.push(vote);
    }
}

impl Default for BallotStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Predicate for [`BallotStore::list`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BallotFilter {
    /// Only active ballots: what the voter dashboard shows.
    #[default]
    Active,
    /// Only closed ballots.
    Closed,
    /// Everything: what the admin dashboard shows.
    All,
}

impl BallotFilter {
    fn matches(self, state: BallotState) -> bool {
        match self {
            Self::Active => state == BallotState::Active,
            Self::Closed => state == BallotState::Closed,
            Self::All => true,
        }
    }
}
