//! In-memory application core for the VoteKaro mobile voting app.
//!
//! Two stores back the whole application: the identity store (registered
//! accounts plus the single current-identity slot) and the ballot store
//! (ballot definitions, the append-only vote ledger, and on-demand tallies).
//! The presentation layer is an external collaborator that calls these
//! operations in-process and renders their return values; nothing here
//! persists, listens on a network, or runs off the caller's thread.

pub mod config;
pub mod error;
pub mod model;

pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::model::api::{BallotDescription, CastVoteResponse, IdentityProfile, VoteHistoryEntry};
pub use crate::model::ballot::{
    Ballot, BallotCore, BallotFilter, BallotSpec, BallotState, BallotStore, RankedCandidate,
    Tally, Vote, VoteCore,
};
pub use crate::model::id::Id;
pub use crate::model::identity::{Credentials, Identity, IdentityCore, IdentityStore};

/// Username of the demo administrator account.
pub const DEMO_ADMIN_USERNAME: &str = "admin";
/// Username of the demo voter account.
pub const DEMO_VOTER_USERNAME: &str = "testuser";
/// Credential shared by both demo accounts.
pub const DEMO_CREDENTIAL: &str = "password";

/// Root application state: configuration plus the two stores, constructed
/// once at process start and passed by handle to whatever drives it.
///
/// There is deliberately no ambient/singleton access; tests construct a
/// fresh `App` per case. Methods on `App` cover the operations that span
/// both stores (the ballot store only ever *reads* the current identity);
/// everything else is reached through the store handles.
#[derive(Debug)]
pub struct App {
    config: Config,
    identities: IdentityStore,
    ballots: BallotStore,
}

impl App {
    /// An empty application with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            identities: IdentityStore::new(),
            ballots: BallotStore::new(),
        }
    }

    /// An application pre-populated with the demo accounts and ballots the
    /// mobile app ships with. All state resets to exactly this on restart.
    pub fn with_demo_data(config: Config) -> Self {
        let mut admin = IdentityCore::from(Credentials {
            username: DEMO_ADMIN_USERNAME.to_string(),
            credential: DEMO_CREDENTIAL.to_string(),
        });
        admin.is_administrator = true;
        admin.voter_card_id = "ADMIN".to_string();

        let mut voter = IdentityCore::from(Credentials {
            username: DEMO_VOTER_USERNAME.to_string(),
            credential: DEMO_CREDENTIAL.to_string(),
        });
        voter.voter_card_id = "VOTER12345".to_string();

        let identities = vec![
            Identity {
                id: Id::from("admin001"),
                identity: admin,
            },
            Identity {
                id: Id::from("user001"),
                identity: voter,
            },
        ];

        let ballots = vec![
            Ballot {
                id: Id::from("vote001"),
                ballot: BallotCore {
                    title: "Favorite Programming Language".to_string(),
                    description: "Which language do you prefer for development?".to_string(),
                    candidates: vec![
                        "JavaScript".to_string(),
                        "Python".to_string(),
                        "Java".to_string(),
                        "C#".to_string(),
                    ],
                    state: BallotState::Active,
                },
            },
            Ballot {
                id: Id::from("vote002"),
                ballot: BallotCore {
                    title: "Best Mobile OS".to_string(),
                    description: "Choose your preferred mobile operating system.".to_string(),
                    candidates: vec!["Android".to_string(), "iOS".to_string()],
                    state: BallotState::Active,
                },
            },
        ];

        Self {
            config,
            identities: IdentityStore::with_identities(identities),
            ballots: BallotStore::with_ballots(ballots),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle on the identity store (login, signup, logout, lookups).
    pub fn identities(&self) -> &IdentityStore {
        &self.identities
    }

    pub fn identities_mut(&mut self) -> &mut IdentityStore {
        &mut self.identities
    }

    /// Handle on the ballot store (listing, lookups, tallies).
    pub fn ballots(&self) -> &BallotStore {
        &self.ballots
    }

    pub fn ballots_mut(&mut self) -> &mut BallotStore {
        &mut self.ballots
    }

    /// Create a ballot as the currently authenticated identity.
    pub fn create_ballot(
        &mut self,
        title: &str,
        description: &str,
        candidates_csv: &str,
    ) -> Result<&Ballot> {
        let caller = self.identities.current_identity();
        self.ballots
            .create(caller, title, description, candidates_csv)
    }

    /// Cast a vote as the currently authenticated identity.
    pub fn cast_vote(&mut self, ballot_id: &Id, candidate: &str) -> Result<&Vote> {
        let caller = self.identities.current_identity();
        self.ballots
            .cast_vote(caller, ballot_id, candidate, &self.config)
    }

    /// [`cast_vote`](Self::cast_vote), shaped for direct rendering.
    pub fn cast_vote_response(&mut self, ballot_id: &Id, candidate: &str) -> CastVoteResponse {
        self.cast_vote(ballot_id, candidate).into()
    }

    /// Whether the currently authenticated identity has voted on the ballot.
    /// Anonymous callers have no votes.
    pub fn has_voted(&self, ballot_id: &Id) -> bool {
        self.identities
            .current_identity()
            .map_or(false, |identity| {
                self.ballots.has_voted(&identity.id, ballot_id)
            })
    }

    /// Tally the votes for a ballot.
    pub fn results(&self, ballot_id: &Id) -> Tally {
        self.ballots.results(ballot_id)
    }

    /// The currently authenticated identity, shaped for the profile screen.
    pub fn current_profile(&self) -> Option<IdentityProfile> {
        self.identities.current_identity().map(IdentityProfile::from)
    }

    /// A voter's history, most recent first, with each vote joined to its
    /// ballot title at read time.
    pub fn vote_history(&self, voter_id: &Id) -> Vec<VoteHistoryEntry> {
        self.ballots
            .votes_by(voter_id)
            .into_iter()
            .rev()
            .map(|vote| VoteHistoryEntry {
                vote_id: vote.id.clone(),
                ballot_title: self
                    .ballots
                    .get(&vote.ballot_id)
                    .map(|ballot| ballot.title.clone())
                    .unwrap_or_else(|| VoteHistoryEntry::UNKNOWN_BALLOT_TITLE.to_string()),
                candidate: vote.candidate.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_app() -> App {
        App::with_demo_data(Config::default())
    }

    fn login(app: &mut App, username: &str) {
        app.identities_mut().login(username, DEMO_CREDENTIAL).unwrap();
    }

    #[test]
    fn demo_data_shape() {
        let app = demo_app();
        assert_eq!(app.identities().identities().len(), 2);

        let listed = app.ballots().list(BallotFilter::All);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, Id::from("vote001"));
        assert_eq!(listed[0].candidates.len(), 4);
        assert_eq!(listed[1].candidates, vec!["Android", "iOS"]);

        // Both demo accounts can log in with the shipped credential.
        let mut app = app;
        login(&mut app, DEMO_ADMIN_USERNAME);
        assert!(app.current_profile().unwrap().is_administrator);
        login(&mut app, DEMO_VOTER_USERNAME);
        let profile = app.current_profile().unwrap();
        assert!(!profile.is_administrator);
        assert_eq!(profile.voter_card_id, "VOTER12345");
    }

    #[test]
    fn seed_ballot_voting_scenario() {
        let mut app = demo_app();
        let ballot_id = Id::from("vote001");
        login(&mut app, DEMO_VOTER_USERNAME);

        // First cast lands.
        app.cast_vote(&ballot_id, "Python").unwrap();
        let tally = app.results(&ballot_id);
        assert_eq!(tally.total_votes, 1);
        assert_eq!(tally.results["JavaScript"], 0);
        assert_eq!(tally.results["Python"], 1);
        assert_eq!(tally.results["Java"], 0);
        assert_eq!(tally.results["C#"], 0);
        assert!(app.has_voted(&ballot_id));

        // A second cast by the same voter fails with the inline message and
        // leaves the tally unchanged, whatever the candidate.
        let response = app.cast_vote_response(&ballot_id, "Java");
        assert!(!response.success);
        assert_eq!(response.message, "You have already voted in this election.");
        assert_eq!(app.results(&ballot_id), tally);
    }

    #[test]
    fn admin_creates_ballot_through_the_app() {
        let mut app = demo_app();
        login(&mut app, DEMO_ADMIN_USERNAME);

        app.create_ballot("T", "D", "A, B").unwrap();

        let listed = app.ballots().list(BallotFilter::All);
        let created = listed.iter().find(|ballot| ballot.title == "T").unwrap();
        assert_eq!(created.candidates, vec!["A", "B"]);
        assert_eq!(created.state, BallotState::Active);
    }

    #[test]
    fn non_administrators_cannot_create_ballots() {
        let mut app = demo_app();

        // Anonymous.
        assert_eq!(
            app.create_ballot("T", "D", "A,B").unwrap_err(),
            Error::NotAuthorized
        );

        // Regular voter.
        login(&mut app, DEMO_VOTER_USERNAME);
        assert_eq!(
            app.create_ballot("T", "D", "A,B").unwrap_err(),
            Error::NotAuthorized
        );

        assert_eq!(app.ballots().list(BallotFilter::All).len(), 2);
    }

    #[test]
    fn anonymous_cast_is_rejected() {
        let mut app = demo_app();
        let response = app.cast_vote_response(&Id::from("vote001"), "Python");
        assert!(!response.success);
        assert_eq!(response.message, "User not logged in.");
        assert!(!app.has_voted(&Id::from("vote001")));
    }

    #[test]
    fn logout_then_login_keeps_votes() {
        let mut app = demo_app();
        let ballot_id = Id::from("vote001");
        login(&mut app, DEMO_VOTER_USERNAME);
        app.cast_vote(&ballot_id, "Python").unwrap();

        app.identities_mut().logout();
        assert!(!app.has_voted(&ballot_id)); // Anonymous: no votes.

        login(&mut app, DEMO_VOTER_USERNAME);
        assert!(app.has_voted(&ballot_id));
        assert_eq!(app.results(&ballot_id).total_votes, 1);
    }

    #[test]
    fn signup_votes_and_appears_in_results() {
        let mut app = demo_app();
        let ballot_id = Id::from("vote002");

        app.identities_mut().signup("newvoter", "hunter22").unwrap();
        app.cast_vote(&ballot_id, "Android").unwrap();

        let tally = app.results(&ballot_id);
        assert_eq!(tally.total_votes, 1);
        assert_eq!(tally.results["Android"], 1);
        assert_eq!(tally.results["iOS"], 0);
    }

    #[test]
    fn vote_history_is_most_recent_first_with_titles() {
        let mut app = demo_app();
        login(&mut app, DEMO_VOTER_USERNAME);
        app.cast_vote(&Id::from("vote001"), "Python").unwrap();
        app.cast_vote(&Id::from("vote002"), "iOS").unwrap();

        let history = app.vote_history(&Id::from("user001"));
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].ballot_title, "Best Mobile OS");
        assert_eq!(history[0].candidate, "iOS");
        assert_eq!(history[1].ballot_title, "Favorite Programming Language");
    }

    #[test]
    fn vote_history_tolerates_dangling_ballot_references() {
        let mut app = demo_app();
        app.ballots_mut().insert_vote(Vote::dangling_example());

        let history = app.vote_history(&Id::from("user001"));
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].ballot_title, VoteHistoryEntry::UNKNOWN_BALLOT_TITLE);
    }

    #[test]
    fn ranked_results_for_seed_ballot() {
        let mut app = demo_app();
        login(&mut app, DEMO_VOTER_USERNAME);
        app.cast_vote(&Id::from("vote001"), "Java").unwrap();

        let ranked = app.results(&Id::from("vote001")).ranked();
        assert_eq!(ranked[0].candidate, "Java");
        assert_eq!(ranked[0].votes, 1);
        // The zero-count remainder keeps ballot order.
        let rest: Vec<&str> = ranked[1..].iter().map(|r| r.candidate.as_str()).collect();
        assert_eq!(rest, vec!["JavaScript", "Python", "C#"]);
    }
}
