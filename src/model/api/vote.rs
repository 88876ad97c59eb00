use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::ballot::Vote;
use crate::model::id::Id;

/// The `{success, message}` shape the voting screen renders inline after a
/// cast attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteResponse {
    pub success: bool,
    pub message: String,
}

impl From<Result<&Vote, Error>> for CastVoteResponse {
    fn from(result: Result<&Vote, Error>) -> Self {
        match result {
            Ok(_) => Self {
                success: true,
                message: "Vote cast successfully!".to_string(),
            },
            Err(err) => Self {
                success: false,
                message: err.to_string(),
            },
        }
    }
}

/// One row of a voter's history: the vote joined to its ballot title at
/// read time. A dangling ballot reference surfaces as a placeholder title
/// rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteHistoryEntry {
    pub vote_id: Id,
    pub ballot_title: String,
    pub candidate: String,
}

impl VoteHistoryEntry {
    /// Title shown when the referenced ballot no longer resolves.
    pub const UNKNOWN_BALLOT_TITLE: &'static str = "Unknown ballot";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_response_message() {
        let vote = Vote::example();
        let response = CastVoteResponse::from(Ok(&vote));
        assert!(response.success);
        assert_eq!(response.message, "Vote cast successfully!");
    }

    #[test]
    fn failure_responses_use_the_error_text() {
        let response = CastVoteResponse::from(Err(Error::AlreadyVoted));
        assert!(!response.success);
        assert_eq!(response.message, "You have already voted in this election.");

        let response = CastVoteResponse::from(Err(Error::NotLoggedIn));
        assert_eq!(response.message, "User not logged in.");
    }
}
