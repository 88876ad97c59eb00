use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::id::Id;

/// Core ballot data, as held in the ballot store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallotCore {
    pub title: String,
    pub description: String,
    /// Candidate names in display order. Order is significant: tallies and
    /// ranked breakdowns tie-break by position in this list.
    pub candidates: Vec<String>,
    pub state: BallotState,
}

impl BallotCore {
    /// Whether `name` is one of this ballot's candidates.
    pub fn has_candidate(&self, name: &str) -> bool {
        self.candidates.iter().any(|candidate| candidate == name)
    }
}

/// States in the ballot lifecycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallotState {
    /// Open for voting. The only state ballots are created in.
    Active,
    /// No longer accepting votes.
    Closed,
}

/// A validated request to create a ballot.
///
/// Candidates arrive from the form as one comma-separated string; parsing
/// trims each entry and discards empties, so `"A, B , C"` and `"A,B,C"`
/// produce the same candidate list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallotSpec {
    pub title: String,
    pub description: String,
    pub candidates: Vec<String>,
}

impl BallotSpec {
    /// Validate raw form input. Fails without side effects if the title or
    /// description is empty after trimming, or fewer than two candidate
    /// names remain after parsing.
    pub fn parse(title: &str, description: &str, candidates_csv: &str) -> Result<Self> {
        let title = title.trim();
        let description = description.trim();
        if title.is_empty() {
            return Err(Error::Validation("title must not be empty".to_string()));
        }
        if description.is_empty() {
            return Err(Error::Validation(
                "description must not be empty".to_string(),
            ));
        }

        let candidates: Vec<String> = candidates_csv
            .split(',')
            .map(str::trim)
            .filter(|candidate| !candidate.is_empty())
            .map(str::to_string)
            .collect();
        if candidates.len() < 2 {
            return Err(Error::Validation(
                "at least two candidates are required".to_string(),
            ));
        }

        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
            candidates,
        })
    }
}

impl From<BallotSpec> for BallotCore {
    fn from(spec: BallotSpec) -> Self {
        Self {
            title: spec.title,
            description: spec.description,
            candidates: spec.candidates,
            state: BallotState::Active,
        }
    }
}

/// A ballot from the store, with its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    pub id: Id,
    #[serde(flatten)]
    pub ballot: BallotCore,
}

impl Deref for Ballot {
    type Target = BallotCore;

    fn deref(&self) -> &Self::Target {
        &self.ballot
    }
}
