use serde::{Deserialize, Serialize};

use crate::model::ballot::{Ballot, BallotState};
use crate::model::id::Id;

/// A ballot as exposed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallotDescription {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub candidates: Vec<String>,
    pub state: BallotState,
}

impl From<&Ballot> for BallotDescription {
    fn from(ballot: &Ballot) -> Self {
        Self {
            id: ballot.id.clone(),
            title: ballot.title.clone(),
            description: ballot.description.clone(),
            candidates: ballot.candidates.clone(),
            state: ballot.state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_round_trips() {
        let description = BallotDescription::from(&Ballot::example());
        let json = serde_json::to_string(&description).unwrap();
        assert!(json.contains(r#""state":"active""#));
        let back: BallotDescription = serde_json::from_str(&json).unwrap();
        assert_eq!(back, description);
    }
}
