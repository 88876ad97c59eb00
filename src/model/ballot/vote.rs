use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::model::id::Id;

/// Core vote data: one ledger entry recording one voter's choice on one
/// ballot. Entries are append-only, never mutated or deleted.
///
/// The voter and ballot references are non-owning IDs; their integrity is
/// checked when the ledger is read (tallies, history), not structurally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteCore {
    pub voter_id: Id,
    pub ballot_id: Id,
    pub candidate: String,
}

/// A vote from the ledger, with its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub id: Id,
    #[serde(flatten)]
    pub vote: VoteCore,
}

impl Deref for Vote {
    type Target = VoteCore;

    fn deref(&self) -> &Self::Target {
        &self.vote
    }
}
