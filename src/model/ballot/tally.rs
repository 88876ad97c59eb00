use std::collections::HashMap;

use serde::Serialize;

use super::vote::Vote;

/// Per-candidate vote counts for one ballot, derived on demand from the
/// ledger. Nothing is cached; every call recounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    /// Every vote for the ballot, including stray votes whose candidate is
    /// not on the candidate list.
    pub total_votes: usize,
    /// Counts keyed by candidate name, initialised to zero for every
    /// candidate on the ballot. Stray candidates get no entry.
    pub results: HashMap<String, u32>,
    /// Candidate display order, kept for ranked breakdowns.
    #[serde(skip)]
    order: Vec<String>,
}

impl Tally {
    /// Count `votes` against a ballot's candidate list.
    pub fn count<'a>(candidates: &[String], votes: impl IntoIterator<Item = &'a Vote>) -> Self {
        let mut results: HashMap<String, u32> = candidates
            .iter()
            .map(|candidate| (candidate.clone(), 0))
            .collect();
        let mut total_votes = 0;
        for vote in votes {
            total_votes += 1;
            // Stray candidates count towards the total but have no bucket.
            if let Some(count) = results.get_mut(&vote.candidate) {
                *count += 1;
            }
        }
        Self {
            total_votes,
            results,
            order: candidates.to_vec(),
        }
    }

    /// Candidates with their counts, highest first. The sort is stable over
    /// the candidate list, so ties keep display order.
    pub fn ranked(&self) -> Vec<RankedCandidate> {
        let mut ranked: Vec<RankedCandidate> = self
            .order
            .iter()
            .map(|name| RankedCandidate {
                candidate: name.clone(),
                votes: self.results.get(name).copied().unwrap_or(0),
            })
            .collect();
        ranked.sort_by(|a, b| b.votes.cmp(&a.votes));
        ranked
    }
}

/// One row of a ranked results breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    pub candidate: String,
    pub votes: u32,
}
