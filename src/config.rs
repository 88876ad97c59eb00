use serde::Deserialize;

/// Application configuration. Becomes part of the root [`App`](crate::App)
/// state and is consulted by the stores.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_enforce_ballot_state")]
    enforce_ballot_state: bool,
}

impl Config {
    /// Whether casting a vote checks that the ballot is still active.
    ///
    /// With this off, votes on closed ballots are accepted (the legacy
    /// lenient behaviour). The policy is explicit configuration rather than
    /// an implicit choice.
    pub fn enforce_ballot_state(&self) -> bool {
        self.enforce_ballot_state
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enforce_ballot_state: true,
        }
    }
}

fn default_enforce_ballot_state() -> bool {
    true
}
