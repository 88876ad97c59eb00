use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// A unique identifier within one store collection.
///
/// IDs are short prefixed strings (`user002`, `vote003`, `cast001`). They are
/// only ever compared for equality; the numeric suffix exists so a sequence
/// can continue past pre-populated entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The trailing digits of the ID, if it ends in any.
    pub(crate) fn numeric_suffix(&self) -> Option<u32> {
        let tail_start = self
            .0
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(i, _)| i)?;
        self.0[tail_start..].parse().ok()
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Hands out unique prefixed IDs by auto-increment.
///
/// Each store collection owns one sequence, so generated IDs are
/// deterministic and unique within the collection.
#[derive(Debug, Clone)]
pub struct IdSequence {
    prefix: &'static str,
    next: u32,
}

impl IdSequence {
    /// Create a new sequence starting at the given value.
    pub fn new(prefix: &'static str, start: u32) -> Self {
        Self {
            prefix,
            next: start,
        }
    }

    /// Create a sequence that continues after the largest numeric suffix
    /// among `existing`, so generated IDs never collide with pre-populated
    /// entries.
    pub fn starting_after<'a>(
        prefix: &'static str,
        existing: impl IntoIterator<Item = &'a Id>,
    ) -> Self {
        let max = existing
            .into_iter()
            .filter_map(Id::numeric_suffix)
            .max()
            .unwrap_or(0);
        Self::new(prefix, max + 1)
    }

    /// Get the next ID in the sequence.
    pub fn next(&mut self) -> Id {
        let id = Id::new(format!("{}{:03}", self.prefix, self.next));
        self.next += 1;
        id
    }
}
