use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::time::Clock;

/// Unique identifier for a tracked Problem.
///
/// Ids are derived from the creation time in Unix milliseconds, bumped past
/// any id already present so they stay unique and increasing within a file.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemId(u64);

impl ProblemId {
    /// Creates a new `ProblemId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Generates the id for a record created now according to `clock`.
    ///
    /// Uses the creation timestamp in milliseconds unless that would not be
    /// greater than every id in `existing`, in which case the largest existing
    /// id plus one is used instead.
    #[must_use]
    pub fn generate<I>(clock: &Clock, existing: I) -> Self
    where
        I: IntoIterator<Item = ProblemId>,
    {
        let stamp = clock.now_millis();
        let next_after_existing = existing
            .into_iter()
            .map(|id| id.0.saturating_add(1))
            .max()
            .unwrap_or(0);
        Self(stamp.max(next_after_existing))
    }
}

impl fmt::Debug for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProblemId({})", self.0)
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for ProblemId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(ProblemId::new)
            .map_err(|_| ParseIdError {
                kind: "ProblemId".to_string(),
            })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
