//! Where the tracker reads the current time from.
//!
//! The only consumer is id generation, which works in Unix milliseconds.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// Wall-clock time.
    #[default]
    System,
    /// A clock that stays put until moved with [`Clock::advance`].
    Pinned(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    #[must_use]
    pub fn pinned(at: DateTime<Utc>) -> Self {
        Self::Pinned(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Self::System => Utc::now(),
            Self::Pinned(at) => *at,
        }
    }

    /// The current instant in Unix milliseconds, the unit problem ids use.
    ///
    /// Instants before the epoch read as 0.
    #[must_use]
    pub fn now_millis(&self) -> u64 {
        u64::try_from(self.now().timestamp_millis()).unwrap_or(0)
    }

    /// Move a pinned clock forward. The system clock ignores this.
    pub fn advance(&mut self, delta: Duration) {
        if let Self::Pinned(at) = self {
            *at += delta;
        }
    }
}

/// 2023-11-14T22:13:20Z, the instant test clocks are pinned to.
pub const TEST_EPOCH_SECS: i64 = 1_700_000_000;

/// The first id a pinned test clock hands out.
pub const TEST_EPOCH_MILLIS: u64 = 1_700_000_000_000;

#[must_use]
pub fn test_now() -> DateTime<Utc> {
    DateTime::from_timestamp(TEST_EPOCH_SECS, 0).unwrap_or_default()
}

/// A clock pinned at [`test_now`].
#[must_use]
pub fn test_clock() -> Clock {
    Clock::pinned(test_now())
}
