#![forbid(unsafe_code)]

pub mod date;
pub mod model;
pub mod stats;
pub mod streak;
pub mod time;

pub use stats::ProblemStats;
pub use streak::{longest_streak, longest_streak_in};
pub use time::Clock;
