use crate::model::Problem;
use crate::streak::longest_streak;

/// Dashboard figures for a record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProblemStats {
    pub total: usize,
    pub longest_streak: u32,
}

impl ProblemStats {
    #[must_use]
    pub fn from_problems(problems: &[Problem]) -> Self {
        Self {
            total: problems.len(),
            longest_streak: longest_streak(problems),
        }
    }
}
