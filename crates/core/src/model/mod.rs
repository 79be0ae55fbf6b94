mod ids;
mod problem;

pub use ids::{ParseIdError, ProblemId};
pub use problem::{Problem, ProblemDraft, ProblemError, ValidatedProblem, split_tags};
