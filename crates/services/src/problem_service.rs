use std::sync::Arc;

use storage::repository::ProblemRepository;
use tracing::{debug, info};
use tracker_core::model::{Problem, ProblemDraft, ProblemId};

use crate::Clock;
use crate::error::ProblemServiceError;

/// Orchestrates adding and listing problems.
///
/// Every call reads the whole collection; `add_problem` writes it back.
#[derive(Clone)]
pub struct ProblemService {
    clock: Clock,
    problems: Arc<dyn ProblemRepository>,
}

impl ProblemService {
    #[must_use]
    pub fn new(clock: Clock, problems: Arc<dyn ProblemRepository>) -> Self {
        Self { clock, problems }
    }

    /// Validate `draft`, append it to the stored collection and save.
    ///
    /// The draft is checked before storage is read, so invalid input never
    /// touches the file. A collection that fails to load is not overwritten.
    ///
    /// # Errors
    ///
    /// Returns `ProblemServiceError::Problem` for validation failures.
    /// Returns `ProblemServiceError::Load` or `ProblemServiceError::Save` if
    /// persistence fails.
    pub async fn add_problem(&self, draft: ProblemDraft) -> Result<Problem, ProblemServiceError> {
        let validated = draft.validate()?;

        let mut problems = self
            .problems
            .load_problems()
            .await
            .map_err(ProblemServiceError::Load)?;

        let id = ProblemId::generate(&self.clock, problems.iter().map(Problem::id));
        let problem = validated.assign_id(id);
        problems.push(problem.clone());

        self.problems
            .save_problems(&problems)
            .await
            .map_err(ProblemServiceError::Save)?;

        info!(id = %problem.id(), total = problems.len(), "problem added");
        Ok(problem)
    }

    /// List every stored problem in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `ProblemServiceError::Load` if the collection cannot be read.
    pub async fn list_problems(&self) -> Result<Vec<Problem>, ProblemServiceError> {
        let problems = self
            .problems
            .load_problems()
            .await
            .map_err(ProblemServiceError::Load)?;
        debug!(count = problems.len(), "listed problems");
        Ok(problems)
    }
}
