use std::sync::Arc;

use storage::repository::ProblemRepository;
use tracing::debug;
use tracker_core::ProblemStats;

use crate::error::DashboardServiceError;

/// Computes dashboard figures from the stored collection.
#[derive(Clone)]
pub struct DashboardService {
    problems: Arc<dyn ProblemRepository>,
}

impl DashboardService {
    #[must_use]
    pub fn new(problems: Arc<dyn ProblemRepository>) -> Self {
        Self { problems }
    }

    /// Total count and longest daily streak.
    ///
    /// # Errors
    ///
    /// Returns `DashboardServiceError::Load` if the collection cannot be read.
    pub async fn summary(&self) -> Result<ProblemStats, DashboardServiceError> {
        let problems = self
            .problems
            .load_problems()
            .await
            .map_err(DashboardServiceError::Load)?;
        let stats = ProblemStats::from_problems(&problems);
        debug!(total = stats.total, longest_streak = stats.longest_streak, "dashboard computed");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use storage::repository::InMemoryRepository;
    use tracker_core::model::{Problem, ProblemId};

    fn stored(id: u64, date: &str) -> Problem {
        Problem::from_persisted(
            ProblemId::new(id),
            format!("Problem {id}"),
            "Hard".into(),
            vec!["dp".into()],
            date.into(),
            String::new(),
        )
    }

    #[tokio::test]
    async fn empty_collection_has_zero_summary() {
        let service = DashboardService::new(Arc::new(InMemoryRepository::new()));
        assert_eq!(service.summary().await.unwrap(), ProblemStats::default());
    }

    #[tokio::test]
    async fn summary_counts_everything_but_streaks_only_valid_dates() {
        let repo = Arc::new(InMemoryRepository::new());
        repo.save_problems(&[
            stored(1, "2024-01-01"),
            stored(2, "2024-01-02"),
            stored(3, "02/01/2024"),
            stored(4, "2024-01-05"),
            stored(5, "2024-01-06"),
            stored(6, "2024-01-07"),
        ])
        .await
        .unwrap();

        let service = DashboardService::new(repo);
        let stats = service.summary().await.unwrap();
        assert_eq!(stats.total, 6);
        assert_eq!(stats.longest_streak, 3);
    }
}
