use std::path::PathBuf;
use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::dashboard_service::DashboardService;
use crate::problem_service::ProblemService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    problems: Arc<ProblemService>,
    dashboard: Arc<DashboardService>,
}

impl AppServices {
    /// Build services over the given storage.
    #[must_use]
    pub fn new(storage: &Storage, clock: Clock) -> Self {
        let problems = Arc::new(ProblemService::new(clock, Arc::clone(&storage.problems)));
        let dashboard = Arc::new(DashboardService::new(Arc::clone(&storage.problems)));
        Self {
            problems,
            dashboard,
        }
    }

    /// Build services backed by the JSON data file at `path`.
    #[must_use]
    pub fn json_file(path: impl Into<PathBuf>, clock: Clock) -> Self {
        Self::new(&Storage::json_file(path), clock)
    }

    #[must_use]
    pub fn problems(&self) -> Arc<ProblemService> {
        Arc::clone(&self.problems)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }
}
