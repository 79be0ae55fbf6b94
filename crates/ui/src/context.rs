use std::sync::Arc;

use services::{AppServices, DashboardService, ProblemService};

/// Services the views call into.
#[derive(Clone)]
pub struct AppContext {
    problems: Arc<ProblemService>,
    dashboard: Arc<DashboardService>,
}

impl AppContext {
    #[must_use]
    pub fn new(services: &AppServices) -> Self {
        Self {
            problems: services.problems(),
            dashboard: services.dashboard(),
        }
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
