use tracker_core::ProblemStats;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub total: usize,
    pub longest_streak: u32,
}

impl From<ProblemStats> for DashboardVm {
    fn from(stats: ProblemStats) -> Self {
        Self {
            total: stats.total,
            longest_streak: stats.longest_streak,
        }
    }
}
