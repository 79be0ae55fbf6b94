use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::DashboardVm;

/// Load the collection and render the dashboard figures.
///
/// # Errors
///
/// Returns `ViewError::Load` if the collection cannot be read.
pub async fn dashboard_view(ctx: &AppContext) -> Result<String, ViewError> {
    let stats = ctx.dashboard().summary().await?;
    Ok(render_dashboard(DashboardVm::from(stats)))
}

#[must_use]
pub fn render_dashboard(vm: DashboardVm) -> String {
    format!(
        "Total Problems Solved: {}\nLongest Consecutive Day Streak: {} day(s)",
        vm.total, vm.longest_streak
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_total_and_streak() {
        let vm = DashboardVm {
            total: 5,
            longest_streak: 3,
        };
        assert_eq!(
            render_dashboard(vm),
            "Total Problems Solved: 5\nLongest Consecutive Day Streak: 3 day(s)"
        );
    }
}
