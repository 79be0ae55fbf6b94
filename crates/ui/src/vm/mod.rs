mod dashboard_vm;
mod problem_vm;

pub use dashboard_vm::DashboardVm;
pub use problem_vm::{ProblemRowVm, map_problem_rows};
