mod add;
mod dashboard;
mod list;
mod state;

pub use add::{ADDED_MESSAGE, CANCELLED_MESSAGE, collect_draft, submit_draft};
pub use dashboard::{dashboard_view, render_dashboard};
pub use list::{EMPTY_LIST_MESSAGE, list_view, render_problem_list};
pub use state::{INVALID_DATE_MESSAGE, ViewError};
