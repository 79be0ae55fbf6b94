use std::fmt::Write as _;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{ProblemRowVm, map_problem_rows};

pub const EMPTY_LIST_MESSAGE: &str = "No problems added yet.";
const SEPARATOR: &str = "---------------------------------";

/// Load every problem and render the list.
///
/// # Errors
///
/// Returns `ViewError::Load` if the collection cannot be read.
pub async fn list_view(ctx: &AppContext) -> Result<String, ViewError> {
    let problems = ctx.problems().list_problems().await?;
    Ok(render_problem_list(&map_problem_rows(&problems)))
}

#[must_use]
pub fn render_problem_list(rows: &[ProblemRowVm]) -> String {
    if rows.is_empty() {
        return EMPTY_LIST_MESSAGE.to_owned();
    }

    let mut out = String::new();
    for row in rows {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "ID: {}", row.id);
        let _ = writeln!(out, "Title: {}", row.title);
        let _ = writeln!(out, "Difficulty: {}", row.difficulty);
        let _ = writeln!(out, "Date: {}", row.date);
        let _ = writeln!(out, "Tags: {}", row.tags);
        let _ = writeln!(out, "Notes: {}", row.notes);
        let _ = writeln!(out, "{SEPARATOR}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_placeholder() {
        assert_eq!(render_problem_list(&[]), EMPTY_LIST_MESSAGE);
    }

    #[test]
    fn renders_fixed_layout_per_record() {
        let row = ProblemRowVm {
            id: "1700000000000".into(),
            title: "Two Sum".into(),
            difficulty: "Easy".into(),
            date: "2024-01-01".into(),
            tags: "array, hash map".into(),
            notes: "one pass".into(),
        };
        let expected = "\
ID: 1700000000000
Title: Two Sum
Difficulty: Easy
Date: 2024-01-01
Tags: array, hash map
Notes: one pass
---------------------------------
";
        assert_eq!(render_problem_list(&[row]), expected);
    }
}
