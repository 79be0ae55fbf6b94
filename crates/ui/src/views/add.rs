use std::io::{self, BufRead, Write};

use tracker_core::model::ProblemDraft;

use crate::console::Console;
use crate::context::AppContext;
use crate::views::ViewError;

pub const ADDED_MESSAGE: &str = "Problem added successfully!";
pub const CANCELLED_MESSAGE: &str = "Add cancelled.";

/// Ask for each field of a new problem in turn.
///
/// Returns `Ok(None)` if input ends before the form is complete.
///
/// # Errors
///
/// Returns any error raised by the console streams.
pub fn collect_draft<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<ProblemDraft>> {
    let Some(title) = console.prompt("Title: ")? else {
        return Ok(None);
    };
    let Some(difficulty) = console.prompt("Difficulty (Easy/Medium/Hard): ")? else {
        return Ok(None);
    };
    let Some(tags) = console.prompt("Tags (comma separated): ")? else {
        return Ok(None);
    };
    let Some(date) = console.prompt("Date (YYYY-MM-DD): ")? else {
        return Ok(None);
    };
    let Some(notes) = console.prompt("Notes: ")? else {
        return Ok(None);
    };

    Ok(Some(ProblemDraft {
        title,
        difficulty,
        tags,
        date,
        notes,
    }))
}

/// Store `draft` and return the confirmation text.
///
/// # Errors
///
/// Returns `ViewError::InvalidDate` for a bad date, or a load/save error.
pub async fn submit_draft(ctx: &AppContext, draft: ProblemDraft) -> Result<String, ViewError> {
    ctx.problems().add_problem(draft).await?;
    Ok(ADDED_MESSAGE.to_owned())
}
