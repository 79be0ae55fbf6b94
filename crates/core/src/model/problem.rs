use chrono::NaiveDate;
use thiserror::Error;

use crate::date::{DateParseError, parse_solved_date};
use crate::model::ids::ProblemId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProblemError {
    #[error("invalid date `{raw}`: {source}")]
    InvalidDate {
        raw: String,
        #[source]
        source: DateParseError,
    },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Raw user input for a new problem, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemDraft {
    pub title: String,
    pub difficulty: String,
    /// Comma-separated tag list.
    pub tags: String,
    pub date: String,
    pub notes: String,
}

impl ProblemDraft {
    /// Trim the input, split tags and check the date.
    ///
    /// Difficulty is free text and is not checked against any list.
    ///
    /// # Errors
    ///
    /// Returns `ProblemError::InvalidDate` if the date is not a strict
    /// `YYYY-MM-DD` calendar date.
    pub fn validate(self) -> Result<ValidatedProblem, ProblemError> {
        let date = self.date.trim().to_owned();
        if let Err(source) = parse_solved_date(&date) {
            return Err(ProblemError::InvalidDate { raw: date, source });
        }

        Ok(ValidatedProblem {
            title: self.title.trim().to_owned(),
            difficulty: self.difficulty.trim().to_owned(),
            tags: split_tags(&self.tags),
            date,
            notes: self.notes.trim().to_owned(),
        })
    }
}

/// A draft that passed validation and is waiting for its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedProblem {
    pub title: String,
    pub difficulty: String,
    pub tags: Vec<String>,
    pub date: String,
    pub notes: String,
}

impl ValidatedProblem {
    #[must_use]
    pub fn assign_id(self, id: ProblemId) -> Problem {
        Problem {
            id,
            title: self.title,
            difficulty: self.difficulty,
            tags: self.tags,
            date: self.date,
            notes: self.notes,
        }
    }
}

/// Split a comma-separated tag list, trimming each tag.
///
/// Blank tags at the end are dropped; blank tags between two others are
/// kept in place, so `"a,,b"` yields `["a", "", "b"]`.
#[must_use]
pub fn split_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = raw.split(',').map(|tag| tag.trim().to_owned()).collect();
    while tags.last().is_some_and(String::is_empty) {
        tags.pop();
    }
    tags
}

//
// ─── PROBLEM ───────────────────────────────────────────────────────────────────
//

/// One solved practice problem.
///
/// `date` is kept as text: records read back from disk may carry a date that
/// no longer parses, and those must survive a load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    id: ProblemId,
    title: String,
    difficulty: String,
    tags: Vec<String>,
    date: String,
    notes: String,
}

impl Problem {
    /// Rebuild a problem from storage without validation.
    #[must_use]
    pub fn from_persisted(
        id: ProblemId,
        title: String,
        difficulty: String,
        tags: Vec<String>,
        date: String,
        notes: String,
    ) -> Self {
        Self {
            id,
            title,
            difficulty,
            tags,
            date,
            notes,
        }
    }

    #[must_use]
    pub fn id(&self) -> ProblemId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The date as stored, which may not be a valid date.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// The solved date, or `None` when the stored text does not parse.
    #[must_use]
    pub fn solved_on(&self) -> Option<NaiveDate> {
        parse_solved_date(&self.date).ok()
    }
}
