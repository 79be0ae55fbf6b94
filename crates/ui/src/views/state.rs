use services::{DashboardServiceError, ProblemServiceError};

pub const INVALID_DATE_MESSAGE: &str = "Invalid date format. Please use YYYY-MM-DD.";

/// Failure of a user action, reduced to what the user needs to read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    InvalidDate,
    Load(String),
    Save(String),
    Unknown(String),
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ViewError::InvalidDate => INVALID_DATE_MESSAGE.to_owned(),
            ViewError::Load(cause) => format!("Error loading problems: {cause}"),
            ViewError::Save(cause) => format!("Error saving problems: {cause}"),
            ViewError::Unknown(cause) => format!("Something went wrong: {cause}"),
        }
    }
}

impl From<ProblemServiceError> for ViewError {
    fn from(err: ProblemServiceError) -> Self {
        match err {
            ProblemServiceError::Problem(_) => ViewError::InvalidDate,
            ProblemServiceError::Load(e) => ViewError::Load(e.to_string()),
            ProblemServiceError::Save(e) => ViewError::Save(e.to_string()),
            other => ViewError::Unknown(other.to_string()),
        }
    }
}

impl From<DashboardServiceError> for ViewError {
    fn from(err: DashboardServiceError) -> Self {
        match err {
            DashboardServiceError::Load(e) => ViewError::Load(e.to_string()),
            other => ViewError::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::StorageError;

    #[test]
    fn storage_failures_keep_their_cause() {
        let err = ViewError::from(ProblemServiceError::Save(StorageError::Io(
            "disk full".into(),
        )));
        assert_eq!(err.message(), "Error saving problems: io error: disk full");

        let err = ViewError::from(DashboardServiceError::Load(StorageError::Serialization(
            "eof".into(),
        )));
        assert_eq!(err.message(), "Error loading problems: serialization error: eof");
    }
}
