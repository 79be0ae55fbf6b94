//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use tracker_core::model::ProblemError;

/// Errors emitted by `ProblemService`.
///
/// Load and save failures are kept apart so callers can tell whether the
/// stored collection was touched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProblemServiceError {
    #[error(transparent)]
    Problem(#[from] ProblemError),
    #[error(transparent)]
    Load(StorageError),
    #[error(transparent)]
    Save(StorageError),
}

/// Errors emitted by `DashboardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DashboardServiceError {
    #[error(transparent)]
    Load(StorageError),
}
