use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};
use tracker_core::model::Problem;

use crate::repository::{ProblemRecord, ProblemRepository, Storage, StorageError};

/// File name used when no data file is configured.
pub const DEFAULT_DATA_FILE: &str = "problems.json";

/// Problem collection stored as a single JSON array on disk.
///
/// Every load reads the whole file and every save rewrites it. There is no
/// locking; two processes saving at once will race and the last rename wins.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.into());
        name.push(format!(".tmp.{}", std::process::id()));
        self.path.with_file_name(name)
    }
}

fn io_err(path: &Path, e: &std::io::Error) -> StorageError {
    StorageError::Io(format!("{}: {e}", path.display()))
}

#[async_trait]
impl ProblemRepository for JsonFileRepository {
    async fn load_problems(&self) -> Result<Vec<Problem>, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "data file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read data file");
                return Err(io_err(&self.path, &e));
            }
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<ProblemRecord> = serde_json::from_str(&raw).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "failed to decode data file");
            StorageError::Serialization(format!("{}: {e}", self.path.display()))
        })?;

        debug!(path = %self.path.display(), count = records.len(), "loaded problems");
        Ok(records.into_iter().map(ProblemRecord::into_problem).collect())
    }

    async fn save_problems(&self, problems: &[Problem]) -> Result<(), StorageError> {
        let records: Vec<ProblemRecord> =
            problems.iter().map(ProblemRecord::from_problem).collect();
        let body = serde_json::to_string_pretty(&records)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_err(parent, &e))?;
        }

        // Write beside the target, then rename over it so the file is never
        // seen half-written.
        let tmp_path = self.temp_path();
        if let Err(e) = tokio::fs::write(&tmp_path, body.as_bytes()).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            warn!(path = %tmp_path.display(), error = %e, "failed to write data file");
            return Err(io_err(&tmp_path, &e));
        }
        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            warn!(path = %self.path.display(), error = %e, "failed to replace data file");
            return Err(io_err(&self.path, &e));
        }

        debug!(path = %self.path.display(), count = records.len(), "saved problems");
        Ok(())
    }
}

impl Storage {
    /// Build a `Storage` backed by the JSON file at `path`.
    ///
    /// Nothing is touched on disk until the first load or save.
    #[must_use]
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        let problems: Arc<dyn ProblemRepository> = Arc::new(JsonFileRepository::new(path));
        Self { problems }
    }
}
