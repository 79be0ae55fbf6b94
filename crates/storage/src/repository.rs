use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracker_core::model::{Problem, ProblemId};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape for a problem.
///
/// This mirrors the domain `Problem` so repositories can serialize/deserialize
/// without leaking storage concerns into the domain layer. Every field falls
/// back to its default when missing or `null`, since the file may be edited
/// by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: ProblemId,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub difficulty: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ProblemRecord {
    #[must_use]
    pub fn from_problem(problem: &Problem) -> Self {
        Self {
            id: problem.id(),
            title: problem.title().to_owned(),
            difficulty: problem.difficulty().to_owned(),
            tags: problem.tags().to_vec(),
            date: problem.date().to_owned(),
            notes: problem.notes().to_owned(),
        }
    }

    /// Convert the record back into a domain `Problem`.
    ///
    /// Never fails: stored dates are carried as text and checked only when
    /// they are used.
    #[must_use]
    pub fn into_problem(self) -> Problem {
        Problem::from_persisted(
            self.id,
            self.title,
            self.difficulty,
            self.tags,
            self.date,
            self.notes,
        )
    }
}

/// Repository contract for the problem collection.
///
/// The collection is always read and written as a whole.
#[async_trait]
pub trait ProblemRepository: Send + Sync {
    /// Load every stored problem in file order.
    ///
    /// Returns an empty list when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if stored data exists but cannot be read or decoded.
    async fn load_problems(&self) -> Result<Vec<Problem>, StorageError>;

    /// Replace the stored collection with `problems`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the collection cannot be written.
    async fn save_problems(&self, problems: &[Problem]) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    problems: Arc<Mutex<Vec<ProblemRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            problems: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ProblemRepository for InMemoryRepository {
    async fn load_problems(&self) -> Result<Vec<Problem>, StorageError> {
        let guard = self
            .problems
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        Ok(guard.iter().cloned().map(ProblemRecord::into_problem).collect())
    }

    async fn save_problems(&self, problems: &[Problem]) -> Result<(), StorageError> {
        let mut guard = self
            .problems
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        *guard = problems.iter().map(ProblemRecord::from_problem).collect();
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub problems: Arc<dyn ProblemRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let problems: Arc<dyn ProblemRepository> = Arc::new(InMemoryRepository::new());
        Self { problems }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::model::ProblemDraft;

    fn build_problem(id: u64, date: &str) -> Problem {
        ProblemDraft {
            title: format!("Problem {id}"),
            difficulty: "Medium".into(),
            tags: "graph, bfs".into(),
            date: date.into(),
            notes: "revisit".into(),
        }
        .validate()
        .unwrap()
        .assign_id(ProblemId::new(id))
    }

    #[tokio::test]
    async fn empty_repository_loads_nothing() {
        let repo = InMemoryRepository::new();
        assert!(repo.load_problems().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_replaces_whole_collection() {
        let repo = InMemoryRepository::new();
        let first = vec![build_problem(1, "2024-01-01"), build_problem(2, "2024-01-02")];
        repo.save_problems(&first).await.unwrap();

        let second = vec![build_problem(3, "2024-02-01")];
        repo.save_problems(&second).await.unwrap();

        let loaded = repo.load_problems().await.unwrap();
        assert_eq!(loaded, second);
    }

    #[test]
    fn record_round_trips_problem_fields() {
        let problem = build_problem(5, "2024-03-04");
        let record = ProblemRecord::from_problem(&problem);
        assert_eq!(record.tags, vec!["graph".to_string(), "bfs".to_string()]);
        assert_eq!(record.into_problem(), problem);
    }

    #[test]
    fn record_tolerates_missing_fields() {
        let record: ProblemRecord = serde_json::from_str(r#"{"id": 4, "title": "Bare"}"#).unwrap();
        assert_eq!(record.id, ProblemId::new(4));
        assert_eq!(record.title, "Bare");
        assert!(record.tags.is_empty());
        assert_eq!(record.date, "");
    }

    #[test]
    fn record_treats_null_fields_as_missing() {
        let record: ProblemRecord = serde_json::from_str(
            r#"{"id": null, "title": "Nulls", "difficulty": null, "tags": null,
                "date": null, "notes": null}"#,
        )
        .unwrap();
        assert_eq!(record.id, ProblemId::default());
        assert_eq!(record.title, "Nulls");
        assert_eq!(record.difficulty, "");
        assert!(record.tags.is_empty());
        assert_eq!(record.notes, "");
    }

    #[test]
    fn record_rejects_negative_id() {
        assert!(serde_json::from_str::<ProblemRecord>(r#"{"id": -1}"#).is_err());
    }
}
