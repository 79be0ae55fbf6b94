#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::{DEFAULT_DATA_FILE, JsonFileRepository};
pub use repository::{InMemoryRepository, ProblemRecord, ProblemRepository, Storage, StorageError};
