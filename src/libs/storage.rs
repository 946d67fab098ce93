//! Local durable storage for the task sequence.
//!
//! The whole snapshot is serialized into one named JSON file in the
//! application data directory. The format is field-named and
//! forward-compatible: unknown fields are ignored on read and missing
//! optional fields are defaulted, so older files keep loading after the
//! record gains new fields.

use crate::libs::data_storage::DataStorage;
use crate::libs::task::Task;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

pub const TASKS_FILE_NAME: &str = "tasks.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("task file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("task file is unreadable: {0}")]
    Io(#[from] std::io::Error),
}

/// The named blob holding the serialized task sequence.
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(TASKS_FILE_NAME)?;
        Ok(Self { path })
    }

    /// Loads the task sequence. A missing file reads as an empty sequence.
    pub fn load(&self) -> Result<Vec<Task>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Rewrites the blob with the full task sequence.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
