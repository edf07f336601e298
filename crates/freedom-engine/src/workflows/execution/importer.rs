use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::info;

use super::domain::{ExecutionError, NewTask, TaskBoard};
use crate::workflows::Priority;

#[derive(Debug, thiserror::Error)]
pub enum TaskImportError {
    #[error("failed to read task export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid task CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unknown priority '{value}'")]
    InvalidPriority { row: usize, value: String },
    #[error("row {row}: {source}")]
    Task {
        row: usize,
        #[source]
        source: ExecutionError,
    },
}

/// Loads a task list from a spreadsheet export with
/// `Title,Description,Priority,Category,Estimated Time` columns.
pub struct TaskImporter;

impl TaskImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<TaskBoard, TaskImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<TaskBoard, TaskImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut board = TaskBoard::new();

        for (offset, record) in csv_reader.deserialize::<TaskRow>().enumerate() {
            // Header is line 1.
            let row = offset + 2;
            let record = record?;
            let priority = match record.priority.as_deref() {
                None => Priority::default(),
                Some(raw) => Priority::parse(raw).ok_or_else(|| {
                    TaskImportError::InvalidPriority {
                        row,
                        value: raw.to_string(),
                    }
                })?,
            };

            board
                .add(NewTask {
                    title: record.title,
                    description: record.description,
                    priority,
                    category: record.category.unwrap_or_default(),
                    estimated_time: record.estimated_time.unwrap_or(0),
                })
                .map_err(|source| TaskImportError::Task { row, source })?;
        }

        info!(tasks = board.tasks().len(), "imported task list");
        Ok(board)
    }
}

#[derive(Debug, Deserialize)]
struct TaskRow {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Priority", default, deserialize_with = "empty_string_as_none")]
    priority: Option<String>,
    #[serde(rename = "Category", default, deserialize_with = "empty_string_as_none")]
    category: Option<String>,
    #[serde(rename = "Estimated Time", default)]
    estimated_time: Option<u32>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|raw| !raw.trim().is_empty()))
}
