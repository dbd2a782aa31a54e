//! Error types for notebook generation.

use std::path::PathBuf;

/// Result type for notebook operations.
pub type NotebookResult<T> = Result<T, NotebookError>;

/// Errors that can occur while writing or reading a notebook.
#[derive(Debug, thiserror::Error)]
pub enum NotebookError {
    /// The output path could not be created or written.
    #[error("Failed to write file {path}: {message}")]
    WriteError { path: PathBuf, message: String },

    /// Failed to read a previously written notebook.
    #[error("Failed to read file {path}: {message}")]
    ReadError { path: PathBuf, message: String },

    /// Failed to serialize/deserialize JSON.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl NotebookError {
    pub(crate) fn write(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::WriteError {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
