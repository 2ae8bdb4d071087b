//! Error types for Notebook core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to exit codes and user-facing hints.

use thiserror::Error;

/// Result type alias for Notebook operations.
pub type Result<T> = std::result::Result<T, NotebookError>;

/// Core error type for Notebook operations.
#[derive(Debug, Error)]
pub enum NotebookError {
    /// A user-supplied field failed a precondition (e.g. blank title)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A position does not correspond to an existing note
    #[error("No note at position {index} (the store holds {len} note(s))")]
    IndexOutOfRange { index: usize, len: usize },

    /// Persisted state exists but is not a well-formed note array
    #[error("Corrupt note store at {location}: {reason}")]
    CorruptStore { location: String, reason: String },

    /// Underlying storage could not be read or written
    #[error("Storage error: {0}")]
    Io(String),

    /// An operation was attempted before `load`
    #[error("Note store has not been loaded")]
    NotInitialized,
}

impl NotebookError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        NotebookError::InvalidInput(message.into())
    }

    pub fn corrupt(location: impl Into<String>, reason: impl ToString) -> Self {
        NotebookError::CorruptStore {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    /// True for errors the presentation layer can recover from by re-prompting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            NotebookError::InvalidInput(_) | NotebookError::IndexOutOfRange { .. }
        )
    }
}

impl From<std::io::Error> for NotebookError {
    fn from(err: std::io::Error) -> Self {
        NotebookError::Io(err.to_string())
    }
}
