//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use notebook_core::NotebookError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// No note at the requested position
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// The notes file could not be parsed
    CorruptStore { message: String, hint: String },

    /// The notes file could not be read or written
    Io(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } | CliError::CorruptStore { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) | CliError::Io(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::CorruptStore { .. } => exit_codes::CORRUPT_STORE,
            CliError::Io(_) => exit_codes::IO_FAILURE,
        }
    }
}

impl From<NotebookError> for CliError {
    fn from(err: NotebookError) -> Self {
        match err {
            NotebookError::InvalidInput(message) => CliError::InvalidInput(message),
            NotebookError::IndexOutOfRange { index, len } => CliError::NotFound {
                message: format!(
                    "No note #{} (there {} {})",
                    index + 1,
                    if len == 1 { "is" } else { "are" },
                    plural_notes(len)
                ),
                hint: "Hint: Run `notebook list` to see note numbers.".to_string(),
            },
            err @ NotebookError::CorruptStore { .. } => CliError::CorruptStore {
                message: err.to_string(),
                hint: "Hint: Fix the file by hand, or rerun with `--on-corrupt start-fresh` to move it aside and start empty.".to_string(),
            },
            NotebookError::Io(message) => CliError::Io(message),
            err @ NotebookError::NotInitialized => CliError::Io(err.to_string()),
        }
    }
}

/// Exit code for any error bubbled up to `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<NotebookError>() {
        Some(NotebookError::InvalidInput(_)) => exit_codes::INVALID_INPUT,
        Some(NotebookError::IndexOutOfRange { .. }) => exit_codes::NOT_FOUND,
        Some(NotebookError::CorruptStore { .. }) => exit_codes::CORRUPT_STORE,
        Some(NotebookError::Io(_)) | Some(NotebookError::NotInitialized) => exit_codes::IO_FAILURE,
        None => 1,
    }
}

fn plural_notes(count: usize) -> String {
    if count == 1 {
        "1 note".to_string()
    } else {
        format!("{} notes", count)
    }
}
