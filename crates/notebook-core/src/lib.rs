//! # Notebook Core
//!
//! Core library for Notebook - a small, file-backed personal note keeper.
//!
//! This crate owns the note model, the persistence backends, and the
//! `NoteStore` that the CLI drives. It has no terminal I/O of its own.
//!
//! ## Architecture
//!
//! - **storage**: `Note` model, `NoteBackend` trait, JSON-file and in-memory backends
//! - **store**: the `NoteStore` (add, list, search, tag filter, edit, delete)
//! - **fs**: atomic write-then-replace helpers
//! - **error**: the error taxonomy surfaced to callers

pub mod error;
pub mod fs;
pub mod storage;
pub mod store;

pub use error::{NotebookError, Result};
pub use storage::{JsonFileBackend, MemoryBackend, Note, NoteBackend, NoteUpdate};
pub use store::{NoteRef, NoteStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name used when no store path is configured.
pub const DEFAULT_NOTES_FILE: &str = "notes.json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
