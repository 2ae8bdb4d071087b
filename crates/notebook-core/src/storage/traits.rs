//! Storage backend trait definition.
//!
//! The `NoteBackend` trait is the persistence boundary of the note store.
//! The store keeps the working copy in memory and hands the whole sequence
//! to the backend on every flush.

use super::types::Note;
use crate::error::Result;

/// Persistence interface for a note sequence.
///
/// Implementations must ensure:
/// - A missing store loads as an empty sequence, not an error
/// - Anything that is not a well-formed note array loads as `CorruptStore`
/// - `save` replaces prior contents as a whole
pub trait NoteBackend {
    /// Read the persisted sequence.
    ///
    /// # Errors
    ///
    /// Returns `NotebookError::CorruptStore` if the persisted state cannot be
    /// parsed into notes, or `NotebookError::Io` if it cannot be read.
    fn load(&self) -> Result<Vec<Note>>;

    /// Replace the persisted sequence with `notes`.
    ///
    /// # Errors
    ///
    /// Returns `NotebookError::Io` if the write fails. Prior contents are left
    /// intact where the backend supports atomic replace.
    fn save(&self, notes: &[Note]) -> Result<()>;

    /// Move unreadable persisted state out of the way.
    ///
    /// Returns a description of where it went, or `None` if there was nothing
    /// to move.
    fn quarantine(&self) -> Result<Option<String>>;

    /// Human-readable location of the persisted state (for messages and logs).
    fn location(&self) -> String;
}
