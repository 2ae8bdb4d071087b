//! In-memory backend.
//!
//! Holds the serialized JSON that a file backend would write, so load/save go
//! through the same encoding and shape checks. Counts saves and can be told
//! to fail writes, which makes it the backend of choice in tests.

use std::cell::{Cell, RefCell};

use super::json_file::parse_notes;
use super::traits::NoteBackend;
use super::types::Note;
use crate::error::{NotebookError, Result};

#[derive(Default)]
pub struct MemoryBackend {
    contents: RefCell<Option<String>>,
    quarantined: RefCell<Vec<String>>,
    saves: Cell<usize>,
    fail_writes: Cell<bool>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw persisted contents, as if read from disk.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let backend = Self::default();
        *backend.contents.borrow_mut() = Some(contents.into());
        backend
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// The currently persisted JSON, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }

    /// Previously quarantined contents, oldest first.
    pub fn quarantined(&self) -> Vec<String> {
        self.quarantined.borrow().clone()
    }

    /// Make subsequent saves fail with `NotebookError::Io`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl NoteBackend for MemoryBackend {
    fn load(&self) -> Result<Vec<Note>> {
        match self.contents.borrow().as_deref() {
            None => Ok(Vec::new()),
            Some(raw) => {
                parse_notes(raw).map_err(|reason| NotebookError::corrupt(self.location(), reason))
            }
        }
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        if self.fail_writes.get() {
            return Err(NotebookError::Io("simulated write failure".to_string()));
        }
        let encoded = serde_json::to_string_pretty(notes)
            .map_err(|e| NotebookError::Io(format!("Failed to encode notes: {}", e)))?;
        *self.contents.borrow_mut() = Some(encoded);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn quarantine(&self) -> Result<Option<String>> {
        match self.contents.borrow_mut().take() {
            Some(raw) => {
                let mut quarantined = self.quarantined.borrow_mut();
                quarantined.push(raw);
                Ok(Some(format!("memory quarantine #{}", quarantined.len())))
            }
            None => Ok(None),
        }
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
