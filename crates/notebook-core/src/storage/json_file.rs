//! JSON file backend.
//!
//! Stores the sequence as a pretty-printed JSON array. Writes go through
//! `fs::write_atomic` so a crash mid-write never leaves a half-written file
//! in place of the old one.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, warn};

use super::traits::NoteBackend;
use super::types::Note;
use crate::error::{NotebookError, Result};

pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NoteBackend for JsonFileBackend {
    fn load(&self) -> Result<Vec<Note>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no store file yet; starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(NotebookError::Io(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        parse_notes(&contents).map_err(|reason| NotebookError::corrupt(self.location(), reason))
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        let mut body = serde_json::to_string_pretty(notes)
            .map_err(|e| NotebookError::Io(format!("Failed to encode notes: {}", e)))?;
        body.push('\n');
        crate::fs::write_atomic(&self.path, body.as_bytes()).map_err(|e| {
            NotebookError::Io(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        debug!(path = %self.path.display(), count = notes.len(), "store flushed");
        Ok(())
    }

    fn quarantine(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let suffix = format!("corrupt-{}", Local::now().format("%Y%m%d%H%M%S"));
        let moved = crate::fs::move_aside(&self.path, &suffix).map_err(|e| {
            NotebookError::Io(format!(
                "Failed to move {} aside: {}",
                self.path.display(),
                e
            ))
        })?;
        warn!(from = %self.path.display(), to = %moved.display(), "quarantined unreadable store");
        Ok(Some(moved.display().to_string()))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse a persisted note array, describing the first shape mismatch on failure.
pub(crate) fn parse_notes(contents: &str) -> std::result::Result<Vec<Note>, String> {
    let value: serde_json::Value =
        serde_json::from_str(contents).map_err(|e| format!("not valid JSON ({})", e))?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        other => {
            return Err(format!(
                "expected an array of notes, found {}",
                json_kind(&other)
            ))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value::<Note>(item).map_err(|e| format!("record {}: {}", i + 1, e))
        })
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
