//! The note store: the ordered, in-memory working copy of all notes and the
//! operations the presentation layer calls.
//!
//! A note's identity is its zero-based position. Positions shift after a
//! delete, so callers re-resolve them after every mutation. Query results are
//! returned as [`NoteRef`]s carrying the position of each match.
//!
//! Every mutating operation flushes through the backend. If the flush fails
//! the in-memory change is kept, the store is marked dirty, and the error is
//! returned so the caller can report that memory and disk now disagree.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::error::{NotebookError, Result};
use crate::storage::{normalize_tags, now_timestamp, JsonFileBackend, Note, NoteBackend, NoteUpdate};

/// A note together with its current position in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteRef<'a> {
    pub index: usize,
    pub note: &'a Note,
}

pub struct NoteStore<B: NoteBackend = JsonFileBackend> {
    backend: B,
    notes: Option<Vec<Note>>,
    dirty: bool,
}

impl NoteStore<JsonFileBackend> {
    /// A store backed by the JSON file at `path`. Call [`NoteStore::load`] before use.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonFileBackend::new(path))
    }
}

impl<B: NoteBackend> NoteStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            notes: None,
            dirty: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_loaded(&self) -> bool {
        self.notes.is_some()
    }

    /// True when an in-memory change has not reached the backend.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read the persisted sequence, replacing any working copy.
    ///
    /// Returns the number of notes loaded. A missing store is empty, not an
    /// error. On `CorruptStore` the store stays unloaded; see
    /// [`NoteStore::start_fresh`].
    pub fn load(&mut self) -> Result<usize> {
        let notes = self.backend.load()?;
        let count = notes.len();
        info!(location = %self.backend.location(), count, "loaded notes");
        self.notes = Some(notes);
        self.dirty = false;
        Ok(count)
    }

    /// Quarantine unreadable persisted state and begin with an empty store.
    ///
    /// Returns where the old state was moved, if anything was there.
    pub fn start_fresh(&mut self) -> Result<Option<String>> {
        let moved = self.backend.quarantine()?;
        if let Some(ref to) = moved {
            warn!(to = %to, "starting with an empty store; previous contents kept aside");
        }
        self.notes = Some(Vec::new());
        self.dirty = false;
        Ok(moved)
    }

    /// Write the full sequence to the backend.
    pub fn save(&mut self) -> Result<()> {
        let notes = self.notes.as_deref().ok_or(NotebookError::NotInitialized)?;
        match self.backend.save(notes) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(err) => {
                self.dirty = true;
                Err(err)
            }
        }
    }

    /// Append a new note stamped with the current time and flush.
    ///
    /// Returns the position of the new note.
    pub fn add(&mut self, title: &str, content: &str, tags: Vec<String>) -> Result<usize> {
        let title = title.trim();
        if title.is_empty() {
            return Err(NotebookError::invalid_input("title cannot be empty"));
        }
        let note = Note::new(title, content, tags, now_timestamp());
        let notes = self.notes_mut()?;
        notes.push(note);
        let index = notes.len() - 1;
        debug!(index, title, "added note");
        self.save()?;
        Ok(index)
    }

    /// The full ordered sequence.
    pub fn list(&self) -> Result<&[Note]> {
        self.notes.as_deref().ok_or(NotebookError::NotInitialized)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.list()?.is_empty())
    }

    pub fn get(&self, index: usize) -> Result<&Note> {
        let notes = self.list()?;
        notes.get(index).ok_or(NotebookError::IndexOutOfRange {
            index,
            len: notes.len(),
        })
    }

    /// Notes whose title or content contains `keyword`, ignoring case.
    ///
    /// An empty keyword matches every note.
    pub fn search(&self, keyword: &str) -> Result<Vec<NoteRef<'_>>> {
        let needle = keyword.to_lowercase();
        self.matching(|note| note.mentions_lowercase(&needle))
    }

    /// Notes carrying `tag`, ignoring case.
    pub fn filter_by_tag(&self, tag: &str) -> Result<Vec<NoteRef<'_>>> {
        self.matching(|note| note.has_tag(tag))
    }

    /// Every tag used by any note, sorted.
    pub fn all_tags(&self) -> Result<BTreeSet<String>> {
        Ok(self
            .list()?
            .iter()
            .flat_map(|note| note.tags.iter().cloned())
            .collect())
    }

    /// Apply `update` to the note at `index` and flush.
    ///
    /// Fields left as `None` keep their value. The creation timestamp never
    /// changes. On error nothing is modified and nothing is written.
    pub fn edit(&mut self, index: usize, update: NoteUpdate) -> Result<&Note> {
        let notes = self.notes_mut()?;
        let len = notes.len();
        let note = notes
            .get_mut(index)
            .ok_or(NotebookError::IndexOutOfRange { index, len })?;

        let title = match update.title {
            Some(ref raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(NotebookError::invalid_input("title cannot be empty"));
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        if let Some(title) = title {
            note.title = title;
        }
        if let Some(content) = update.content {
            note.content = content;
        }
        if let Some(tags) = update.tags {
            note.tags = normalize_tags(tags);
        }
        debug!(index, "edited note");

        self.save()?;
        self.get(index)
    }

    /// Remove the note at `index`, shifting later notes down by one, and flush.
    pub fn delete(&mut self, index: usize) -> Result<Note> {
        let notes = self.notes_mut()?;
        if index >= notes.len() {
            return Err(NotebookError::IndexOutOfRange {
                index,
                len: notes.len(),
            });
        }
        let removed = notes.remove(index);
        debug!(index, title = %removed.title, "deleted note");
        self.save()?;
        Ok(removed)
    }

    fn notes_mut(&mut self) -> Result<&mut Vec<Note>> {
        self.notes.as_mut().ok_or(NotebookError::NotInitialized)
    }

    fn matching<F>(&self, mut predicate: F) -> Result<Vec<NoteRef<'_>>>
    where
        F: FnMut(&Note) -> bool,
    {
        Ok(self
            .list()?
            .iter()
            .enumerate()
            .filter(|(_, note)| predicate(*note))
            .map(|(index, note)| NoteRef { index, note })
            .collect())
    }
}
