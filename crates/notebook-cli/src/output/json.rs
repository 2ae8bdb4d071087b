//! JSON output formatting for notes.

use notebook_core::{Note, NoteRef};

/// Convert a note to JSON for output. `index` is the zero-based store position.
pub fn note_json(index: usize, note: &Note) -> serde_json::Value {
    serde_json::json!({
        "number": index + 1,
        "title": note.title,
        "content": note.content,
        "tags": note.tags,
        "date": note.date_string(),
    })
}

/// Convert query results to a JSON array for output.
pub fn notes_json(refs: &[NoteRef<'_>]) -> Vec<serde_json::Value> {
    refs.iter().map(|r| note_json(r.index, r.note)).collect()
}
