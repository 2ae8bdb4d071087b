//! Storage layer for notes.
//!
//! This module defines the `NoteBackend` trait and its implementations:
//! a JSON file on disk and an in-memory stand-in.

pub mod json_file;
pub mod memory;
pub mod traits;
pub mod types;

pub use json_file::JsonFileBackend;
pub use memory::MemoryBackend;
pub use traits::NoteBackend;
pub use types::{
    normalize_tags, now_timestamp, parse_tag_list, Note, NoteUpdate, DATE_FORMAT,
};
