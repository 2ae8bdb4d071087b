//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying notes
//! in various formats (JSON, table, plain text, menu blocks).

mod json;
mod text;

pub use json::{note_json, notes_json};
pub use text::{all_refs, note_block, print_note, print_note_list};
