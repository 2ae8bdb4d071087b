//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Prompting for note fields and confirmations (`input`)
//! - Note numbers and tag flags (`parsing`)

mod input;
mod parsing;

pub use input::{confirm, is_interactive, prompt_tags, prompt_text, read_content};
pub use parsing::{collect_tags, parse_position};
