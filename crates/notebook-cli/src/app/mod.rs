//! Application-level utilities for the Notebook CLI.
//!
//! This module provides:
//! - Path resolution for config and notes files
//! - Lazily-loaded configuration
//! - Opening the note store with the corrupt-store policy applied

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
