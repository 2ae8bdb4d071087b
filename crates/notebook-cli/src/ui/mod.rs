//! UI primitives for the Notebook CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and color styles
//! - **Render**: Tables, headers, hints, formatted text
//! - **Format**: String utilities (truncate, preview, wrap)
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{header, table, UiContext};
//!
//! let ctx = UiContext::from_env(args.json, args.format.as_deref(), cli.no_color, false);
//!
//! if ctx.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! println!("{}", header(&ctx, "list", None));
//! println!("{}", table(&ctx, &columns, &rows));
//! ```

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{
    badge, blank_line, header, hint, kv, print, print_error, table, Column,
};

pub use format::{preview, single_line, tag_line, truncate, wrap};
