//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// No note at the requested position.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// The notes file exists but could not be parsed.
    pub const CORRUPT_STORE: i32 = 5;

    /// The notes file could not be read or written.
    pub const IO_FAILURE: i32 = 6;
}

/// Characters of content shown per note in list views.
pub const DEFAULT_PREVIEW_CHARS: usize = 100;

/// Environment variable selecting the log filter (falls back to `RUST_LOG`).
pub const LOG_ENV: &str = "NOTEBOOK_LOG";
