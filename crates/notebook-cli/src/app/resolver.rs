//! Path resolution for config and notes files.

use std::path::{Path, PathBuf};

use notebook_core::DEFAULT_NOTES_FILE;

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, NotebookConfig};

/// Resolve the config file path, checking NOTEBOOK_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("NOTEBOOK_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file if there is one; a missing file means defaults.
pub fn load_config() -> anyhow::Result<NotebookConfig> {
    let config_path = match resolve_config_path() {
        Ok(path) => path,
        Err(err) => {
            tracing::debug!(error = %err, "no config location; using defaults");
            return Ok(NotebookConfig::default());
        }
    };
    if !config_path.exists() {
        return Ok(NotebookConfig::default());
    }
    tracing::debug!(path = %config_path.display(), "reading config");
    read_config(&config_path)
}

/// Resolve the notes file: `--notes`/NOTEBOOK_PATH, then config, then `notes.json`.
pub fn resolve_notes_path(cli: &Cli, config: &NotebookConfig) -> PathBuf {
    if let Some(path) = cli.notes.as_deref() {
        return PathBuf::from(path);
    }
    if let Some(path) = config.store.path.as_deref() {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_NOTES_FILE)
}

/// Message shown when a store path's parent directory is missing.
pub fn missing_directory_message(path: &Path) -> String {
    format!(
        "Cannot store notes at {}: the directory does not exist\n\nCreate it, or choose another file:\n  notebook --notes /path/to/notes.json",
        path.display()
    )
}
