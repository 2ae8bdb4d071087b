//! Application context for the Notebook CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration, and opens the note store.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use notebook_core::{NoteStore, NotebookError};

use crate::cli::Cli;
use crate::config::{CorruptPolicy, NotebookConfig};
use crate::errors::CliError;
use crate::ui::{badge, Badge, UiContext};

use super::resolver::{load_config, missing_directory_message, resolve_notes_path};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<NotebookConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn no_color(&self) -> bool {
        self.cli.no_color
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&NotebookConfig> {
        self.config.get_or_try_init(load_config)
    }

    /// Characters of content shown per note in list views.
    pub fn preview_chars(&self) -> anyhow::Result<usize> {
        Ok(self.config()?.ui.preview_chars)
    }

    /// The corrupt-store policy: the flag wins over the config file.
    pub fn corrupt_policy(&self) -> anyhow::Result<CorruptPolicy> {
        match self.cli.on_corrupt {
            Some(policy) => Ok(policy),
            None => Ok(self.config()?.store.on_corrupt),
        }
    }

    pub fn notes_path(&self) -> anyhow::Result<PathBuf> {
        Ok(resolve_notes_path(self.cli, self.config()?))
    }

    /// Build a UI context for a command's output.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, false)
    }

    /// Open and load the note store, applying the corrupt-store policy.
    pub fn open_store(&self) -> anyhow::Result<NoteStore> {
        let path = self.notes_path()?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(CliError::Io(missing_directory_message(&path)).into());
            }
        }

        let mut store = NoteStore::at_path(&path);
        match store.load() {
            Ok(count) => {
                tracing::debug!(path = %path.display(), count, "store opened");
            }
            Err(err @ NotebookError::CorruptStore { .. }) => match self.corrupt_policy()? {
                CorruptPolicy::Abort => return Err(CliError::from(err).into()),
                CorruptPolicy::StartFresh => {
                    let moved = store.start_fresh().map_err(CliError::from)?;
                    if !self.quiet() {
                        let ui = self.ui_context(false, None);
                        let detail = match moved {
                            Some(to) => format!(
                                "Notes file was unreadable; moved it to {} and started empty",
                                to
                            ),
                            None => "Notes file was unreadable; started empty".to_string(),
                        };
                        eprintln!("{}", badge(&ui, Badge::Warn, &detail));
                    }
                }
            },
            Err(err) => return Err(CliError::from(err).into()),
        }
        Ok(store)
    }
}
