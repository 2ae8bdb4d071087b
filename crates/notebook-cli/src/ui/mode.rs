//! Output mode routing logic.

use crate::errors::CliError;

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain text, stable for logs and scripts
    #[default]
    Plain,
    /// Human-friendly table with colors (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// Routing rules:
    /// 1. `--json` overrides everything
    /// 2. `--format plain` forces plain, `--format table` asks for pretty
    /// 3. `TERM=dumb` forces plain
    /// 4. Pretty only when stdout is a TTY
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        if format_flag == Some("plain") || term_is_dumb || !is_tty {
            return Self::Plain;
        }
        Self::Pretty
    }

    /// Check a `--format` value before any work is done.
    pub fn validate_format(json_flag: bool, format_flag: Option<&str>) -> Result<(), CliError> {
        match format_flag {
            None => Ok(()),
            Some(_) if json_flag => Err(CliError::invalid_input("--format cannot be used with --json")),
            Some("table") | Some("plain") => Ok(()),
            Some(other) => Err(CliError::invalid_input(format!(
                "Unsupported format: {} (use table or plain)",
                other
            ))),
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_exclusive() {
        let mode = OutputMode::resolve(true, Some("plain"), true, false);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_plain_forces() {
        let mode = OutputMode::resolve(false, Some("plain"), true, false);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_term_dumb_forces_plain() {
        let mode = OutputMode::resolve(false, None, true, true);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_tty_gets_pretty() {
        assert_eq!(OutputMode::resolve(false, None, true, false), OutputMode::Pretty);
        assert_eq!(
            OutputMode::resolve(false, Some("table"), true, false),
            OutputMode::Pretty
        );
    }

    #[test]
    fn test_non_tty_gets_plain() {
        let mode = OutputMode::resolve(false, Some("table"), false, false);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_validate_format() {
        assert!(OutputMode::validate_format(false, None).is_ok());
        assert!(OutputMode::validate_format(false, Some("table")).is_ok());
        assert!(matches!(
            OutputMode::validate_format(true, Some("plain")),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            OutputMode::validate_format(false, Some("csv")),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_bad_format_maps_to_invalid_input_exit_code() {
        let err: anyhow::Error = OutputMode::validate_format(false, Some("xml"))
            .unwrap_err()
            .into();
        assert_eq!(crate::errors::exit_code_for(&err), crate::constants::exit_codes::INVALID_INPUT);
    }
}
