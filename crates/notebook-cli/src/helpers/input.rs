//! Input handling helpers for note fields and confirmations.

use std::io::{self, IsTerminal, Read};

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use notebook_core::storage::parse_tag_list;

/// Whether prompts can be shown (both stdin and stdout are terminals).
pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

/// Prompt for a line of text.
///
/// With `required`, blank answers are rejected and the prompt repeats.
/// `current` is offered as the default answer.
pub fn prompt_text(label: &str, current: Option<&str>, required: bool) -> anyhow::Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(label)
        .allow_empty(!required);
    if let Some(value) = current {
        input = input.default(value.to_string());
    }
    if required {
        input = input.validate_with(|value: &String| -> Result<(), &str> {
            if value.trim().is_empty() {
                Err("This cannot be empty")
            } else {
                Ok(())
            }
        });
    }
    input
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", label.to_lowercase(), e))
}

/// Prompt for a comma-separated tag list.
pub fn prompt_tags(current: &[String]) -> anyhow::Result<Vec<String>> {
    let current = current.join(", ");
    let answer = prompt_text(
        "Tags (comma-separated)",
        (!current.is_empty()).then_some(current.as_str()),
        false,
    )?;
    Ok(parse_tag_list(&answer))
}

/// Marker value for `--content` that means "read the content from stdin".
const STDIN_MARKER: &str = "-";

/// Resolve note content from `--content`, stdin (`--content -`), or a prompt.
///
/// Stdin is only read when asked for, so piping unrelated data into a
/// command never replaces a note's content. Returns `None` when no content
/// was given and no prompt can be shown.
pub fn read_content(content: Option<String>, no_input: bool) -> anyhow::Result<Option<String>> {
    match content {
        Some(_) => resolve_content(content, io::stdin().lock()),
        None if no_input || !is_interactive() => Ok(None),
        None => prompt_text("Content", None, false).map(Some),
    }
}

fn resolve_content<R: Read>(content: Option<String>, mut stdin: R) -> anyhow::Result<Option<String>> {
    match content {
        Some(marker) if marker == STDIN_MARKER => {
            let mut buffer = String::new();
            stdin
                .read_to_string(&mut buffer)
                .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
            Ok(Some(buffer.trim_end().to_string()))
        }
        other => Ok(other),
    }
}

/// Ask a yes/no question, defaulting to no.
pub fn confirm(prompt: &str) -> anyhow::Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_literal_content_ignores_stdin() {
        let stdin = Cursor::new("unrelated pipeline data\n");
        let content = resolve_content(Some("typed".into()), stdin).unwrap();
        assert_eq!(content.as_deref(), Some("typed"));
    }

    #[test]
    fn test_dash_reads_stdin_and_trims_trailing_newlines() {
        let stdin = Cursor::new("line one\nline two\n\n");
        let content = resolve_content(Some("-".into()), stdin).unwrap();
        assert_eq!(content.as_deref(), Some("line one\nline two"));
    }

    #[test]
    fn test_dash_with_empty_stdin_gives_empty_content() {
        let content = resolve_content(Some("-".into()), Cursor::new("")).unwrap();
        assert_eq!(content.as_deref(), Some(""));
    }

    #[test]
    fn test_no_content_flag_stays_none() {
        assert_eq!(resolve_content(None, Cursor::new("data")).unwrap(), None);
    }
}
