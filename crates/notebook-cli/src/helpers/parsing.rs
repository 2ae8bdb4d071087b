//! Parsing helpers for note numbers and tag flags.

use notebook_core::storage::parse_tag_list;

use crate::errors::CliError;

/// Convert a 1-based note number from the command line to a store index.
pub fn parse_position(number: usize) -> Result<usize, CliError> {
    number
        .checked_sub(1)
        .ok_or_else(|| CliError::invalid_input("Note numbers start at 1"))
}

/// Flatten repeated `--tag` values, each of which may itself be a
/// comma-separated list.
pub fn collect_tags(values: &[String]) -> Vec<String> {
    let joined = values.join(",");
    parse_tag_list(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position(1).unwrap(), 0);
        assert_eq!(parse_position(12).unwrap(), 11);
        assert!(matches!(parse_position(0), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_collect_tags_flattens_and_dedups() {
        let values = vec![
            "work, ideas".to_string(),
            "Work".to_string(),
            " ".to_string(),
            "home".to_string(),
        ];
        assert_eq!(collect_tags(&values), vec!["work", "ideas", "home"]);
    }

    #[test]
    fn test_collect_tags_empty() {
        assert!(collect_tags(&[]).is_empty());
    }
}
