//! String formatting utilities for UI rendering.

/// Placeholder shown for a note without tags.
pub const NO_TAGS: &str = "No tags";

/// Truncate a string to max length, adding ellipsis if needed.
///
/// The result never exceeds `max_len` characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Content preview: the first `max_chars` characters, followed by `...`
/// when anything was cut.
pub fn preview(content: &str, max_chars: usize) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// Join tags for display, or the placeholder when there are none.
pub fn tag_line(tags: &[String]) -> String {
    if tags.is_empty() {
        NO_TAGS.to_string()
    } else {
        tags.join(", ")
    }
}

/// Wrap text to a given width, preserving newlines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_line.chars().count() + 1 + word.chars().count() <= width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(current_line);
                current_line = word.to_string();
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}

/// Sanitize a string for single-line output (replace newlines with spaces).
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_very_short_max() {
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_preview_keeps_short_content() {
        assert_eq!(preview("short", 100), "short");
        let exact = "x".repeat(100);
        assert_eq!(preview(&exact, 100), exact);
    }

    #[test]
    fn test_preview_appends_ellipsis() {
        let long = "y".repeat(101);
        let out = preview(&long, 100);
        assert_eq!(out.chars().count(), 103);
        assert!(out.ends_with("y..."));
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        assert_eq!(preview("ééé", 2), "éé...");
    }

    #[test]
    fn test_tag_line() {
        assert_eq!(tag_line(&[]), "No tags");
        let tags = vec!["work".to_string(), "ideas".to_string()];
        assert_eq!(tag_line(&tags), "work, ideas");
    }

    #[test]
    fn test_wrap_simple() {
        let lines = wrap("hello world foo bar", 11);
        assert_eq!(lines, vec!["hello world", "foo bar"]);
    }

    #[test]
    fn test_wrap_preserves_newlines() {
        let lines = wrap("line one\n\nline two", 80);
        assert_eq!(lines, vec!["line one", "", "line two"]);
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("a\r\nb\nc"), "a b c");
    }
}
