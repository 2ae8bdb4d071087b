//! Core data types for the storage layer.
//!
//! `Note` is a fixed-shape record whose serde representation is the on-disk
//! format: `title`, `content`, `tags`, and `date` (`YYYY-MM-DD HH:MM:SS`).
//! Any other keys in a record are carried in `Note::extra` and written back
//! unchanged on save.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Timestamp layout used in the persisted `date` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single user-authored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Short, non-empty title
    pub title: String,

    /// Free-form text, possibly multi-line
    pub content: String,

    /// Labels in entry order, without case-insensitive duplicates
    pub tags: Vec<String>,

    /// When this note was created (local wall-clock time, second precision)
    #[serde(rename = "date", with = "date_format")]
    pub created_at: NaiveDateTime,

    /// Keys this program does not use, kept so a save does not drop them
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Note {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags: normalize_tags(tags),
            created_at: truncate_to_seconds(created_at),
            extra: serde_json::Map::new(),
        }
    }

    /// Whether `tag` is one of this note's tags, ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }

    /// Whether the title or content contains `needle`, which must already be lowercase.
    pub(crate) fn mentions_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }

    /// The creation timestamp as persisted.
    pub fn date_string(&self) -> String {
        self.created_at.format(DATE_FORMAT).to_string()
    }
}

/// Field changes for an edit. `None` means "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl NoteUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tags.is_none()
    }
}

/// Trim tags, drop blanks, and drop case-insensitive duplicates (first one wins).
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for tag in tags {
        let trimmed = tag.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        let key = trimmed.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        out.push(trimmed.to_string());
    }
    out
}

/// Split comma-separated user input into normalized tags.
pub fn parse_tag_list(input: &str) -> Vec<String> {
    normalize_tags(input.split(','))
}

/// Current local time at second precision.
pub fn now_timestamp() -> NaiveDateTime {
    truncate_to_seconds(Local::now().naive_local())
}

fn truncate_to_seconds(value: NaiveDateTime) -> NaiveDateTime {
    value.with_nanosecond(0).unwrap_or(value)
}

mod date_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, DATE_FORMAT).map_err(|e| {
            serde::de::Error::custom(format!("invalid date '{}' ({}): {}", raw, DATE_FORMAT, e))
        })
    }
}
