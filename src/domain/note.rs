//! Note records and drafts

use crate::domain::Category;
use crate::error::{NotekeepError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound on note content, in characters after trimming
pub const MAX_CONTENT_LEN: usize = 200;

/// A persisted note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub content: String,
    pub category_id: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
}

/// Lenient ISO-8601 reading: RFC 3339 with an offset, or a date-time
/// without one, which is taken as UTC. Writing always uses RFC 3339.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: '{}'", raw)))
    }

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

impl Note {
    /// Build a brand-new note from a validated draft
    pub(crate) fn create(draft: ValidDraft, now: DateTime<Utc>) -> Self {
        Note {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            content: draft.content,
            category_id: draft.category_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields, keeping `id` and `created_at`
    pub(crate) fn apply(&self, draft: ValidDraft, now: DateTime<Utc>) -> Self {
        Note {
            id: self.id.clone(),
            title: draft.title,
            content: draft.content,
            category_id: draft.category_id,
            created_at: self.created_at,
            // Clock skew must never make an edit look older than the note
            updated_at: now.max(self.created_at),
        }
    }

    /// Title if set, otherwise the first line of content
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            self.content.lines().next().unwrap_or_default()
        } else {
            &self.title
        }
    }
}

/// User input for creating or editing a note.
///
/// Content longer than [`MAX_CONTENT_LEN`] characters is cut off when the
/// draft is built, mirroring an input field with a length cap.
///
/// `title` and `category_id` left as `None` keep the edited note's values.
/// On create they default to an empty title and the first category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: Option<String>,
    pub content: String,
    pub category_id: Option<String>,
}

impl NoteDraft {
    pub fn new(content: impl Into<String>) -> Self {
        NoteDraft {
            title: None,
            content: truncate_chars(content.into(), MAX_CONTENT_LEN),
            category_id: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Check the draft and fill in unspecified fields from `existing`,
    /// or from the defaults when creating.
    pub(crate) fn validate(&self, existing: Option<&Note>) -> Result<ValidDraft> {
        let content = validate_content(&self.content)?;
        let category_id = match (&self.category_id, existing) {
            (Some(id), _) => Category::require(id)?.id.to_string(),
            (None, Some(note)) => note.category_id.clone(),
            (None, None) => Category::default_category().id.to_string(),
        };
        let title = match (&self.title, existing) {
            (Some(title), _) => title.trim().to_string(),
            (None, Some(note)) => note.title.clone(),
            (None, None) => String::new(),
        };

        Ok(ValidDraft {
            title,
            content,
            category_id,
        })
    }
}

/// A draft that passed validation, with defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidDraft {
    pub title: String,
    pub content: String,
    pub category_id: String,
}

/// Trim content and check it against the length bounds
pub fn validate_content(content: &str) -> Result<String> {
    let trimmed = content.trim();
    let len = trimmed.chars().count();

    if len == 0 {
        return Err(NotekeepError::Validation("content is empty".to_string()));
    }
    if len > MAX_CONTENT_LEN {
        return Err(NotekeepError::Validation(format!(
            "content is {} characters, the limit is {}",
            len, MAX_CONTENT_LEN
        )));
    }

    Ok(trimmed.to_string())
}

fn truncate_chars(mut s: String, max: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(max) {
        s.truncate(idx);
    }
    s
}
