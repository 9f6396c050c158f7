//! Error types for notekeep

use crate::domain::Category;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for notekeep
#[derive(Debug, Error)]
pub enum NotekeepError {
    #[error("Not a notekeep directory: {0}")]
    NotInitialized(PathBuf),

    #[error("Invalid note: {0}")]
    Validation(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NotekeepError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NotekeepError::NotInitialized(_) => 2,
            NotekeepError::Validation(_) | NotekeepError::UnknownCategory(_) => 3,
            NotekeepError::NoteNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Whether the failure came from writing to the note store
    pub fn is_write_failure(&self) -> bool {
        matches!(self, NotekeepError::Storage(_))
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NotekeepError::NotInitialized(path) => {
                format!(
                    "Not a notekeep directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'notekeep init' in this directory to create a notebook\n\
                    • Navigate to an existing notebook directory\n\
                    • Set NOTEKEEP_ROOT environment variable to your notebook path",
                    path.display()
                )
            }
            NotekeepError::Validation(msg) => {
                format!(
                    "Invalid note: {}\n\n\
                    Notes need between 1 and 200 characters of content.\n\
                    Example: notekeep add \"Buy milk\" --category life",
                    msg
                )
            }
            NotekeepError::UnknownCategory(id) => {
                let valid: Vec<&str> = Category::all().iter().map(|c| c.id).collect();
                format!(
                    "Unknown category: '{}'\n\n\
                    Valid categories: {}\n\
                    Use 'notekeep categories' to see all categories",
                    id,
                    valid.join(", ")
                )
            }
            NotekeepError::NoteNotFound(id) => {
                format!(
                    "Note not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'notekeep list' to see note ids\n\
                    • The note may have been deleted or cleared",
                    id
                )
            }
            NotekeepError::Storage(msg) => {
                format!(
                    "Could not save your notes: {}\n\n\
                    Nothing was changed. Check that the notebook directory is \
                    writable and try again.",
                    msg
                )
            }
            NotekeepError::TomlDeserialize(e) => {
                format!(
                    "Could not read .notekeep/config.toml: {}\n\n\
                    Valid keys: recent_limit (a number), default_category \
                    (a category id), created (a timestamp).",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NotekeepError
pub type Result<T> = std::result::Result<T, NotekeepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_initialized_suggestion() {
        let err = NotekeepError::NotInitialized(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("notekeep init"));
        assert!(msg.contains("NOTEKEEP_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_validation_mentions_bounds() {
        let err = NotekeepError::Validation("content is empty".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("content is empty"));
        assert!(msg.contains("between 1 and 200"));
    }

    #[test]
    fn test_unknown_category_lists_catalog() {
        let err = NotekeepError::UnknownCategory("chores".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'chores'"));
        assert!(msg.contains("work-study, life, ideas"));
    }

    #[test]
    fn test_storage_error_is_actionable() {
        let err = NotekeepError::Storage("disk full".to_string());
        assert!(err.is_write_failure());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("disk full"));
        assert!(msg.contains("try again"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(NotekeepError::NotInitialized(PathBuf::new()).exit_code(), 2);
        assert_eq!(NotekeepError::Validation(String::new()).exit_code(), 3);
        assert_eq!(NotekeepError::UnknownCategory(String::new()).exit_code(), 3);
        assert_eq!(NotekeepError::NoteNotFound(String::new()).exit_code(), 4);
        assert_eq!(NotekeepError::Storage(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_malformed_config_names_the_file() {
        let parse_err = toml::from_str::<toml::Value>("recent_limit = ").unwrap_err();
        let msg = NotekeepError::from(parse_err).display_with_suggestions();
        assert!(msg.contains(".notekeep/config.toml"));
        assert!(msg.contains("recent_limit"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = NotekeepError::Config("bad value".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Configuration error: bad value");
    }
}
