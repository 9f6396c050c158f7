//! Create and edit note use cases

use crate::domain::{Note, NoteDraft};
use crate::error::{NotekeepError, Result};
use crate::infrastructure::Notebook;

/// Fields supplied for an edit. Anything left as `None` keeps its current value.
#[derive(Debug, Clone, Default)]
pub struct NoteEdit {
    pub content: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
}

/// Service for creating and editing notes
pub struct SaveNoteService {
    notebook: Notebook,
}

impl SaveNoteService {
    pub fn new(notebook: Notebook) -> Self {
        SaveNoteService { notebook }
    }

    /// Create a note. Without a category the notebook's configured default is used.
    pub async fn create(
        &self,
        content: &str,
        title: Option<&str>,
        category: Option<&str>,
    ) -> Result<Note> {
        let config = self.notebook.load_config()?;

        let mut draft = NoteDraft::new(content)
            .with_category(category.unwrap_or(config.default_category.as_str()));
        if let Some(title) = title {
            draft = draft.with_title(title);
        }

        self.notebook.notes().save(&draft, None).await
    }

    /// Edit an existing note
    pub async fn edit(&self, id: &str, edit: NoteEdit) -> Result<Note> {
        let repository = self.notebook.notes();
        let existing = repository
            .find_by_id(id)
            .await
            .ok_or_else(|| NotekeepError::NoteNotFound(id.to_string()))?;

        let mut draft = NoteDraft::new(edit.content.unwrap_or(existing.content));
        if let Some(title) = edit.title {
            draft = draft.with_title(title);
        }
        if let Some(category) = edit.category {
            draft = draft.with_category(category);
        }

        repository.save(&draft, Some(id)).await
    }
}
