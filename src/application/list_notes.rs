//! List and show notes use cases

use crate::domain::{Category, Note};
use crate::error::{NotekeepError, Result};
use crate::infrastructure::Notebook;

/// Service for reading notes
pub struct ListNotesService {
    notebook: Notebook,
}

impl ListNotesService {
    pub fn new(notebook: Notebook) -> Self {
        ListNotesService { notebook }
    }

    /// All notes in saved order, optionally limited to one category
    pub async fn execute(&self, category: Option<&str>) -> Result<Vec<Note>> {
        let repository = self.notebook.notes();
        match category {
            Some(id) => {
                let category = Category::require(id)?;
                Ok(repository.list_by_category(category.id).await)
            }
            None => Ok(repository.load_all().await),
        }
    }

    pub async fn show(&self, id: &str) -> Result<Note> {
        self.notebook
            .notes()
            .find_by_id(id)
            .await
            .ok_or_else(|| NotekeepError::NoteNotFound(id.to_string()))
    }
}
