//! Delete note use case

use crate::error::Result;
use crate::infrastructure::Notebook;

/// Delete a note by id. Returns false when no such note existed.
pub async fn delete_note(notebook: &Notebook, id: &str) -> Result<bool> {
    notebook.notes().delete_by_id(id).await
}
