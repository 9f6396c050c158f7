//! Settings use cases: wipe data and report storage health

use crate::error::Result;
use crate::infrastructure::{CollectionStatus, Notebook};

/// Remove every stored note. Config is kept.
pub async fn clear_data(notebook: &Notebook) -> Result<()> {
    notebook.notes().clear_all().await
}

/// Report what the note store currently holds
pub async fn storage_status(notebook: &Notebook) -> CollectionStatus {
    notebook.notes().inspect().await
}
