//! Initialize notebook use case

use crate::domain::Category;
use crate::error::Result;
use crate::infrastructure::{Config, Notebook};
use std::fs;
use std::path::Path;

/// Initialize a new notebook at the specified path.
pub fn init(path: &Path, default_category: Option<&str>) -> Result<Notebook> {
    let mut config = Config::new();
    if let Some(id) = default_category {
        config.default_category = Category::require(id)?.id.to_string();
    }

    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let notebook = Notebook::new(path.to_path_buf());
    notebook.initialize()?;
    notebook.save_config(&config)?;

    log::info!("initialized notebook at {}", path.display());
    Ok(notebook)
}
