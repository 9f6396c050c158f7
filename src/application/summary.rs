//! Category summary use case

use crate::domain::collection::{count_by_category, latest_for_category};
use crate::domain::{Category, Note};
use crate::error::{NotekeepError, Result};
use crate::infrastructure::Notebook;

/// One row of the summary view
#[derive(Debug, Clone)]
pub struct CategorySummary {
    pub category: &'static Category,
    pub count: usize,
    pub recent: Vec<Note>,
}

/// Service building the per-category overview
pub struct SummaryService {
    notebook: Notebook,
}

impl SummaryService {
    pub fn new(notebook: Notebook) -> Self {
        SummaryService { notebook }
    }

    /// Count and most recent notes for every category.
    /// `limit` overrides the configured preview length.
    pub async fn execute(&self, limit: Option<usize>) -> Result<Vec<CategorySummary>> {
        let limit = match limit {
            Some(0) => {
                return Err(NotekeepError::Config(
                    "Preview limit must be at least 1".to_string(),
                ))
            }
            Some(n) => n,
            None => self.notebook.load_config()?.recent_limit,
        };

        // One load so counts and previews agree
        let notes = self.notebook.notes().load_all().await;

        Ok(count_by_category(&notes)
            .into_iter()
            .map(|entry| CategorySummary {
                category: entry.category,
                count: entry.count,
                recent: latest_for_category(&notes, entry.category.id, limit),
            })
            .collect())
    }
}
