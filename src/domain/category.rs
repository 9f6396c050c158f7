//! Fixed category catalog

use crate::error::{NotekeepError, Result};

/// A classification bucket for notes. Categories are compiled in and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

/// The catalog, in display order. The first entry is the default category.
pub static CATEGORIES: [Category; 3] = [
    Category {
        id: "work-study",
        name: "Work & Study",
        color: "#4A90E2",
    },
    Category {
        id: "life",
        name: "Life",
        color: "#50C878",
    },
    Category {
        id: "ideas",
        name: "Ideas",
        color: "#F5A623",
    },
];

impl Category {
    /// All categories in display order
    pub fn all() -> &'static [Category] {
        &CATEGORIES
    }

    /// Category used when a draft does not name one
    pub fn default_category() -> &'static Category {
        &CATEGORIES[0]
    }

    /// Look up a category by id
    pub fn find(id: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.id == id)
    }

    /// Look up a category by id, failing with `UnknownCategory`
    pub fn require(id: &str) -> Result<&'static Category> {
        Self::find(id).ok_or_else(|| NotekeepError::UnknownCategory(id.to_string()))
    }
}
