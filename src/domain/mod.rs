//! Domain layer - Notes, drafts and the category catalog

pub mod category;
pub mod collection;
pub mod note;

pub use category::{Category, CATEGORIES};
pub use collection::CategoryCount;
pub use note::{validate_content, Note, NoteDraft, MAX_CONTENT_LEN};
