//! Application layer - Use cases and orchestration

pub mod clear_data;
pub mod delete_note;
pub mod init;
pub mod list_notes;
pub mod manage_config;
pub mod save_note;
pub mod summary;

pub use clear_data::{clear_data, storage_status};
pub use delete_note::delete_note;
pub use list_notes::ListNotesService;
pub use manage_config::ConfigService;
pub use save_note::{NoteEdit, SaveNoteService};
pub use summary::{CategorySummary, SummaryService};
