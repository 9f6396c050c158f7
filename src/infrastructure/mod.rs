//! Infrastructure layer - Persistence and configuration

pub mod config;
pub mod notebook;
pub mod repository;
pub mod storage;

pub use config::Config;
pub use notebook::Notebook;
pub use repository::{CollectionStatus, NoteRepository, NOTES_KEY};
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
