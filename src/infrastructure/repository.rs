//! Note repository over a key-value store
//!
//! The whole collection lives under a single key as a JSON array. Every call
//! reads the collection fresh; mutations write the full collection back
//! (read-modify-write, last writer wins). Only one writer is assumed.

use crate::domain::collection::{self, CategoryCount};
use crate::domain::{Note, NoteDraft};
use crate::error::{NotekeepError, Result};
use crate::infrastructure::storage::KeyValueStore;
use chrono::{DateTime, Utc};

/// Storage key holding the serialized note collection
pub const NOTES_KEY: &str = "notes";

/// What the store currently holds under [`NOTES_KEY`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionStatus {
    /// Nothing saved yet, or cleared
    Missing,
    /// A well-formed collection with this many notes
    Loaded(usize),
    /// The value could not be read or parsed; reads treat it as empty
    Unreadable(String),
}

pub struct NoteRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> NoteRepository<S> {
    pub fn new(store: S) -> Self {
        NoteRepository { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn read(&self) -> (Vec<Note>, CollectionStatus) {
        let raw = match self.store.get(NOTES_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return (Vec::new(), CollectionStatus::Missing),
            Err(e) => {
                log::warn!("note storage unreadable, treating as empty: {}", e);
                return (Vec::new(), CollectionStatus::Unreadable(e.to_string()));
            }
        };

        match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) => {
                let status = CollectionStatus::Loaded(notes.len());
                (notes, status)
            }
            Err(e) => {
                log::warn!(
                    "stored notes are not valid JSON ({} bytes), treating as empty: {}",
                    raw.len(),
                    e
                );
                (Vec::new(), CollectionStatus::Unreadable(e.to_string()))
            }
        }
    }

    async fn persist(&self, notes: &[Note]) -> Result<()> {
        let json = serde_json::to_string(notes)?;
        self.store.set(NOTES_KEY, &json).await.map_err(|e| {
            log::error!("failed to write {} notes: {}", notes.len(), e);
            NotekeepError::Storage(e.to_string())
        })
    }

    /// Report whether the stored collection is absent, readable or damaged
    pub async fn inspect(&self) -> CollectionStatus {
        self.read().await.1
    }

    /// All persisted notes in collection order. Read failures yield an empty list.
    pub async fn load_all(&self) -> Vec<Note> {
        let (notes, _) = self.read().await;
        log::debug!("loaded {} notes", notes.len());
        notes
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Note> {
        self.load_all().await.into_iter().find(|n| n.id == id)
    }

    /// Create or update a note, stamped with the current time
    pub async fn save(&self, draft: &NoteDraft, existing_id: Option<&str>) -> Result<Note> {
        self.save_at(draft, existing_id, Utc::now()).await
    }

    /// Create or update a note as of `now`.
    ///
    /// With an `existing_id` found in the collection the note is replaced in
    /// place; otherwise a new note is appended. Nothing is written when the
    /// draft is invalid.
    pub async fn save_at(
        &self,
        draft: &NoteDraft,
        existing_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Note> {
        let mut notes = self.load_all().await;

        let position = existing_id.and_then(|id| notes.iter().position(|n| n.id == id));

        let saved = match position {
            Some(idx) => {
                let valid = draft.validate(Some(&notes[idx]))?;
                let updated = notes[idx].apply(valid, now);
                notes[idx] = updated.clone();
                log::debug!("updating note {}", updated.id);
                updated
            }
            None => {
                let valid = draft.validate(None)?;
                let created = Note::create(valid, now);
                notes.push(created.clone());
                log::debug!("creating note {}", created.id);
                created
            }
        };

        self.persist(&notes).await?;
        Ok(saved)
    }

    /// Remove a note. Returns whether anything was removed; an absent id is not an error.
    pub async fn delete_by_id(&self, id: &str) -> Result<bool> {
        let mut notes = self.load_all().await;
        let before = notes.len();
        notes.retain(|n| n.id != id);

        if notes.len() == before {
            log::debug!("delete of unknown note {} ignored", id);
            return Ok(false);
        }

        self.persist(&notes).await?;
        log::debug!("deleted note {}", id);
        Ok(true)
    }

    /// Remove the stored collection entirely
    pub async fn clear_all(&self) -> Result<()> {
        self.store.remove(NOTES_KEY).await.map_err(|e| {
            log::error!("failed to clear notes: {}", e);
            NotekeepError::Storage(e.to_string())
        })?;
        log::debug!("cleared all notes");
        Ok(())
    }

    pub async fn count_by_category(&self) -> Vec<CategoryCount> {
        collection::count_by_category(&self.load_all().await)
    }

    pub async fn list_by_category(&self, category_id: &str) -> Vec<Note> {
        collection::in_category(&self.load_all().await, category_id)
    }

    pub async fn latest_for_category(&self, category_id: &str, limit: usize) -> Vec<Note> {
        collection::latest_for_category(&self.load_all().await, category_id, limit)
    }
}
