//! Key-value persistence backends

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tokio::fs;
use uuid::Uuid;

/// Asynchronous string key-value store.
///
/// `set` and `remove` are all-or-nothing per key: a reader never observes a
/// partially written value.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key was never set or has been removed
    async fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Store a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> io::Result<()>;

    /// Remove a key. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> io::Result<()>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: PathBuf) -> Self {
        FileKeyValueStore { dir }
    }

    fn path_for(&self, key: &str) -> io::Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid storage key: '{}'", key),
            ));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> io::Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).await?;

        // Write next to the target and rename so the swap is atomic
        let tmp_path = self.dir.join(format!(".{}.tmp-{}", key, Uuid::new_v4()));
        let written = match fs::write(&tmp_path, value).await {
            Ok(()) => fs::rename(&tmp_path, &path).await,
            Err(e) => Err(e),
        };

        if let Err(e) = written {
            match fs::remove_file(&tmp_path).await {
                Err(cleanup) if cleanup.kind() != io::ErrorKind::NotFound => log::warn!(
                    "failed to remove temporary file {}: {}",
                    tmp_path.display(),
                    cleanup
                ),
                _ => {}
            }
            return Err(e);
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> io::Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

/// Process-local store, used by tests and when embedding the repository
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| io::Error::other("memory store lock poisoned"))
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> io::Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_store_missing_key() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp.path().join("store"));

        assert_eq!(store.get("notes").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_set_get_remove() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp.path().join("store"));

        store.set("notes", "[]").await.unwrap();
        assert!(temp.path().join("store/notes.json").exists());
        assert_eq!(store.get("notes").await.unwrap().as_deref(), Some("[]"));

        store.set("notes", "[1]").await.unwrap();
        assert_eq!(store.get("notes").await.unwrap().as_deref(), Some("[1]"));

        store.remove("notes").await.unwrap();
        assert_eq!(store.get("notes").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp.path().to_path_buf());

        store.set("notes", "[]").await.unwrap();
        store.set("notes", "[]").await.unwrap();

        let names: Vec<String> = std::fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["notes.json".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_set_cleans_up_and_keeps_old_value() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp.path().to_path_buf());

        // A non-empty directory at the target path makes the swap fail
        std::fs::create_dir(temp.path().join("notes.json")).unwrap();
        std::fs::write(temp.path().join("notes.json/keep"), "x").unwrap();

        assert!(store.set("notes", "[]").await.is_err());

        let names: Vec<String> = std::fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["notes.json".to_string()]);
        assert!(temp.path().join("notes.json/keep").exists());
    }

    #[tokio::test]
    async fn test_file_store_remove_absent_key() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp.path().to_path_buf());

        store.remove("notes").await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp.path().to_path_buf());

        for key in ["", "../notes", "a/b", "notes.json"] {
            let err = store.set(key, "x").await.unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        }
    }

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryKeyValueStore::new();

        assert_eq!(store.get("notes").await.unwrap(), None);
        store.set("notes", "[]").await.unwrap();
        assert_eq!(store.get("notes").await.unwrap().as_deref(), Some("[]"));
        store.remove("notes").await.unwrap();
        store.remove("notes").await.unwrap();
        assert_eq!(store.get("notes").await.unwrap(), None);
    }
}
