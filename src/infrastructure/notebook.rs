//! Notebook directory discovery and layout

use crate::error::{NotekeepError, Result};
use crate::infrastructure::repository::NoteRepository;
use crate::infrastructure::storage::FileKeyValueStore;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

const NOTEKEEP_DIR: &str = ".notekeep";
const STORE_DIR: &str = "store";

/// A directory holding a `.notekeep/` folder with config and note storage
#[derive(Debug, Clone)]
pub struct Notebook {
    pub root: PathBuf,
}

impl Notebook {
    /// Create a notebook handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        Notebook { root }
    }

    /// Discover the notebook root.
    /// First checks NOTEKEEP_ROOT environment variable, then walks up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("NOTEKEEP_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_notekeep_dir(&path) {
                return Ok(Notebook::new(path));
            } else {
                return Err(NotekeepError::Config(format!(
                    "NOTEKEEP_ROOT is set to '{}' but no .notekeep directory found. \
                    Run 'notekeep init' in that directory or unset NOTEKEEP_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the notebook root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_notekeep_dir(&current) {
                return Ok(Notebook::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(NotekeepError::NotInitialized(start.to_path_buf())),
            }
        }
    }

    fn has_notekeep_dir(path: &Path) -> bool {
        path.join(NOTEKEEP_DIR).is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_notekeep_dir(&self.root)
    }

    /// Create the .notekeep directory structure
    pub fn initialize(&self) -> Result<()> {
        let notekeep_dir = self.root.join(NOTEKEEP_DIR);

        if notekeep_dir.exists() {
            return Err(NotekeepError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(notekeep_dir.join(STORE_DIR))?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Directory backing the key-value store, separate from config
    pub fn store_dir(&self) -> PathBuf {
        self.root.join(NOTEKEEP_DIR).join(STORE_DIR)
    }

    /// Repository over this notebook's note store
    pub fn notes(&self) -> NoteRepository<FileKeyValueStore> {
        NoteRepository::new(FileKeyValueStore::new(self.store_dir()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_initialize_creates_layout() {
        let temp = TempDir::new().unwrap();
        let notebook = Notebook::new(temp.path().to_path_buf());

        assert!(!notebook.is_initialized());
        notebook.initialize().unwrap();

        assert!(notebook.is_initialized());
        assert!(temp.path().join(".notekeep/store").is_dir());
        assert_eq!(notebook.store_dir(), temp.path().join(".notekeep/store"));
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let notebook = Notebook::new(temp.path().to_path_buf());

        notebook.initialize().unwrap();
        assert!(notebook.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".notekeep")).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let notebook = Notebook::discover_from(&subdir).unwrap();
        assert_eq!(notebook.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_notekeep() {
        let temp = TempDir::new().unwrap();

        match Notebook::discover_from(temp.path()).unwrap_err() {
            NotekeepError::NotInitialized(_) => {}
            other => panic!("Expected NotInitialized error, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_prefers_env_root() {
        let _guard = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("NOTEKEEP_ROOT");

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".notekeep")).unwrap();
        std::env::set_var("NOTEKEEP_ROOT", temp.path());

        let notebook = Notebook::discover().unwrap();
        assert_eq!(notebook.root, temp.path());
    }

    #[test]
    fn test_discover_env_root_without_notekeep_fails() {
        let _guard = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("NOTEKEEP_ROOT");

        let temp = TempDir::new().unwrap();
        std::env::set_var("NOTEKEEP_ROOT", temp.path());

        match Notebook::discover().unwrap_err() {
            NotekeepError::Config(msg) => assert!(msg.contains("NOTEKEEP_ROOT")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_notes_use_store_dir() {
        let temp = TempDir::new().unwrap();
        let notebook = Notebook::new(temp.path().to_path_buf());
        notebook.initialize().unwrap();

        notebook
            .notes()
            .save(&crate::domain::NoteDraft::new("hello"), None)
            .await
            .unwrap();

        assert!(temp.path().join(".notekeep/store/notes.json").exists());
    }
}
