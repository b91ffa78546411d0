//! Durable storage for the selected language

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Storage key under which the selected language identifier is persisted.
pub const LANGUAGE_STORAGE_KEY: &str = "app-language";

/// A single key-value slot holding the persisted language identifier.
///
/// Reads happen once per session during initialization; writes happen on
/// every language change. A failed write degrades to "selection lost on the
/// next restart" and is never surfaced to the caller of `set_language`.
pub trait LanguageStore: Send + Sync {
    /// Read the persisted language identifier, if any
    fn load(&self) -> Option<String>;

    /// Write the language identifier
    fn save(&self, code: &str) -> io::Result<()>;
}

/// File-backed store keeping the identifier in `<dir>/app-language`.
#[derive(Debug)]
pub struct FileLanguageStore {
    path: PathBuf,
}

impl FileLanguageStore {
    /// Create a store rooted at the given directory
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            path: dir.as_ref().join(LANGUAGE_STORAGE_KEY),
        }
    }

    /// Get the path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LanguageStore for FileLanguageStore {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(value) => Some(value.trim().to_string()),
            Err(e) => {
                debug!("No persisted language at {:?}: {}", self.path, e);
                None
            }
        }
    }

    fn save(&self, code: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, code)
    }
}

/// In-memory store for tests and hosts without durable storage.
#[derive(Debug, Default)]
pub struct MemoryLanguageStore {
    slot: Mutex<Option<String>>,
}

impl MemoryLanguageStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with an identifier
    pub fn with_value(code: &str) -> Self {
        Self {
            slot: Mutex::new(Some(code.to_string())),
        }
    }
}

impl LanguageStore for MemoryLanguageStore {
    fn load(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }

    fn save(&self, code: &str) -> io::Result<()> {
        *self.slot.lock().unwrap() = Some(code.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryLanguageStore::new();
        assert_eq!(store.load(), None);
        store.save("ar").unwrap();
        assert_eq!(store.load(), Some("ar".to_string()));
    }

    #[test]
    fn seeded_memory_store_loads_its_value() {
        let store = MemoryLanguageStore::with_value("fr");
        assert_eq!(store.load(), Some("fr".to_string()));
    }
}
