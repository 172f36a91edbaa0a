//! File persistence for journals.
//!
//! Saving and loading live here, not on `Journal`: the log has one job and
//! storage is somebody else's.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::Journal;

/// Stores journals as JSON at a fixed path.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the journal to the store's path, replacing any previous
    /// contents.
    pub fn save(&self, journal: &Journal) -> Result<()> {
        let json = serde_json::to_string_pretty(journal)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Read the journal back from disk.
    pub fn load(&self) -> Result<Journal> {
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load the journal if the file exists, otherwise start a fresh one.
    pub fn load_or_new(&self) -> Result<Journal> {
        if self.path.exists() {
            self.load()
        } else {
            Ok(Journal::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("journal.json"));

        let mut journal = Journal::new();
        journal.add_entry("I cried today.");
        journal.add_entry("I ate a bug.");
        journal.remove_entry(0).unwrap();

        store.save(&journal).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, journal);
        // sequence numbering continues where the saved journal left off
        let mut loaded = loaded;
        assert_eq!(loaded.add_entry("back again"), 2);
    }

    #[test]
    fn test_load_or_new_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("missing.json"));

        let journal = store.load_or_new().unwrap();
        assert!(journal.is_empty());
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");
        fs::write(&path, "not json").unwrap();

        let err = FileStore::new(path).load().unwrap_err();
        assert!(matches!(err, crate::JournalError::Serde(_)));
    }
}
