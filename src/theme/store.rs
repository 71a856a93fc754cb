//! Durable storage for the chosen theme mode
//!
//! One key, one value: the mode's string form. Stores hand back raw
//! strings rather than parsed modes so that an unrecognised persisted
//! value survives the round trip and the engine can treat it as absent.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// Persistence handle injected into the theme engine
pub trait ModeStore {
    /// Read the stored value, if any
    fn load(&self) -> Result<Option<String>>;

    /// Overwrite the stored value
    fn save(&self, value: &str) -> Result<()>;
}

impl<S: ModeStore + ?Sized> ModeStore for Rc<S> {
    fn load(&self) -> Result<Option<String>> {
        (**self).load()
    }

    fn save(&self, value: &str) -> Result<()> {
        (**self).save(value)
    }
}

/// File-backed store: a single file under the user config directory
#[derive(Debug, Clone)]
pub struct FileModeStore {
    path: PathBuf,
}

impl FileModeStore {
    /// Store at the default location for this user
    pub fn new() -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from("", "", "folio").context("Failed to determine config directory")?;
        Ok(Self { path: proj_dirs.config_dir().join("theme-mode") })
    }

    /// Store at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ModeStore for FileModeStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read theme mode from {:?}", self.path))?;
        let trimmed = contents.trim();
        if trimmed.is_empty() { Ok(None) } else { Ok(Some(trimmed.to_string())) }
    }

    fn save(&self, value: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        fs::write(&self.path, value)
            .with_context(|| format!("Failed to write theme mode to {:?}", self.path))?;
        Ok(())
    }
}

/// In-memory store, used in tests and when no config directory exists
#[derive(Debug, Default)]
pub struct MemoryModeStore {
    value: RefCell<Option<String>>,
}

impl MemoryModeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed with a stored value
    pub fn with_value(value: impl Into<String>) -> Self {
        Self { value: RefCell::new(Some(value.into())) }
    }
}

impl ModeStore for MemoryModeStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn save(&self, value: &str) -> Result<()> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileModeStore::at(dir.path().join("theme-mode"));

        assert_eq!(store.load().unwrap(), None);
        store.save("surprise").unwrap();
        assert_eq!(store.load().unwrap(), Some("surprise".to_string()));
    }

    #[test]
    fn file_store_survives_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme-mode");

        FileModeStore::at(&path).save("light").unwrap();
        assert_eq!(FileModeStore::at(&path).load().unwrap(), Some("light".to_string()));
    }

    #[test]
    fn file_store_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileModeStore::at(dir.path().join("nested/config/theme-mode"));

        store.save("dark").unwrap();
        assert_eq!(store.load().unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn blank_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme-mode");
        std::fs::write(&path, "  \n").unwrap();

        assert_eq!(FileModeStore::at(&path).load().unwrap(), None);
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryModeStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save("dark").unwrap();
        assert_eq!(store.load().unwrap(), Some("dark".to_string()));
    }
}
