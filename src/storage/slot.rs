use crate::error::{AtlasError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A named, persistent string value: the local storage the store sits on.
pub trait KeyValueSlot {
    /// Returns `None` when nothing has been stored under `key` yet.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the whole value stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }

    /// Atomically write content using temp file + rename in the same directory
    fn atomic_write(&self, target_path: &Path, content: &str) -> Result<()> {
        let target_dir = target_path
            .parent()
            .ok_or_else(|| AtlasError::Storage("Target path has no parent directory".to_string()))?;

        let mut temp_file = NamedTempFile::new_in(target_dir)
            .map_err(|e| AtlasError::Storage(format!("Failed to create temp file: {}", e)))?;

        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| AtlasError::Storage(format!("Failed to write to temp file: {}", e)))?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| AtlasError::Storage(format!("Failed to sync temp file: {}", e)))?;

        temp_file
            .persist(target_path)
            .map_err(|e| AtlasError::Storage(format!("Failed to persist temp file: {}", e)))?;

        Ok(())
    }
}

impl KeyValueSlot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        self.atomic_write(&path, value)
    }
}

/// Volatile slot, handy for tests and previews.
#[derive(Debug, Default)]
pub struct InMemorySlot {
    values: RefCell<HashMap<String, String>>,
}

impl InMemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let slot = Self::new();
        slot.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        slot
    }
}

impl KeyValueSlot for InMemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: KeyValueSlot + ?Sized> KeyValueSlot for &T {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(AtlasError::Validation("Storage key cannot be empty".to_string()));
    }

    // Keys become file names
    if key.contains(['/', '\\', ':', '*', '?', '"', '<', '>', '|', '\0']) {
        return Err(AtlasError::Validation(
            "Storage key contains invalid characters for filenames".to_string(),
        ));
    }

    if key.contains("..") {
        return Err(AtlasError::Validation(
            "Storage key cannot contain '..'".to_string(),
        ));
    }

    Ok(())
}
