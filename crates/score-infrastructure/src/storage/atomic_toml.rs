//! Atomic TOML file operations.
//!
//! Writes go to a sibling temp file, are fsynced and then renamed over the
//! target, so readers see either the old or the new document. Read-modify-write
//! cycles hold an exclusive `fs2` lock on a sidecar `.lock` file.

use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;

use score_core::ScoreError;

/// Failure of a file-level TOML operation.
#[derive(Debug, Error)]
pub enum AtomicTomlError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
    #[error("Lock error: {0}")]
    LockError(String),
}

impl From<AtomicTomlError> for ScoreError {
    fn from(err: AtomicTomlError) -> Self {
        match err {
            AtomicTomlError::IoError(e) => e.into(),
            AtomicTomlError::TomlError(e) => e.into(),
            AtomicTomlError::TomlSerError(e) => e.into(),
            AtomicTomlError::LockError(message) => ScoreError::storage(message),
        }
    }
}

/// Handle to a TOML document on disk.
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the document. A missing or blank file yields `Ok(None)`.
    pub fn load(&self) -> Result<Option<T>, AtomicTomlError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(toml::from_str(&content)?))
    }

    /// Replaces the document via temp file + fsync + rename.
    pub fn save(&self, data: &T) -> Result<(), AtomicTomlError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Loads (or starts from `default_value`), applies `f`, and saves, all
    /// while holding the exclusive lock.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<(), AtomicTomlError>
    where
        F: FnOnce(&mut T),
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = self.load()?.unwrap_or(default_value);
        f(&mut data);
        self.save(&data)
    }

    fn temp_path(&self) -> Result<PathBuf, AtomicTomlError> {
        let invalid = |what: &str| {
            AtomicTomlError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Path has no {what}"),
            ))
        };
        let parent = self.path.parent().ok_or_else(|| invalid("parent directory"))?;
        let file_name = self.path.file_name().ok_or_else(|| invalid("file name"))?;

        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Exclusive lock on `<path>.lock`, released on drop.
struct FileLock {
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicTomlError> {
        let lock_path = path.with_extension("lock");
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        fs2::FileExt::lock_exclusive(&file)
            .map_err(|e| AtomicTomlError::LockError(format!("Failed to acquire lock: {}", e)))?;

        Ok(FileLock { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
    }
}
