// Exploration Log - platform/storage.rs
//
// Key-value persistence. Each key maps to one opaque string value.
//
// - `FileStore` keeps one `<key>.json` file per key in the data directory
//   and writes atomically (write temp -> rename) so a crash during save
//   never corrupts the previous value.
// - `MemoryStore` is the in-process equivalent used by tests.
//
// Both enforce a per-value quota; an oversized write fails with
// `PersistError::QuotaExceeded` and leaves the old value untouched.

use crate::util::constants;
use crate::util::error::{LoadError, PersistError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// String-keyed persistent store.
pub trait KeyValueStore: std::fmt::Debug {
    /// Read the value under `key`. A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, LoadError>;

    /// Replace the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, LoadError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        (**self).set(key, value)
    }
}

/// Whether `key` can safely name a file on every supported platform.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= constants::MAX_STORAGE_KEY_LEN
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

fn check_quota(key: &str, value: &str, max: usize) -> Result<(), PersistError> {
    if value.len() > max {
        return Err(PersistError::QuotaExceeded {
            key: key.to_string(),
            size: value.len(),
            max,
        });
    }
    Ok(())
}

// =============================================================================
// FileStore
// =============================================================================

/// Directory-backed store, one file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    max_value_bytes: usize,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_quota(dir, constants::DEFAULT_MAX_VALUE_BYTES)
    }

    pub fn with_quota(dir: impl Into<PathBuf>, max_value_bytes: usize) -> Self {
        Self {
            dir: dir.into(),
            max_value_bytes,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds the value for `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!("{key}.{}", constants::STORAGE_FILE_EXTENSION))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, LoadError> {
        if !is_valid_key(key) {
            return Err(LoadError::InvalidKey {
                key: key.to_string(),
            });
        }
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LoadError::Read { path, source: e }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        if !is_valid_key(key) {
            return Err(PersistError::InvalidKey {
                key: key.to_string(),
            });
        }
        check_quota(key, value, self.max_value_bytes)?;

        std::fs::create_dir_all(&self.dir).map_err(|e| PersistError::Write {
            path: self.dir.clone(),
            source: e,
        })?;

        let path = self.path_for(key);
        let tmp = path.with_extension(format!("{}.tmp", constants::STORAGE_FILE_EXTENSION));
        std::fs::write(&tmp, value.as_bytes()).map_err(|e| PersistError::Write {
            path: tmp.clone(),
            source: e,
        })?;

        std::fs::rename(&tmp, &path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            PersistError::Write {
                path: path.clone(),
                source: e,
            }
        })?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "Value stored");
        Ok(())
    }
}

// =============================================================================
// MemoryStore
// =============================================================================

/// In-memory store with the same quota semantics as `FileStore`.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    max_value_bytes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_quota(constants::DEFAULT_MAX_VALUE_BYTES)
    }

    pub fn with_quota(max_value_bytes: usize) -> Self {
        Self {
            values: HashMap::new(),
            max_value_bytes,
        }
    }

    /// Seed a raw value, bypassing the quota.
    pub fn insert_raw(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, LoadError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        check_quota(key, value, self.max_value_bytes)?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
