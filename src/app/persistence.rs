// Exploration Log - app/persistence.rs
//
// The persistence contract of the log manager: after every mutation the
// manager calls `CommitHook::on_commit` with the full log.
//
// `StoragePersister` is the production hook. It serialises the log and
// writes it under one key of a `KeyValueStore`. Failures are logged and
// dropped; the in-memory log stays authoritative for the session. It also
// performs the startup load, which degrades to an empty log on any failure.

use crate::core::codec;
use crate::core::model::Entry;
use crate::platform::storage::KeyValueStore;
use crate::util::error::{LoadError, PersistError};

/// Called by the log manager after each mutation of the log.
pub trait CommitHook {
    fn on_commit(&mut self, entries: &[Entry]);
}

/// Persists the log as one JSON value under `key`.
#[derive(Debug)]
pub struct StoragePersister<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> StoragePersister<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read and decode the stored log.
    ///
    /// `Ok(None)` covers both a missing key and a stored `null`.
    pub fn try_load(&self) -> Result<Option<Vec<Entry>>, LoadError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        codec::decode_log(&raw).map_err(|e| LoadError::Parse {
            key: self.key.clone(),
            source: e,
        })
    }

    /// Startup load. Never fails: absent or unreadable data means an empty log.
    pub fn load(&self) -> Vec<Entry> {
        match self.try_load() {
            Ok(Some(entries)) => {
                tracing::info!(key = %self.key, entries = entries.len(), "Log loaded");
                entries
            }
            Ok(None) => {
                tracing::debug!(key = %self.key, "No stored log; starting empty");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Stored log unusable; starting empty");
                Vec::new()
            }
        }
    }

    /// Serialise and write the log.
    pub fn try_persist(&mut self, entries: &[Entry]) -> Result<(), PersistError> {
        let json = codec::encode_log(entries).map_err(|e| PersistError::Serialise { source: e })?;
        self.store.set(&self.key, &json)
    }
}

impl<S: KeyValueStore> CommitHook for StoragePersister<S> {
    fn on_commit(&mut self, entries: &[Entry]) {
        match self.try_persist(entries) {
            Ok(()) => {
                tracing::debug!(key = %self.key, entries = entries.len(), "Log persisted");
            }
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    entries = entries.len(),
                    error = %e,
                    "Failed to persist log; keeping in-memory copy"
                );
            }
        }
    }
}
