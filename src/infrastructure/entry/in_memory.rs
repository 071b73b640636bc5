//! In-memory config entry repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{ConfigEntry, ConfigEntryRepository, EntryError, EntryId};

/// In-memory implementation of [`ConfigEntryRepository`]
///
/// Used by tests and by embedding hosts that handle persistence themselves.
pub struct InMemoryConfigEntryRepository {
    entries: RwLock<HashMap<String, ConfigEntry>>,
}

impl InMemoryConfigEntryRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryConfigEntryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigEntryRepository for InMemoryConfigEntryRepository {
    async fn create(&self, entry: ConfigEntry) -> Result<ConfigEntry, EntryError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| EntryError::internal("Failed to acquire lock"))?;

        let id = entry.id().as_str().to_string();

        if entries.contains_key(&id) {
            return Err(EntryError::already_exists(id));
        }

        entries.insert(id, entry.clone());
        Ok(entry)
    }

    async fn update(&self, entry: ConfigEntry) -> Result<ConfigEntry, EntryError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| EntryError::internal("Failed to acquire lock"))?;

        let id = entry.id().as_str().to_string();

        if !entries.contains_key(&id) {
            return Err(EntryError::not_found(id));
        }

        entries.insert(id, entry.clone());
        Ok(entry)
    }

    async fn get(&self, id: &EntryId) -> Result<Option<ConfigEntry>, EntryError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| EntryError::internal("Failed to acquire lock"))?;

        Ok(entries.get(id.as_str()).cloned())
    }

    async fn list(&self) -> Result<Vec<ConfigEntry>, EntryError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| EntryError::internal("Failed to acquire lock"))?;

        Ok(entries.values().cloned().collect())
    }

    async fn delete(&self, id: &EntryId) -> Result<(), EntryError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| EntryError::internal("Failed to acquire lock"))?;

        if entries.remove(id.as_str()).is_none() {
            return Err(EntryError::not_found(id.as_str()));
        }

        Ok(())
    }
}
