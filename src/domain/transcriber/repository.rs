//! Persistence seam for configuration entries
//!
//! The host platform owns entry persistence; this trait is the narrow
//! surface the flow layer needs from it.

use async_trait::async_trait;

use super::{ConfigEntry, EntryError, EntryId};

/// Repository for persisted configuration entries
#[async_trait]
pub trait ConfigEntryRepository: Send + Sync {
    /// Persist a new entry; fails if the ID is already taken
    async fn create(&self, entry: ConfigEntry) -> Result<ConfigEntry, EntryError>;

    /// Replace an existing entry; fails if it does not exist
    async fn update(&self, entry: ConfigEntry) -> Result<ConfigEntry, EntryError>;

    /// Fetch an entry by ID
    async fn get(&self, id: &EntryId) -> Result<Option<ConfigEntry>, EntryError>;

    /// List all entries
    async fn list(&self) -> Result<Vec<ConfigEntry>, EntryError>;

    /// Delete an entry by ID; fails if it does not exist
    async fn delete(&self, id: &EntryId) -> Result<(), EntryError>;
}
