//! Persisted configuration entry

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::TranscriberConfig;

/// Maximum length for entry IDs
pub const MAX_ENTRY_ID_LENGTH: usize = 50;

/// Entry IDs are slugs: alphanumeric with hyphens and underscores
static ENTRY_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9_-]*$").unwrap());

/// Errors from entry construction and persistence
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntryError {
    #[error("Invalid entry ID '{id}': {reason}")]
    InvalidId { id: String, reason: String },

    #[error("Entry '{id}' not found")]
    NotFound { id: String },

    #[error("Entry '{id}' already exists")]
    AlreadyExists { id: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl EntryError {
    pub fn invalid_id(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidId {
            id: id.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists { id: id.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Unique identifier for a persisted configuration entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(String);

impl EntryId {
    /// Create a new entry ID with validation
    pub fn new(id: impl Into<String>) -> Result<Self, EntryError> {
        let id = id.into();

        if id.is_empty() {
            return Err(EntryError::invalid_id(id, "cannot be empty"));
        }

        if id.len() > MAX_ENTRY_ID_LENGTH {
            return Err(EntryError::invalid_id(
                id,
                format!("cannot exceed {} characters", MAX_ENTRY_ID_LENGTH),
            ));
        }

        if !ENTRY_ID_PATTERN.is_match(&id) {
            return Err(EntryError::invalid_id(
                id,
                "must be alphanumeric with hyphens and underscores",
            ));
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated transcriber configuration as persisted by the host platform
///
/// Entries are only ever built from records that passed validation; the
/// flow layer enforces that, not this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigEntry {
    id: EntryId,
    title: String,
    data: TranscriberConfig,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ConfigEntry {
    pub fn new(id: EntryId, title: impl Into<String>, data: TranscriberConfig) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            data,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn data(&self) -> &TranscriberConfig {
        &self.data
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace the entry's title and payload, bumping the update timestamp
    pub fn update(&mut self, title: impl Into<String>, data: TranscriberConfig) {
        self.title = title.into();
        self.data = data;
        self.updated_at = Utc::now();
    }
}
