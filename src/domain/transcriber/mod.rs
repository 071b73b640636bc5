//! Transcriber configuration domain

mod entity;
mod entry;
mod repository;
mod validation;

pub use entity::{
    TranscriberConfig, WhisperModel, DEFAULT_NAME, DEFAULT_PROMPT, DEFAULT_TEMPERATURE,
};
pub use entry::{ConfigEntry, EntryError, EntryId, MAX_ENTRY_ID_LENGTH};
pub use repository::ConfigEntryRepository;
pub use validation::{
    validate_temperature, validate_transcriber_config, ConfigValidationError, MAX_TEMPERATURE,
    MIN_TEMPERATURE,
};
