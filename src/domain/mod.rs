//! Domain layer - Core entities and the validation error taxonomy

pub mod error;
pub mod flow;
pub mod transcriber;

pub use error::ValidationError;
pub use flow::{FlowResult, FormErrors, FormField};
pub use transcriber::{
    validate_temperature, validate_transcriber_config, ConfigEntry, ConfigEntryRepository,
    ConfigValidationError, EntryError, EntryId, TranscriberConfig, WhisperModel, DEFAULT_NAME,
    DEFAULT_PROMPT, DEFAULT_TEMPERATURE,
};
