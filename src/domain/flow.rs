//! Contract between the validator and the host platform's config flows
//!
//! The host renders forms and persists entries; this module only describes
//! the outcome of a flow step and how each error kind is placed on the
//! redisplayed form. Message keys are stable identifiers the host resolves
//! to localized text.

use std::collections::HashMap;

use super::error::ValidationError;
use super::transcriber::{ConfigEntry, ConfigValidationError};

/// Where a form error is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Generic form-level banner
    Base,
    /// Attached to the API key input
    ApiKey,
}

/// Errors to attach to the redisplayed form, keyed by placement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(HashMap<FormField, &'static str>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message_key: &'static str) {
        self.0.insert(field, message_key);
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&ValidationError> for FormErrors {
    fn from(error: &ValidationError) -> Self {
        let mut errors = FormErrors::new();
        match error {
            ValidationError::Connection { .. } => {
                errors.insert(FormField::Base, "connection_error")
            }
            ValidationError::InvalidApiKey { .. } => {
                errors.insert(FormField::ApiKey, "invalid_api_key")
            }
            ValidationError::Unauthorized { .. } => errors.insert(FormField::Base, "unauthorized"),
            ValidationError::WhisperModelNotFound { .. } => {
                errors.insert(FormField::Base, "whisper_model_not_found")
            }
            ValidationError::Unknown { .. } => errors.insert(FormField::Base, "unknown"),
        }
        errors
    }
}

impl From<&ConfigValidationError> for FormErrors {
    fn from(error: &ConfigValidationError) -> Self {
        let mut errors = FormErrors::new();
        match error {
            ConfigValidationError::EmptyApiKey => {
                errors.insert(FormField::ApiKey, "empty_api_key")
            }
            ConfigValidationError::EmptyName => errors.insert(FormField::Base, "empty_name"),
            ConfigValidationError::InvalidTemperature { .. } => {
                errors.insert(FormField::Base, "invalid_temperature")
            }
        }
        errors
    }
}

/// Outcome of a single config-flow step
#[derive(Debug, Clone, PartialEq)]
pub enum FlowResult {
    /// Validation succeeded on initial setup; a new entry was persisted
    CreateEntry(ConfigEntry),
    /// Validation succeeded on reconfigure; the existing entry was updated
    UpdateEntry(ConfigEntry),
    /// Validation failed; redisplay the form with these errors attached
    ShowForm { errors: FormErrors },
    /// The flow cannot continue (e.g. reconfiguring a deleted entry)
    Abort { reason: &'static str },
}
