//! Transcriber configuration record

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default display label for a new integration entry
pub const DEFAULT_NAME: &str = "GroqCloud Whisper";

/// Default sampling temperature when the user leaves the field empty
pub const DEFAULT_TEMPERATURE: f32 = 0.0;

/// Default transcription prompt when the user leaves the field empty
pub const DEFAULT_PROMPT: &str = "";

/// Whisper models served by GroqCloud
///
/// The enum doubles as the input-schema constraint: a record can only ever
/// carry one of these identifiers. The validator additionally cross-checks
/// the choice against the provider's live model catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WhisperModel {
    #[default]
    #[serde(rename = "whisper-large-v3")]
    LargeV3,
    #[serde(rename = "whisper-large-v3-turbo")]
    LargeV3Turbo,
    #[serde(rename = "distil-whisper-large-v3-en")]
    DistilLargeV3En,
}

impl WhisperModel {
    /// Wire identifier as reported by the provider's model catalog
    pub fn as_str(&self) -> &'static str {
        match self {
            WhisperModel::LargeV3 => "whisper-large-v3",
            WhisperModel::LargeV3Turbo => "whisper-large-v3-turbo",
            WhisperModel::DistilLargeV3En => "distil-whisper-large-v3-en",
        }
    }

    /// List all supported models
    pub fn all() -> &'static [WhisperModel] {
        &[
            WhisperModel::LargeV3,
            WhisperModel::LargeV3Turbo,
            WhisperModel::DistilLargeV3En,
        ]
    }
}

impl fmt::Display for WhisperModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WhisperModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "whisper-large-v3" => Ok(WhisperModel::LargeV3),
            "whisper-large-v3-turbo" => Ok(WhisperModel::LargeV3Turbo),
            "distil-whisper-large-v3-en" => Ok(WhisperModel::DistilLargeV3En),
            _ => Err(format!(
                "Unsupported Whisper model: {}. Supported: whisper-large-v3, whisper-large-v3-turbo, distil-whisper-large-v3-en",
                s
            )),
        }
    }
}

/// User-supplied configuration for a GroqCloud Whisper integration
///
/// Constructed transiently from form input, validated against the provider,
/// and on success handed to the host for persistence. `temperature` and
/// `prompt` stay `None` until [`TranscriberConfig::normalized`] fills in the
/// defaults; a record returned by a successful validation always has both
/// set.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriberConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub api_key: String,
    #[serde(default)]
    pub model: WhisperModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

impl TranscriberConfig {
    /// Create a record with the default name and model and no optional fields
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            name: default_name(),
            api_key: api_key.into(),
            model: WhisperModel::default(),
            temperature: None,
            prompt: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_model(mut self, model: WhisperModel) -> Self {
        self.model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Fill in defaults for the optional fields
    pub fn normalized(mut self) -> Self {
        if self.temperature.is_none() {
            self.temperature = Some(DEFAULT_TEMPERATURE);
        }
        if self.prompt.is_none() {
            self.prompt = Some(DEFAULT_PROMPT.to_string());
        }
        self
    }
}

/// The API key must never reach a log sink, so `Debug` masks it. Trace the
/// record directly; there is no unmasked view to leak.
impl fmt::Debug for TranscriberConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranscriberConfig")
            .field("name", &self.name)
            .field("api_key", &"<api_key>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("prompt", &self.prompt)
            .finish()
    }
}
