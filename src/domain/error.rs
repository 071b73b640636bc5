use thiserror::Error;

/// Validation outcomes that are not success.
///
/// This is a closed set: every failed validation round-trip maps to exactly
/// one of these kinds. The HTTP-level variants carry the status code and
/// reason phrase so callers can log them without re-contacting the provider.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Transport-level failure reaching the provider (connection refused,
    /// timeout, DNS). Distinct from every provider-side classification.
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// The provider rejected the credential outright (HTTP 401).
    #[error("Invalid API key (HTTP {status}): {reason}")]
    InvalidApiKey { status: u16, reason: String },

    /// The credential is valid but not entitled to Whisper models (HTTP 403).
    #[error("API key not authorized for Whisper (HTTP {status}): {reason}")]
    Unauthorized { status: u16, reason: String },

    /// Any other non-success response, including a 200 whose body could not
    /// be read as a model catalog.
    #[error("Unexpected provider response (HTTP {status}): {reason}")]
    Unknown { status: u16, reason: String },

    /// The provider's model catalog does not contain the requested model.
    /// An empty catalog classifies here as well.
    #[error("Whisper model '{model}' not found in the provider catalog")]
    WhisperModelNotFound { model: String },
}

impl ValidationError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn invalid_api_key(status: u16, reason: impl Into<String>) -> Self {
        Self::InvalidApiKey {
            status,
            reason: reason.into(),
        }
    }

    pub fn unauthorized(status: u16, reason: impl Into<String>) -> Self {
        Self::Unauthorized {
            status,
            reason: reason.into(),
        }
    }

    pub fn unknown(status: u16, reason: impl Into<String>) -> Self {
        Self::Unknown {
            status,
            reason: reason.into(),
        }
    }

    pub fn model_not_found(model: impl Into<String>) -> Self {
        Self::WhisperModelNotFound {
            model: model.into(),
        }
    }

    /// Whether this error should be attached to the API key input field
    /// rather than shown as a form-level banner.
    pub fn concerns_api_key(&self) -> bool {
        matches!(self, Self::InvalidApiKey { .. })
    }
}
