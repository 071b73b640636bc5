//! GroqCloud Whisper configuration validation
//!
//! Validates user-supplied credentials and settings for a GroqCloud Whisper
//! speech-transcription integration before they are saved:
//! - One round-trip to the provider's model-listing endpoint per submission
//! - A closed taxonomy of failure kinds mapped to form error placements
//! - Setup and reconfigure flows over a pluggable entry-persistence seam

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use domain::{ConfigEntryRepository, ValidationError};
use infrastructure::flow::ConfigFlowService;
use infrastructure::groq::GroqValidator;
use infrastructure::http::HttpClient;

/// Build a flow service from application configuration.
///
/// Wires a reqwest client with the configured timeout to a validator
/// pointed at the configured provider base URL.
pub fn flow_service_from_config<R: ConfigEntryRepository>(
    config: &AppConfig,
    repository: Arc<R>,
) -> Result<ConfigFlowService<HttpClient, R>, ValidationError> {
    let client = HttpClient::with_timeout(Duration::from_secs(config.provider.timeout_secs))?;
    let validator = GroqValidator::with_base_url(client, &config.provider.base_url);

    Ok(ConfigFlowService::new(validator, repository))
}
