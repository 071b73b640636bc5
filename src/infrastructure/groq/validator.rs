//! Remote validation against the GroqCloud model catalog

use super::catalog::ModelCatalog;
use crate::domain::{TranscriberConfig, ValidationError};
use crate::infrastructure::http::HttpClientTrait;

const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com";

/// Validates a [`TranscriberConfig`] with one round-trip to the provider's
/// model-listing endpoint.
///
/// Stateless: every call builds its own request from the record it is
/// given, and a single failed attempt surfaces immediately. The caller
/// redisplays the form and lets the human retry.
#[derive(Debug)]
pub struct GroqValidator<C: HttpClientTrait> {
    client: C,
    base_url: String,
}

impl<C: HttpClientTrait> GroqValidator<C> {
    pub fn new(client: C) -> Self {
        Self::with_base_url(client, DEFAULT_GROQ_BASE_URL)
    }

    pub fn with_base_url(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn models_url(&self) -> String {
        format!("{}/openai/v1/models", self.base_url)
    }

    /// Validate the record against the provider.
    ///
    /// Fills in defaults for `temperature` and `prompt`, then cross-checks
    /// the selected model against the live catalog, authenticating with the
    /// record's API key. Returns the normalized record on success.
    pub async fn validate(
        &self,
        record: TranscriberConfig,
    ) -> Result<TranscriberConfig, ValidationError> {
        let record = record.normalized();
        // Debug formatting masks the API key.
        tracing::debug!(record = ?record, "Validating transcriber configuration");

        let auth_header = format!("Bearer {}", record.api_key);
        let headers = vec![
            ("Authorization", auth_header.as_str()),
            ("Content-Type", "application/json"),
        ];

        let response = self.client.get(&self.models_url(), headers).await?;

        tracing::debug!(
            elapsed_ms = response.elapsed.as_millis() as u64,
            status = response.status,
            reason = %response.reason,
            "Model catalog request completed"
        );

        match response.status {
            401 => Err(ValidationError::invalid_api_key(
                response.status,
                response.reason,
            )),
            403 => Err(ValidationError::unauthorized(
                response.status,
                response.reason,
            )),
            200 => {
                let catalog: ModelCatalog = response.json().map_err(|e| {
                    ValidationError::unknown(
                        response.status,
                        format!("Invalid model catalog: {}", e),
                    )
                })?;

                if catalog.contains(record.model.as_str()) {
                    tracing::debug!("Transcriber validation successful");
                    Ok(record)
                } else {
                    Err(ValidationError::model_not_found(record.model.as_str()))
                }
            }
            status => Err(ValidationError::unknown(status, response.reason)),
        }
    }
}
