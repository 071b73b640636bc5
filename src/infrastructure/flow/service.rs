//! Setup and reconfigure config flows

use std::sync::Arc;

use crate::domain::{
    validate_transcriber_config, ConfigEntry, ConfigEntryRepository, EntryError, EntryId,
    FlowResult, FormErrors, TranscriberConfig,
};
use crate::infrastructure::groq::GroqValidator;
use crate::infrastructure::http::HttpClientTrait;

/// Drives the two user-facing configuration flows: initial setup and
/// reconfiguration of an existing entry.
///
/// Each step validates the submitted record and either persists it or
/// returns the form errors to display. Validation failures never leave a
/// partial entry behind; persistence only happens after the remote
/// cross-check succeeds.
pub struct ConfigFlowService<C: HttpClientTrait, R: ConfigEntryRepository> {
    validator: GroqValidator<C>,
    repository: Arc<R>,
}

impl<C: HttpClientTrait, R: ConfigEntryRepository> ConfigFlowService<C, R> {
    pub fn new(validator: GroqValidator<C>, repository: Arc<R>) -> Self {
        Self {
            validator,
            repository,
        }
    }

    /// Initial setup step: validate the submitted record and create a new
    /// entry titled with the record's name.
    pub async fn step_user(
        &self,
        entry_id: EntryId,
        input: TranscriberConfig,
    ) -> Result<FlowResult, EntryError> {
        let record = match self.check(input).await {
            Ok(record) => record,
            Err(errors) => return Ok(FlowResult::ShowForm { errors }),
        };

        let entry = ConfigEntry::new(entry_id, record.name.clone(), record);

        match self.repository.create(entry).await {
            Ok(entry) => Ok(FlowResult::CreateEntry(entry)),
            Err(EntryError::AlreadyExists { .. }) => Ok(FlowResult::Abort {
                reason: "already_configured",
            }),
            Err(e) => Err(e),
        }
    }

    /// Reconfigure step: validate the submitted record and update the
    /// existing entry in place.
    pub async fn step_reconfigure(
        &self,
        entry_id: &EntryId,
        input: TranscriberConfig,
    ) -> Result<FlowResult, EntryError> {
        let Some(mut entry) = self.repository.get(entry_id).await? else {
            return Ok(FlowResult::Abort {
                reason: "reconfigure_failed",
            });
        };

        let record = match self.check(input).await {
            Ok(record) => record,
            Err(errors) => return Ok(FlowResult::ShowForm { errors }),
        };

        entry.update(record.name.clone(), record);

        match self.repository.update(entry).await {
            Ok(entry) => Ok(FlowResult::UpdateEntry(entry)),
            Err(EntryError::NotFound { .. }) => Ok(FlowResult::Abort {
                reason: "reconfigure_failed",
            }),
            Err(e) => Err(e),
        }
    }

    /// Local checks, then the remote round-trip. Returns the normalized
    /// record or the form errors to display.
    async fn check(&self, input: TranscriberConfig) -> Result<TranscriberConfig, FormErrors> {
        if let Err(e) = validate_transcriber_config(&input) {
            tracing::warn!(error = %e, "Transcriber configuration rejected locally");
            return Err(FormErrors::from(&e));
        }

        match self.validator.validate(input).await {
            Ok(record) => Ok(record),
            Err(e) => {
                tracing::error!(error = %e, "Transcriber validation failed");
                Err(FormErrors::from(&e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FormField, WhisperModel, DEFAULT_PROMPT, DEFAULT_TEMPERATURE};
    use crate::infrastructure::entry::InMemoryConfigEntryRepository;
    use crate::infrastructure::http::mock::MockHttpClient;

    const TEST_URL: &str = "https://api.groq.com/openai/v1/models";

    fn service(
        client: MockHttpClient,
    ) -> (
        ConfigFlowService<MockHttpClient, InMemoryConfigEntryRepository>,
        Arc<InMemoryConfigEntryRepository>,
    ) {
        let repository = Arc::new(InMemoryConfigEntryRepository::new());
        let service = ConfigFlowService::new(GroqValidator::new(client), repository.clone());
        (service, repository)
    }

    fn whisper_catalog() -> serde_json::Value {
        serde_json::json!({ "data": [{ "id": "whisper-large-v3" }] })
    }

    #[tokio::test]
    async fn test_step_user_creates_normalized_entry() {
        let client =
            MockHttpClient::new().with_json_response(TEST_URL, 200, "OK", whisper_catalog());
        let (service, repository) = service(client);

        let input = TranscriberConfig::new("sk-abc").with_name("My Whisper");
        let result = service
            .step_user(EntryId::new("groq-whisper").unwrap(), input)
            .await
            .unwrap();

        let FlowResult::CreateEntry(entry) = result else {
            panic!("Expected CreateEntry, got {:?}", result);
        };
        assert_eq!(entry.title(), "My Whisper");
        assert_eq!(entry.data().temperature, Some(DEFAULT_TEMPERATURE));
        assert_eq!(entry.data().prompt, Some(DEFAULT_PROMPT.to_string()));

        assert_eq!(repository.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_step_user_failure_persists_nothing() {
        let client = MockHttpClient::new().with_response(TEST_URL, 401, "Unauthorized", "{}");
        let (service, repository) = service(client);

        let result = service
            .step_user(
                EntryId::new("groq-whisper").unwrap(),
                TranscriberConfig::new("gsk_bad"),
            )
            .await
            .unwrap();

        let FlowResult::ShowForm { errors } = result else {
            panic!("Expected ShowForm, got {:?}", result);
        };
        assert_eq!(errors.get(FormField::ApiKey), Some("invalid_api_key"));
        assert!(repository.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_step_user_duplicate_entry_aborts() {
        let client =
            MockHttpClient::new().with_json_response(TEST_URL, 200, "OK", whisper_catalog());
        let (service, _repository) = service(client);

        let id = EntryId::new("groq-whisper").unwrap();
        service
            .step_user(id.clone(), TranscriberConfig::new("gsk_test"))
            .await
            .unwrap();

        let result = service
            .step_user(id, TranscriberConfig::new("gsk_test"))
            .await
            .unwrap();

        assert_eq!(
            result,
            FlowResult::Abort {
                reason: "already_configured"
            }
        );
    }

    #[tokio::test]
    async fn test_step_user_local_rejection_skips_remote_call() {
        // No mock response mounted: a remote call would fail the test with
        // a connection error instead of the expected field error.
        let (service, _repository) = service(MockHttpClient::new());

        let result = service
            .step_user(
                EntryId::new("groq-whisper").unwrap(),
                TranscriberConfig::new(""),
            )
            .await
            .unwrap();

        let FlowResult::ShowForm { errors } = result else {
            panic!("Expected ShowForm, got {:?}", result);
        };
        assert_eq!(errors.get(FormField::ApiKey), Some("empty_api_key"));
    }

    #[tokio::test]
    async fn test_step_reconfigure_updates_entry() {
        let client =
            MockHttpClient::new().with_json_response(TEST_URL, 200, "OK", whisper_catalog());
        let (service, repository) = service(client);

        let id = EntryId::new("groq-whisper").unwrap();
        service
            .step_user(id.clone(), TranscriberConfig::new("gsk_old"))
            .await
            .unwrap();

        let input = TranscriberConfig::new("gsk_new")
            .with_name("Renamed")
            .with_temperature(0.3);
        let result = service.step_reconfigure(&id, input).await.unwrap();

        let FlowResult::UpdateEntry(entry) = result else {
            panic!("Expected UpdateEntry, got {:?}", result);
        };
        assert_eq!(entry.title(), "Renamed");
        assert_eq!(entry.data().api_key, "gsk_new");
        assert_eq!(entry.data().temperature, Some(0.3));

        let stored = repository.get(&id).await.unwrap().unwrap();
        assert_eq!(stored.title(), "Renamed");
    }

    #[tokio::test]
    async fn test_step_reconfigure_missing_entry_aborts() {
        let client =
            MockHttpClient::new().with_json_response(TEST_URL, 200, "OK", whisper_catalog());
        let (service, _repository) = service(client);

        let result = service
            .step_reconfigure(
                &EntryId::new("missing").unwrap(),
                TranscriberConfig::new("gsk_test"),
            )
            .await
            .unwrap();

        assert_eq!(
            result,
            FlowResult::Abort {
                reason: "reconfigure_failed"
            }
        );
    }

    #[tokio::test]
    async fn test_step_reconfigure_failure_keeps_existing_entry() {
        let client =
            MockHttpClient::new().with_json_response(TEST_URL, 200, "OK", whisper_catalog());
        let (service, repository) = service(client);

        let id = EntryId::new("groq-whisper").unwrap();
        service
            .step_user(id.clone(), TranscriberConfig::new("gsk_old"))
            .await
            .unwrap();

        // Swap the catalog for one missing the requested model.
        let client = MockHttpClient::new().with_json_response(
            TEST_URL,
            200,
            "OK",
            serde_json::json!({ "data": [{ "id": "other-model" }] }),
        );
        let service = ConfigFlowService::new(GroqValidator::new(client), repository.clone());

        let input = TranscriberConfig::new("gsk_new").with_model(WhisperModel::LargeV3);
        let result = service.step_reconfigure(&id, input).await.unwrap();

        let FlowResult::ShowForm { errors } = result else {
            panic!("Expected ShowForm, got {:?}", result);
        };
        assert_eq!(
            errors.get(FormField::Base),
            Some("whisper_model_not_found")
        );

        let stored = repository.get(&id).await.unwrap().unwrap();
        assert_eq!(stored.data().api_key, "gsk_old");
    }
}
