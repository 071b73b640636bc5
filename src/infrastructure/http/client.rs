use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::domain::ValidationError;

/// Outcome of a completed HTTP exchange
///
/// Non-success status codes are not errors at this layer; classification is
/// the validator's job and needs the raw status and reason phrase. Only
/// transport failures surface as `Err`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
    pub elapsed: Duration,
}

impl HttpResponse {
    /// Deserialize the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    /// Perform a GET request, returning the response whatever its status.
    /// Fails only on transport-level errors (connection, timeout, DNS).
    async fn get(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
    ) -> Result<HttpResponse, ValidationError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ValidationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                ValidationError::connection(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
    ) -> Result<HttpResponse, ValidationError> {
        let mut request = self.client.get(url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let started = std::time::Instant::now();

        let response = request
            .send()
            .await
            .map_err(|e| ValidationError::connection(format!("Request failed: {}", e)))?;

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();

        let body = response
            .text()
            .await
            .map_err(|e| ValidationError::connection(format!("Failed to read response: {}", e)))?;

        Ok(HttpResponse {
            status: status.as_u16(),
            reason,
            body,
            elapsed: started.elapsed(),
        })
    }
}
