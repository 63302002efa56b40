//! HTTP client for the prompt endpoints

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{
    AppliedTemplate, ApplyTemplateRequest, EnhanceRequest, EnhanceResult, ErrorBody, Suggestion,
    SuggestionsRequest, SuggestionsResponse, TemplateCatalog,
};

/// Errors that can occur while talking to the backend
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    /// Transport failure (unreachable host, timeout, broken connection)
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Backend API client
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch completions for the token under the cursor
    pub async fn suggestions(&self, token: &str) -> Result<Vec<Suggestion>, BackendError> {
        let response: SuggestionsResponse = self
            .post("/prompt/suggestions", &SuggestionsRequest { input: token })
            .await?;
        Ok(response.suggestions)
    }

    pub async fn enhance(&self, prompt: &str) -> Result<EnhanceResult, BackendError> {
        self.post("/prompt/enhance", &EnhanceRequest { prompt }).await
    }

    pub async fn templates(&self) -> Result<TemplateCatalog, BackendError> {
        let request = self.http.get(self.endpoint("/prompt/templates"));
        self.send(request).await
    }

    pub async fn apply_template(
        &self,
        template_id: &str,
        subject: &str,
    ) -> Result<AppliedTemplate, BackendError> {
        self.post(
            "/prompt/apply-template",
            &ApplyTemplateRequest {
                template_id,
                subject,
            },
        )
        .await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.post(self.endpoint(path)).json(body);
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        parse_body(&body)
    }
}

pub(crate) fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, BackendError> {
    serde_json::from_str(body).map_err(|e| BackendError::Parse(e.to_string()))
}

/// Build an API error, preferring the server's `{"error": ...}` message
pub(crate) fn api_error(code: u16, body: &str) -> BackendError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => err.error,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    };
    BackendError::Api { code, message }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
