//! HTTP client for the candidate-analyzer backend.
//!
//! Both analysis endpoints are POSTs with a `{"username": ...}` body. The
//! client asserts the HTTP status, normalizes the backend's two error shapes
//! into [`ClientError::Api`], and retries transient failures with
//! exponential back-off.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::retry::retry_with_backoff;
use crate::types::{AnalyzeRequest, HealthStatus, Profile, Report};

const PROFILE_ENDPOINT: &str = "analyze-profile";
const REPORT_ENDPOINT: &str = "generate-report";
const HEALTH_ENDPOINT: &str = "health";

/// Client for the candidate-analyzer backend API.
///
/// Manages the HTTP client, base URL, and retry policy. Point `base_url` at
/// the deployed backend in production or at a mock server in tests.
pub struct BackendClient {
    client: Client,
    base_url: Url,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in milliseconds for exponential back-off.
    backoff_base_ms: u64,
}

impl BackendClient {
    /// Creates a client with configured timeout, `User-Agent`, and retry policy.
    ///
    /// `max_retries` is the number of additional attempts after the first
    /// failure for retriable errors (network failures, 5xx). Set to `0` to
    /// disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` does not parse,
    /// or [`ClientError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends the endpoint segment rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            max_retries,
            backoff_base_ms,
        })
    }

    /// Fetches the public profile for a GitHub username.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Api`] if the backend reports an application error
    ///   (unknown user, missing username).
    /// - [`ClientError::Http`] / [`ClientError::UnexpectedStatus`] on
    ///   transport failure, after retries are exhausted.
    /// - [`ClientError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn fetch_profile(&self, username: &str) -> Result<Profile, ClientError> {
        self.post_and_decode(PROFILE_ENDPOINT, username).await
    }

    /// Generates the full technical report for a GitHub username.
    ///
    /// This is the slow call — the backend scans repositories before
    /// answering — so the configured request timeout applies in full.
    ///
    /// # Errors
    ///
    /// Same contract as [`BackendClient::fetch_profile`].
    pub async fn fetch_report(&self, username: &str) -> Result<Report, ClientError> {
        self.post_and_decode(REPORT_ENDPOINT, username).await
    }

    /// Checks backend liveness via the `health` endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on network failure or a non-2xx status,
    /// or [`ClientError::Deserialize`] if the body is not the expected shape.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = self.endpoint_url(HEALTH_ENDPOINT)?;
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// POSTs `{"username": ...}` to `path` with retry, then decodes the body.
    async fn post_and_decode<T: DeserializeOwned>(
        &self,
        path: &str,
        username: &str,
    ) -> Result<T, ClientError> {
        let url = self.endpoint_url(path)?;
        let result = retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.post_json(&url, username)
        })
        .await
        .and_then(|body| {
            serde_json::from_value::<T>(body).map_err(|e| ClientError::Deserialize {
                context: format!("{path}(username={username})"),
                source: e,
            })
        });

        if let Err(ref err) = result {
            tracing::error!(endpoint = path, username, error = %err, "backend request failed");
        }
        result
    }

    /// Sends one POST request and normalizes the response into JSON.
    ///
    /// Non-2xx responses carrying `{"error": ...}` become
    /// [`ClientError::Api`]; non-2xx without a parseable payload becomes
    /// [`ClientError::UnexpectedStatus`]. A 2xx body with an embedded
    /// `error` field is also [`ClientError::Api`] — it must never be
    /// mistaken for a successful payload.
    async fn post_json(
        &self,
        url: &Url,
        username: &str,
    ) -> Result<serde_json::Value, ClientError> {
        let response = self
            .client
            .post(url.clone())
            .json(&AnalyzeRequest { username })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if let Some(message) = embedded_error(&body) {
                return Err(ClientError::Api(message));
            }
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;
        if let Some(message) = value.get("error").and_then(serde_json::Value::as_str) {
            return Err(ClientError::Api(message.to_owned()));
        }
        Ok(value)
    }

    /// Resolves an endpoint path against the normalized base URL.
    fn endpoint_url(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Extracts the `error` string from a response body, if there is one.
fn embedded_error(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
