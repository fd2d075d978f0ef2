use thiserror::Error;

/// Errors returned by the analyzer backend client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend reported a structured error, either as a non-2xx response
    /// with an `{"error": ...}` body or as an `error` field embedded in an
    /// otherwise-successful response.
    #[error("{0}")]
    Api(String),

    /// Non-2xx response without a parseable error payload.
    #[error("HTTP {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured backend base URL is not a valid URL.
    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
