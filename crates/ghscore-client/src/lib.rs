//! HTTP client for the candidate-analyzer backend.
//!
//! Wraps `reqwest` with backend-specific error handling and typed response
//! deserialization. The backend reports failures two ways — a non-2xx status
//! with an `{"error": ...}` body, or a 2xx body that itself carries an
//! `error` field — and [`BackendClient`] normalizes both into
//! [`ClientError::Api`], so callers only ever branch on one error type.

mod client;
mod error;
mod retry;
mod types;

pub use client::BackendClient;
pub use error::ClientError;
pub use types::{HealthStatus, Profile, Report};
