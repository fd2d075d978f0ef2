//! Analyzer backend wire types.
//!
//! Both POST endpoints take `{"username": ...}` and answer with either the
//! payload modeled here or `{"error": ...}`; the error shape is handled in
//! the client before these types are decoded.

use serde::{Deserialize, Serialize};

/// Request body for both analyzer POST endpoints.
#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeRequest<'a> {
    pub username: &'a str,
}

/// Public identity data for a candidate, as returned by `analyze-profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    /// Absent when the backend could not resolve an avatar; callers derive
    /// one from the username in that case.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Derived candidate evaluation, as returned by `generate-report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub candidate_name: String,
    /// Technical score on a 0–100 scale.
    pub technical_score: u8,
    pub estimated_level: String,
    /// One of a small set of labels, e.g. `"Strong Hire"` or `"Lean Hire"`.
    pub hiring_verdict: String,
    #[serde(default)]
    pub primary_languages: Vec<String>,
    #[serde(default)]
    pub technical_strengths: Vec<String>,
    /// The sentinel entry `"None"` means no flags were found.
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub summary_report: String,
}

/// Response from the backend `health` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: String,
}
