//! Integration tests for `BackendClient` using wiremock HTTP mocks.

use ghscore_client::{BackendClient, ClientError};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> BackendClient {
    BackendClient::new(base_url, 30, "ghscore-test/0", 0, 0)
        .expect("client construction should not fail")
}

fn profile_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Octo Cat",
        "bio": "Builds things on GitHub",
        "public_repos": 24,
        "followers": 128,
        "avatar_url": "https://github.com/octocat.png"
    })
}

#[tokio::test]
async fn fetch_profile_returns_parsed_profile() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze-profile"))
        .and(body_json(serde_json::json!({ "username": "octocat" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let profile = client
        .fetch_profile("octocat")
        .await
        .expect("should parse profile");

    assert_eq!(profile.name, "Octo Cat");
    assert_eq!(profile.bio.as_deref(), Some("Builds things on GitHub"));
    assert_eq!(profile.public_repos, 24);
    assert_eq!(profile.followers, 128);
    assert_eq!(
        profile.avatar_url.as_deref(),
        Some("https://github.com/octocat.png")
    );
}

#[tokio::test]
async fn fetch_profile_defaults_optional_fields() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "name": "Octo Cat",
        "public_repos": 3,
        "followers": 0
    });
    Mock::given(method("POST"))
        .and(path("/analyze-profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let profile = client.fetch_profile("octocat").await.expect("should parse");

    assert!(profile.bio.is_none());
    assert!(profile.avatar_url.is_none());
}

#[tokio::test]
async fn fetch_report_returns_parsed_report() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "candidate_name": "Octo Cat",
        "technical_score": 85,
        "estimated_level": "Senior",
        "hiring_verdict": "Strong Hire",
        "primary_languages": ["Rust", "Python"],
        "technical_strengths": ["Clean code", "Good documentation"],
        "red_flags": ["None"],
        "summary_report": "Excellent candidate with strong technical skills."
    });
    Mock::given(method("POST"))
        .and(path("/generate-report"))
        .and(body_json(serde_json::json!({ "username": "octocat" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let report = client
        .fetch_report("octocat")
        .await
        .expect("should parse report");

    assert_eq!(report.candidate_name, "Octo Cat");
    assert_eq!(report.technical_score, 85);
    assert_eq!(report.hiring_verdict, "Strong Hire");
    assert_eq!(report.primary_languages, vec!["Rust", "Python"]);
    assert_eq!(report.red_flags, vec!["None"]);
}

#[tokio::test]
async fn error_status_with_error_body_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze-profile"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": "User not found"
            })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_profile("nobody").await.unwrap_err();

    assert!(
        matches!(err, ClientError::Api(ref msg) if msg == "User not found"),
        "expected Api(User not found), got: {err:?}"
    );
}

#[tokio::test]
async fn ok_status_with_embedded_error_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-report"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "error": "No repositories found"
            })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_report("ghost").await.unwrap_err();

    assert!(
        matches!(err, ClientError::Api(ref msg) if msg == "No repositories found"),
        "an embedded error must never decode as a successful report, got: {err:?}"
    );
}

#[tokio::test]
async fn error_status_without_payload_reports_generic_http_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze-profile"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_profile("octocat").await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::UnexpectedStatus { status: 500, .. }
    ));
    assert!(
        err.to_string().starts_with("HTTP 500"),
        "generic message should embed the status code: {err}"
    );
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze-profile"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_profile("octocat").await.unwrap_err();

    assert!(matches!(err, ClientError::Deserialize { .. }));
}

#[tokio::test]
async fn transient_server_error_is_retried() {
    let server = MockServer::start().await;

    // First attempt gets a 503, the retry gets the real payload.
    Mock::given(method("POST"))
        .and(path("/analyze-profile"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/analyze-profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = BackendClient::new(&server.uri(), 30, "ghscore-test/0", 2, 0)
        .expect("client construction should not fail");
    let profile = client
        .fetch_profile("octocat")
        .await
        .expect("should succeed on retry");

    assert_eq!(profile.name, "Octo Cat");
}

#[tokio::test]
async fn health_returns_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "healthy",
            "service": "GitHub Analyzer API"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let health = client.health().await.expect("should parse health status");

    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, "GitHub Analyzer API");
}
