use super::*;

fn test_client(base_url: &str) -> BackendClient {
    BackendClient::new(base_url, 30, "ghscore-test/0", 0, 0)
        .expect("client construction should not fail")
}

#[test]
fn endpoint_url_joins_onto_base_path() {
    let client = test_client("http://localhost:5000/api");
    let url = client.endpoint_url("analyze-profile").unwrap();
    assert_eq!(url.as_str(), "http://localhost:5000/api/analyze-profile");
}

#[test]
fn endpoint_url_tolerates_trailing_slash() {
    let client = test_client("http://localhost:5000/api/");
    let url = client.endpoint_url("generate-report").unwrap();
    assert_eq!(url.as_str(), "http://localhost:5000/api/generate-report");
}

#[test]
fn new_rejects_invalid_base_url() {
    let result = BackendClient::new("not a url", 30, "ghscore-test/0", 0, 0);
    assert!(matches!(
        result,
        Err(ClientError::InvalidBaseUrl { ref url, .. }) if url == "not a url"
    ));
}

#[test]
fn embedded_error_reads_error_field() {
    assert_eq!(
        embedded_error(r#"{"error": "User not found"}"#),
        Some("User not found".to_owned())
    );
}

#[test]
fn embedded_error_ignores_clean_payloads() {
    assert_eq!(embedded_error(r#"{"name": "octocat"}"#), None);
    assert_eq!(embedded_error("not json"), None);
    assert_eq!(embedded_error(r#"{"error": 42}"#), None);
}
