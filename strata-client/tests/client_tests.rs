use serde_json::json;
use strata_client::{Client, ClientConfig, Error};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client {
    Client::new(ClientConfig {
        token: "cma-token".to_string(),
        base_url: server.uri(),
        ..Default::default()
    })
}

// ── Config ──────────────────────────────────────────────────────

#[test]
fn config_default_points_at_production() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.base_url, "https://api.strata.io");
    assert_eq!(cfg.timeout_secs, 30);
    assert!(cfg.token.is_empty());
}

#[test]
fn config_serde_roundtrip() {
    let cfg = ClientConfig {
        token: "t".to_string(),
        base_url: "http://localhost:1234".to_string(),
        timeout_secs: 5,
    };
    let json = serde_json::to_string(&cfg).unwrap();
    let back: ClientConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.base_url, "http://localhost:1234");
    assert_eq!(back.timeout_secs, 5);
}

#[test]
fn with_token_uses_defaults() {
    let client = Client::with_token("my-token");
    assert_eq!(client.base_url(), "https://api.strata.io");
}

// ── Required headers ────────────────────────────────────────────

#[tokio::test]
async fn every_request_carries_auth_and_vendor_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/s1"))
        .and(header("Authorization", "Bearer cma-token"))
        .and(header("Content-Type", "application/vnd.strata.management.v1+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sys": {"id": "s1", "type": "Space", "version": 1},
            "name": "dev"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let space = client.spaces().get("s1").await.unwrap();
    assert_eq!(space.name, "dev");
}

// ── Error taxonomy ──────────────────────────────────────────────

#[tokio::test]
async fn structured_api_error_body_is_decoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "sys": {"id": "NotFound", "type": "Error"},
            "message": "The resource could not be found.",
            "requestId": "c4e2b6ea"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.spaces().get("missing").await.unwrap_err();

    match &err {
        Error::Api { status, body } => {
            assert_eq!(*status, 404);
            assert_eq!(body.code(), Some("NotFound"));
            assert_eq!(body.message.as_deref(), Some("The resource could not be found."));
            assert_eq!(body.request_id.as_deref(), Some("c4e2b6ea"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(err.is_not_found());
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn unparseable_error_body_is_tolerated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/s1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.spaces().get("s1").await.unwrap_err();
    match err {
        Error::Api { status, body } => {
            assert_eq!(status, 500);
            assert!(body.code().is_none());
            assert!(body.message.is_none());
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.spaces().get("s1").await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
    assert!(err.status().is_none());
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // nothing listens on this port
    let client = Client::new(ClientConfig {
        token: "t".to_string(),
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
    });

    let err = client.spaces().get("s1").await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[test]
fn missing_id_error_display() {
    assert_eq!(
        Error::MissingId.to_string(),
        "entity has not been created yet (empty id)"
    );
    assert_eq!(
        Error::MissingContentType.to_string(),
        "entry has no content type link"
    );
}
