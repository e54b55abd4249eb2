//! Integration tests for the user service.
//!
//! These tests drive `GET /users/{id}` and `GET /verify_credentials` against
//! a mock server through the real reqwest transport.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::json;
use twitcasting_api::{
    BaseUrl, Credentials, FailureKind, TwitcastingClient, TwitcastingConfig, TwitcastingError,
    ValidationError,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TwitcastingClient {
    let config = TwitcastingConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build();
    TwitcastingClient::new(config).unwrap()
}

fn user_json() -> serde_json::Value {
    json!({
        "id": "182224938",
        "screen_id": "twitcasting_jp",
        "name": "ツイキャス公式",
        "image": "http://example.com/image.png",
        "profile": "ツイキャスの公式アカウントです。",
        "level": 24,
        "last_movie_id": "189037369",
        "is_live": true
    })
}

#[tokio::test]
async fn test_get_user_info_sends_basic_auth_and_api_headers() {
    let mock_server = MockServer::start().await;
    let expected_auth = format!("Basic {}", STANDARD.encode("client-id:client-secret"));

    Mock::given(method("GET"))
        .and(path("/users/twitcasting_jp"))
        .and(header("Authorization", expected_auth.as_str()))
        .and(header("Accept", "application/json"))
        .and(header("X-Api-Version", "2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": user_json(),
            "supporter_count": 10,
            "supporting_count": 24
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let credentials = Credentials::basic("client-id", "client-secret").unwrap();

    let info = client
        .users()
        .get_user_info("twitcasting_jp", &credentials)
        .await
        .unwrap();

    assert_eq!(info.user.id, "182224938");
    assert_eq!(info.user.screen_id, "twitcasting_jp");
    assert_eq!(info.user.level, 24);
    assert!(info.user.is_live);
    assert_eq!(info.supporter_count, 10);
    assert_eq!(info.supporting_count, 24);
}

#[tokio::test]
async fn test_get_user_info_with_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/182224938"))
        .and(header("Authorization", "Bearer user-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {"id": "182224938"}})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let credentials = Credentials::bearer("user-token").unwrap();

    let info = client
        .users()
        .get_user_info("182224938", &credentials)
        .await
        .unwrap();

    assert_eq!(info.user.id, "182224938");
    assert_eq!(info.user.name, "");
    assert!(info.user.last_movie_id.is_none());
    assert_eq!(info.supporter_count, 0);
    assert_eq!(info.supporting_count, 0);
}

#[tokio::test]
async fn test_get_user_info_reads_counts_from_user_object() {
    let mock_server = MockServer::start().await;

    let mut user = user_json();
    user["supporter_count"] = json!(7);
    user["supporting_count"] = json!(3);

    Mock::given(method("GET"))
        .and(path("/users/twitcasting_jp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let info = client
        .users()
        .get_user_info("twitcasting_jp", &Credentials::bearer("t").unwrap())
        .await
        .unwrap();

    assert_eq!(info.supporter_count, 7);
    assert_eq!(info.supporting_count, 3);
}

#[tokio::test]
async fn test_get_user_info_platform_error_in_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/protected_user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"code": 2002, "message": "Protected"}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client
        .users()
        .get_user_info("protected_user", &Credentials::bearer("t").unwrap())
        .await
        .unwrap_err();

    assert_eq!(error.platform_kind(), Some(FailureKind::Protected));
    assert_eq!(error.code(), Some(2002));
}

#[tokio::test]
async fn test_get_user_info_not_found_status_without_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/nobody"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client
        .users()
        .get_user_info("nobody", &Credentials::bearer("t").unwrap())
        .await
        .unwrap_err();

    assert_eq!(error.platform_kind(), Some(FailureKind::NotFound));
    assert_eq!(error.code(), Some(404));
    assert_eq!(error.to_string(), "Error 404: Not Found - The content was not found");
}

#[tokio::test]
async fn test_get_user_info_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/twitcasting_jp"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client
        .users()
        .get_user_info("twitcasting_jp", &Credentials::bearer("t").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(error, TwitcastingError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_verify_credentials_returns_app_and_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/verify_credentials"))
        .and(header("Authorization", "Bearer user-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "app": {
                "client_id": "182224938.d37f58350925d568e2db24719fe86f0c",
                "name": "サンプルアプリケーション",
                "owner_user_id": "182224938"
            },
            "user": user_json(),
            "supporter_count": 1,
            "supporting_count": 2
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let info = client
        .users()
        .verify_credentials(&Credentials::bearer("user-token").unwrap())
        .await
        .unwrap();

    assert_eq!(info.app.client_id(), "182224938.d37f58350925d568e2db24719fe86f0c");
    assert_eq!(info.app.owner_user_id(), "182224938");
    assert_eq!(info.user.screen_id, "twitcasting_jp");
    assert_eq!(info.supporter_count, 1);
    assert_eq!(info.supporting_count, 2);
}

#[tokio::test]
async fn test_verify_credentials_rejects_incomplete_app() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/verify_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "app": {"client_id": "cid", "name": "", "owner_user_id": "1"},
            "user": user_json()
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client
        .users()
        .verify_credentials(&Credentials::bearer("t").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        TwitcastingError::Validation(ValidationError::EmptyField { field: "name", .. })
    ));
}

#[tokio::test]
async fn test_verify_credentials_invalid_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/verify_credentials"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"code": 1000, "message": "Invalid token"}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client
        .users()
        .verify_credentials(&Credentials::bearer("expired").unwrap())
        .await
        .unwrap_err();

    assert_eq!(error.platform_kind(), Some(FailureKind::InvalidToken));
}

#[tokio::test]
async fn test_get_user_info_rejects_non_numeric_count() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/twitcasting_jp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": user_json(),
            "supporter_count": "10",
            "supporting_count": 24
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client
        .users()
        .get_user_info("twitcasting_jp", &Credentials::bearer("t").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(error, TwitcastingError::MalformedResponse { .. }));
}
