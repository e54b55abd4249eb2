//! Integration tests for webhook subscription management.
//!
//! These tests drive `GET`, `POST`, and `DELETE /webhooks` against a mock
//! server through the real reqwest transport.

use serde_json::json;
use twitcasting_api::services::ListWebhooksParams;
use twitcasting_api::{
    BaseUrl, Credentials, FailureKind, TwitcastingClient, TwitcastingConfig, TwitcastingError,
    ValidationError, WebhookEvent,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TwitcastingClient {
    let config = TwitcastingConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build();
    TwitcastingClient::new(config).unwrap()
}

fn app_credentials() -> Credentials {
    Credentials::basic("client-id", "client-secret").unwrap()
}

#[tokio::test]
async fn test_list_webhooks_with_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/webhooks"))
        .and(query_param("limit", "50"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "all_count": 2,
            "webhooks": [
                {"user_id": "7134775954", "event": "livestart"},
                {"user_id": "7134775954", "event": "liveend"}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client
        .webhooks()
        .list_webhooks(&app_credentials(), &ListWebhooksParams::new())
        .await
        .unwrap();

    assert_eq!(page.all_count, 2);
    assert_eq!(page.webhooks.len(), 2);
    assert_eq!(page.webhooks[0].user_id(), "7134775954");
    assert_eq!(page.webhooks[0].event(), WebhookEvent::LiveStart);
    assert_eq!(page.webhooks[1].event(), WebhookEvent::LiveEnd);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("limit=50&offset=0"));
}

#[tokio::test]
async fn test_list_webhooks_with_user_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/webhooks"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "20"))
        .and(query_param("user_id", "7134775954"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "all_count": 0,
            "webhooks": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = ListWebhooksParams::new()
        .user_id("7134775954")
        .limit(10)
        .offset(20);
    let page = client
        .webhooks()
        .list_webhooks(&app_credentials(), &params)
        .await
        .unwrap();

    assert_eq!(page.all_count, 0);
    assert!(page.webhooks.is_empty());
}

#[tokio::test]
async fn test_list_webhooks_empty_user_filter_is_omitted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/webhooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client
        .webhooks()
        .list_webhooks(&app_credentials(), &ListWebhooksParams::new().user_id(""))
        .await
        .unwrap();
    assert_eq!(page.all_count, 0);

    let requests = mock_server.received_requests().await.unwrap();
    assert!(!requests[0].url.query().unwrap_or_default().contains("user_id"));
}

#[tokio::test]
async fn test_list_webhooks_invalid_entry_aborts_whole_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/webhooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "all_count": 2,
            "webhooks": [
                {"user_id": "u1", "event": "livestart"},
                {"user_id": "u2", "event": "liveupdate"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client
        .webhooks()
        .list_webhooks(&app_credentials(), &ListWebhooksParams::new())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        TwitcastingError::Validation(ValidationError::InvalidEvent { event }) if event == "liveupdate"
    ));
}

#[tokio::test]
async fn test_register_webhook_sends_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webhooks"))
        .and(header("Content-Type", "application/json"))
        .and(header("X-Api-Version", "2.0"))
        .and(body_json(json!({
            "user_id": "7134775954",
            "events": ["livestart", "liveend"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "user_id": "7134775954",
            "added_events": ["livestart", "liveend"],
            "events": ["livestart", "liveend"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let change = client
        .webhooks()
        .register_webhook(&app_credentials(), "7134775954", &WebhookEvent::ALL)
        .await
        .unwrap();

    assert_eq!(change.user_id, "7134775954");
    assert_eq!(change.events, vec!["livestart", "liveend"]);
}

#[tokio::test]
async fn test_register_webhook_returns_server_confirmed_values() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webhooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": "canonical-id",
            "events": ["livestart"]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let change = client
        .webhooks()
        .register_webhook(
            &app_credentials(),
            "screen_name",
            &[WebhookEvent::LiveStart, WebhookEvent::LiveEnd],
        )
        .await
        .unwrap();

    assert_eq!(change.user_id, "canonical-id");
    assert_eq!(change.events, vec!["livestart"]);
}

#[tokio::test]
async fn test_register_webhook_invalid_url_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webhooks"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 1002, "message": "Invalid WebHook URL"}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client
        .webhooks()
        .register_webhook(&app_credentials(), "u1", &[WebhookEvent::LiveStart])
        .await
        .unwrap_err();

    assert_eq!(error.platform_kind(), Some(FailureKind::InvalidWebhookUrl));
    assert_eq!(error.code(), Some(1002));
}

#[tokio::test]
async fn test_delete_webhook_sends_user_id_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/webhooks"))
        .and(query_param("user_id", "7134775954"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": "7134775954",
            "deleted_events": ["livestart"],
            "events": ["liveend"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let change = client
        .webhooks()
        .delete_webhook(&app_credentials(), "7134775954")
        .await
        .unwrap();

    assert_eq!(change.user_id, "7134775954");
    assert_eq!(change.events, vec!["liveend"]);

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_delete_webhook_unknown_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/webhooks"))
        .respond_with(ResponseTemplate::new(418))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client
        .webhooks()
        .delete_webhook(&app_credentials(), "u1")
        .await
        .unwrap_err();

    assert_eq!(error.platform_kind(), Some(FailureKind::UnknownError));
    assert_eq!(error.code(), Some(418));
}

#[tokio::test]
async fn test_list_webhooks_malformed_field_types() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/webhooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "all_count": "many",
            "webhooks": []
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client
        .webhooks()
        .list_webhooks(&app_credentials(), &ListWebhooksParams::new())
        .await
        .unwrap_err();

    assert!(matches!(error, TwitcastingError::MalformedResponse { .. }));
}
