//! Webhook subscription management.
//!
//! These calls manage the application's webhooks, so they are normally made
//! with basic (client ID and secret) credentials.

use serde::Deserialize;
use serde_json::json;

use crate::auth::Credentials;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, TwitcastingError};
use crate::models::{null_as_default, WebhookEntry, WebhookEvent, WebhookSubscription};
use crate::platform::{decode, interpret_response};

const WEBHOOKS_PATH: &str = "webhooks";

/// Default page size for [`WebhookService::list_webhooks`].
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Paging and filtering for [`WebhookService::list_webhooks`].
///
/// # Example
///
/// ```rust
/// use twitcasting_api::services::ListWebhooksParams;
///
/// let params = ListWebhooksParams::new().user_id("182224938").limit(20);
/// assert_eq!(params.offset, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListWebhooksParams {
    /// Only list webhooks for this user.
    pub user_id: Option<String>,
    /// Maximum number of entries to return.
    pub limit: u32,
    /// Number of entries to skip.
    pub offset: u32,
}

impl ListWebhooksParams {
    /// Creates parameters with the defaults (`limit` 50, `offset` 0, no filter).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by user ID.
    #[must_use]
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the page offset.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }
}

impl Default for ListWebhooksParams {
    fn default() -> Self {
        Self {
            user_id: None,
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
        }
    }
}

/// A page of webhook subscriptions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebhookList {
    /// Total number of subscriptions, across all pages.
    pub all_count: u64,
    /// The subscriptions on this page.
    pub webhooks: Vec<WebhookSubscription>,
}

/// The server-confirmed result of a register or delete call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct WebhookChange {
    /// The affected user ID.
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
    /// The events registered or removed.
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WebhookListBody {
    #[serde(default, deserialize_with = "null_as_default")]
    all_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    webhooks: Vec<WebhookEntry>,
}

/// Operations on the `/webhooks` endpoint.
///
/// # Example
///
/// ```rust,ignore
/// use twitcasting_api::auth::Credentials;
/// use twitcasting_api::services::ListWebhooksParams;
/// use twitcasting_api::WebhookEvent;
///
/// let credentials = Credentials::basic("client-id", "client-secret")?;
/// let webhooks = client.webhooks();
///
/// let change = webhooks
///     .register_webhook(&credentials, "182224938", &WebhookEvent::ALL)
///     .await?;
///
/// let page = webhooks.list_webhooks(&credentials, &ListWebhooksParams::new()).await?;
/// println!("{} subscriptions", page.all_count);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct WebhookService<'a> {
    client: &'a HttpClient,
}

impl<'a> WebhookService<'a> {
    /// Creates a service that sends through `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists webhook subscriptions.
    ///
    /// Every entry must be a valid subscription; one invalid entry fails the
    /// whole call with [`TwitcastingError::Validation`].
    ///
    /// # Errors
    ///
    /// Returns [`TwitcastingError`] if the request fails, the platform
    /// reports an error, the body is malformed, or an entry is invalid.
    pub async fn list_webhooks(
        &self,
        credentials: &Credentials,
        params: &ListWebhooksParams,
    ) -> Result<WebhookList, TwitcastingError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, WEBHOOKS_PATH)
            .query_param("limit", params.limit.to_string())
            .query_param("offset", params.offset.to_string());
        if let Some(user_id) = params.user_id.as_deref().filter(|id| !id.is_empty()) {
            builder = builder.query_param("user_id", user_id);
        }
        let response = self.client.request(builder.build()?, credentials).await?;

        interpret_response(&response, |body| {
            let page: WebhookListBody = decode(body)?;
            let webhooks = page
                .webhooks
                .into_iter()
                .map(WebhookSubscription::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(WebhookList {
                all_count: page.all_count,
                webhooks,
            })
        })
    }

    /// Subscribes to `events` for `user_id`.
    ///
    /// Returns the user ID and events as confirmed by the server.
    ///
    /// # Errors
    ///
    /// Returns [`TwitcastingError`] if the request fails, the platform
    /// reports an error, or the body is malformed.
    pub async fn register_webhook(
        &self,
        credentials: &Credentials,
        user_id: &str,
        events: &[WebhookEvent],
    ) -> Result<WebhookChange, TwitcastingError> {
        let request = HttpRequest::builder(HttpMethod::Post, WEBHOOKS_PATH)
            .body(json!({ "user_id": user_id, "events": events }))
            .build()?;
        let response = self.client.request(request, credentials).await?;

        interpret_response(&response, decode)
    }

    /// Removes every webhook subscription for `user_id`.
    ///
    /// Returns the user ID and removed events as reported by the server.
    ///
    /// # Errors
    ///
    /// Returns [`TwitcastingError`] if the request fails, the platform
    /// reports an error, or the body is malformed.
    pub async fn delete_webhook(
        &self,
        credentials: &Credentials,
        user_id: &str,
    ) -> Result<WebhookChange, TwitcastingError> {
        let request = HttpRequest::builder(HttpMethod::Delete, WEBHOOKS_PATH)
            .query_param("user_id", user_id)
            .build()?;
        let response = self.client.request(request, credentials).await?;

        interpret_response(&response, decode)
    }
}
