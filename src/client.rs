//! The top-level TwitCasting API client.

use std::sync::Arc;

use crate::auth::{AuthMode, Credentials};
use crate::clients::{HttpClient, HttpTransport, TransportError};
use crate::config::TwitcastingConfig;
use crate::error::InvalidArgumentError;
use crate::models::{Movie, User};
use crate::services::{UserService, WebhookService};
use crate::webhooks::{parse_webhook_payload, WebhookError};

/// Entry point to the TwitCasting API.
///
/// Owns the configuration and HTTP client and hands out the services.
/// Cloning is cheap; clones share the underlying transport.
///
/// # Example
///
/// ```rust,ignore
/// use twitcasting_api::{AuthMode, TwitcastingClient, TwitcastingConfig};
///
/// let client = TwitcastingClient::new(TwitcastingConfig::from_env()?)?;
/// let credentials = client.credentials(AuthMode::Basic)?;
///
/// let info = client.users().verify_credentials(&credentials).await?;
/// println!("{} / {}", info.app, info.user);
/// ```
#[derive(Clone, Debug)]
pub struct TwitcastingClient {
    config: TwitcastingConfig,
    http: HttpClient,
}

// Verify TwitcastingClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TwitcastingClient>();
};

impl TwitcastingClient {
    /// Creates a client backed by the `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport cannot be created.
    pub fn new(config: TwitcastingConfig) -> Result<Self, TransportError> {
        let http = HttpClient::new(&config)?;
        Ok(Self { config, http })
    }

    /// Creates a client that sends through the given transport.
    #[must_use]
    pub fn with_transport(config: TwitcastingConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let http = HttpClient::with_transport(&config, transport);
        Self { config, http }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &TwitcastingConfig {
        &self.config
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http
    }

    /// Returns the user service.
    #[must_use]
    pub const fn users(&self) -> UserService<'_> {
        UserService::new(&self.http)
    }

    /// Returns the webhook service.
    #[must_use]
    pub const fn webhooks(&self) -> WebhookService<'_> {
        WebhookService::new(&self.http)
    }

    /// Resolves the configured default credentials for `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::MissingCredential`] if the
    /// configuration lacks a value `mode` requires.
    pub fn credentials(&self, mode: AuthMode) -> Result<Credentials, InvalidArgumentError> {
        Credentials::resolve(mode, self.config.credentials())
    }

    /// Parses a webhook notification, checking it against the configured
    /// webhook signature (if any).
    ///
    /// # Errors
    ///
    /// See [`parse_webhook_payload`].
    pub fn parse_webhook_payload(&self, raw_body: &str) -> Result<(Movie, User), WebhookError> {
        let expected: Option<&str> = self.config.webhook_signature().map(AsRef::as_ref);
        parse_webhook_payload(raw_body, expected)
    }
}
