//! Configuration types for the TwitCasting API client.
//!
//! This module provides the configuration used to initialize the client
//! and the validated newtypes it is built from.
//!
//! # Overview
//!
//! - [`TwitcastingConfig`]: The main configuration struct
//! - [`TwitcastingConfigBuilder`]: A builder for constructing [`TwitcastingConfig`] instances
//! - [`ClientId`]: A validated client ID newtype
//! - [`ClientSecret`], [`AccessToken`], [`WebhookSignature`]: Validated secrets with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use twitcasting_api::{BaseUrl, TwitcastingConfig};
//! use twitcasting_api::auth::CredentialSet;
//!
//! let config = TwitcastingConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8080").unwrap())
//!     .credentials(CredentialSet::new().client_credentials("id", "secret"))
//!     .user_agent_prefix("MyApp/1.0")
//!     .build();
//!
//! assert_eq!(config.base_url().as_ref(), "http://localhost:8080");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl, ClientId, ClientSecret, WebhookSignature};

use std::time::Duration;

use crate::auth::CredentialSet;
use crate::error::ConfigError;

/// Environment variable holding the application client ID.
pub const ENV_CLIENT_ID: &str = "CLIENT_ID";
/// Environment variable holding the application client secret.
pub const ENV_CLIENT_SECRET: &str = "CLIENT_SECRET";
/// Environment variable holding a user access token.
pub const ENV_ACCESS_TOKEN: &str = "ACCESS_TOKEN";
/// Environment variable holding the expected webhook signature.
pub const ENV_WEBHOOK_SIGNATURE: &str = "WEBHOOK_SIGNATURE";
/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "TWITCASTING_API_BASE_URL";

/// Configuration for the TwitCasting API client.
///
/// # Thread Safety
///
/// `TwitcastingConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use twitcasting_api::{TwitcastingConfig, WebhookSignature};
///
/// let config = TwitcastingConfig::builder()
///     .webhook_signature(WebhookSignature::new("sig").unwrap())
///     .build();
///
/// assert_eq!(config.base_url().as_ref(), "https://apiv2.twitcasting.tv");
/// assert!(config.webhook_signature().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct TwitcastingConfig {
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    credentials: CredentialSet,
    webhook_signature: Option<WebhookSignature>,
}

impl TwitcastingConfig {
    /// Creates a new builder for constructing a `TwitcastingConfig`.
    #[must_use]
    pub fn builder() -> TwitcastingConfigBuilder {
        TwitcastingConfigBuilder::new()
    }

    /// Loads configuration from the process environment.
    ///
    /// `CLIENT_ID` and `CLIENT_SECRET` are required. `ACCESS_TOKEN`,
    /// `WEBHOOK_SIGNATURE`, and `TWITCASTING_API_BASE_URL` are optional.
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if a required variable is
    /// missing, or [`ConfigError::InvalidBaseUrl`] if the base URL override
    /// is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through a variable lookup function.
    ///
    /// This is [`TwitcastingConfig::from_env`] with the environment access
    /// abstracted away.
    ///
    /// # Errors
    ///
    /// Same as [`TwitcastingConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let require = |name: &'static str| read(name).ok_or(ConfigError::MissingEnvVar { name });

        let mut credentials =
            CredentialSet::new().client_credentials(require(ENV_CLIENT_ID)?, require(ENV_CLIENT_SECRET)?);
        credentials.access_token = read(ENV_ACCESS_TOKEN);

        let mut builder = Self::builder().credentials(credentials);
        if let Some(url) = read(ENV_BASE_URL) {
            builder = builder.base_url(BaseUrl::new(url)?);
        }
        if let Some(signature) = read(ENV_WEBHOOK_SIGNATURE) {
            builder = builder.webhook_signature(WebhookSignature::new(signature)?);
        }
        Ok(builder.build())
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the default credential set.
    #[must_use]
    pub const fn credentials(&self) -> &CredentialSet {
        &self.credentials
    }

    /// Returns the expected webhook signature, if configured.
    #[must_use]
    pub const fn webhook_signature(&self) -> Option<&WebhookSignature> {
        self.webhook_signature.as_ref()
    }
}

impl Default for TwitcastingConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

// Verify TwitcastingConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TwitcastingConfig>();
};

/// Builder for constructing [`TwitcastingConfig`] instances.
///
/// Every field is optional; values are validated by their newtypes before
/// they reach the builder, so [`build`](Self::build) cannot fail.
///
/// # Defaults
///
/// - `base_url`: `https://apiv2.twitcasting.tv`
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no client-side timeout)
/// - `credentials`: Empty
/// - `webhook_signature`: `None`
#[derive(Debug, Default)]
pub struct TwitcastingConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    credentials: Option<CredentialSet>,
    webhook_signature: Option<WebhookSignature>,
}

impl TwitcastingConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the transport timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the default credential set.
    #[must_use]
    pub fn credentials(mut self, credentials: CredentialSet) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the signature expected on incoming webhook notifications.
    #[must_use]
    pub fn webhook_signature(mut self, signature: WebhookSignature) -> Self {
        self.webhook_signature = Some(signature);
        self
    }

    /// Builds the [`TwitcastingConfig`].
    #[must_use]
    pub fn build(self) -> TwitcastingConfig {
        TwitcastingConfig {
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
            credentials: self.credentials.unwrap_or_default(),
            webhook_signature: self.webhook_signature,
        }
    }
}
