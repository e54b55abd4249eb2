//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around credential strings and the
//! API base URL. Invalid values are rejected with clear error messages, and
//! secrets are masked in `Debug` output.

use crate::error::ConfigError;
use std::fmt;

/// A validated TwitCasting application client ID.
///
/// # Example
///
/// ```rust
/// use twitcasting_api::ClientId;
///
/// let id = ClientId::new("my-client-id").unwrap();
/// assert_eq!(id.as_ref(), "my-client-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Declares a non-empty secret newtype whose `Debug` output is masked.
macro_rules! secret_newtype {
    ($(#[$meta:meta])* $name:ident, $empty:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Creates a new validated `", stringify!($name), "`.")]
            ///
            /// # Errors
            ///
            #[doc = concat!("Returns [`ConfigError::", stringify!($empty), "`] if the value is empty.")]
            pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
                let value = value.into();
                if value.is_empty() {
                    return Err(ConfigError::$empty);
                }
                Ok(Self(value))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($name), "(*****)"))
            }
        }
    };
}

secret_newtype!(
    /// A validated TwitCasting application client secret.
    ///
    /// ```rust
    /// use twitcasting_api::ClientSecret;
    ///
    /// let secret = ClientSecret::new("my-secret").unwrap();
    /// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
    /// ```
    ClientSecret,
    EmptyClientSecret
);

secret_newtype!(
    /// A validated OAuth access token used for bearer authorization.
    AccessToken,
    EmptyAccessToken
);

secret_newtype!(
    /// The signature TwitCasting embeds in webhook notifications for this app.
    WebhookSignature,
    EmptyWebhookSignature
);

/// A validated API base URL.
///
/// Accepts `http` and `https` URLs with a non-empty host. Trailing slashes
/// are trimmed so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use twitcasting_api::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:8080/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8080");
/// assert_eq!(url.host_name(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// The production TwitCasting API v2 endpoint.
    pub const DEFAULT: &'static str = "https://apiv2.twitcasting.tv";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is not `http(s)`
    /// or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let host_start = if url.starts_with("https://") {
            "https://".len()
        } else if url.starts_with("http://") {
            "http://".len()
        } else {
            return Err(ConfigError::InvalidBaseUrl { url });
        };

        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            host_start: "https://".len(),
            host_end: Self::DEFAULT.len(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
