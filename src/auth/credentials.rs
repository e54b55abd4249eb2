//! Authorization modes and credentials for the TwitCasting API.
//!
//! TwitCasting accepts two mutually exclusive schemes:
//!
//! - **Basic**: the application's client ID and client secret, used for
//!   app-level calls such as webhook management.
//! - **Bearer**: a user access token obtained through OAuth.
//!
//! [`Credentials`] is the resolved, validated form. [`CredentialSet`] holds
//! raw, possibly incomplete inputs (for example loaded from the environment)
//! and is turned into [`Credentials`] by selecting an [`AuthMode`].

use std::fmt;
use std::str::FromStr;

use crate::config::{AccessToken, ClientId, ClientSecret};
use crate::error::InvalidArgumentError;

/// The authorization scheme used for a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthMode {
    /// HTTP Basic authorization with client ID and client secret.
    Basic,
    /// Bearer authorization with an access token.
    Bearer,
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str("basic"),
            Self::Bearer => f.write_str("bearer"),
        }
    }
}

impl FromStr for AuthMode {
    type Err = InvalidArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "bearer" => Ok(Self::Bearer),
            other => Err(InvalidArgumentError::UnknownAuthMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// Raw credential inputs, any of which may be absent.
///
/// # Example
///
/// ```rust
/// use twitcasting_api::auth::{AuthMode, CredentialSet, Credentials};
///
/// let set = CredentialSet::new().client_credentials("id", "secret");
/// let credentials = Credentials::resolve(AuthMode::Basic, &set).unwrap();
/// assert_eq!(credentials.mode(), AuthMode::Basic);
///
/// // No access token was supplied
/// assert!(Credentials::resolve(AuthMode::Bearer, &set).is_err());
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialSet {
    /// Application client ID (basic mode).
    pub client_id: Option<String>,
    /// Application client secret (basic mode).
    pub client_secret: Option<String>,
    /// User access token (bearer mode).
    pub access_token: Option<String>,
}

impl CredentialSet {
    /// Creates an empty credential set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client ID and client secret.
    #[must_use]
    pub fn client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Sets the access token.
    #[must_use]
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }
}

impl fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |value: &Option<String>| value.as_ref().map(|_| "*****");
        f.debug_struct("CredentialSet")
            .field("client_id", &self.client_id)
            .field("client_secret", &mask(&self.client_secret))
            .field("access_token", &mask(&self.access_token))
            .finish()
    }
}

/// Validated credentials for exactly one authorization mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// Client ID and secret for basic authorization.
    Basic {
        /// Application client ID.
        client_id: ClientId,
        /// Application client secret.
        client_secret: ClientSecret,
    },
    /// Access token for bearer authorization.
    Bearer {
        /// User access token.
        access_token: AccessToken,
    },
}

impl Credentials {
    /// Creates basic credentials.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::MissingCredential`] if either value is empty.
    pub fn basic(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, InvalidArgumentError> {
        let client_id = ClientId::new(client_id).map_err(|_| missing(AuthMode::Basic, "client_id"))?;
        let client_secret =
            ClientSecret::new(client_secret).map_err(|_| missing(AuthMode::Basic, "client_secret"))?;
        Ok(Self::Basic {
            client_id,
            client_secret,
        })
    }

    /// Creates bearer credentials.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::MissingCredential`] if the token is empty.
    pub fn bearer(access_token: impl Into<String>) -> Result<Self, InvalidArgumentError> {
        let access_token =
            AccessToken::new(access_token).map_err(|_| missing(AuthMode::Bearer, "access_token"))?;
        Ok(Self::Bearer { access_token })
    }

    /// Selects the credentials required by `mode` from a raw credential set.
    ///
    /// Absent and empty values are both treated as missing.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::MissingCredential`] naming the first
    /// missing value.
    pub fn resolve(mode: AuthMode, set: &CredentialSet) -> Result<Self, InvalidArgumentError> {
        match mode {
            AuthMode::Basic => {
                let client_id = set
                    .client_id
                    .as_deref()
                    .ok_or_else(|| missing(mode, "client_id"))?;
                let client_secret = set
                    .client_secret
                    .as_deref()
                    .ok_or_else(|| missing(mode, "client_secret"))?;
                Self::basic(client_id, client_secret)
            }
            AuthMode::Bearer => {
                let access_token = set
                    .access_token
                    .as_deref()
                    .ok_or_else(|| missing(mode, "access_token"))?;
                Self::bearer(access_token)
            }
        }
    }

    /// Parses `mode` and selects the matching credentials from `set`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::UnknownAuthMode`] for anything other
    /// than `"basic"` or `"bearer"`, or a missing-credential error.
    pub fn from_mode_str(mode: &str, set: &CredentialSet) -> Result<Self, InvalidArgumentError> {
        Self::resolve(mode.parse()?, set)
    }

    /// Returns the authorization mode of these credentials.
    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        match self {
            Self::Basic { .. } => AuthMode::Basic,
            Self::Bearer { .. } => AuthMode::Bearer,
        }
    }
}

const fn missing(mode: AuthMode, field: &'static str) -> InvalidArgumentError {
    InvalidArgumentError::MissingCredential { mode, field }
}
