//! Request header resolution for authenticated API calls.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::auth::{CredentialSet, Credentials};
use crate::error::InvalidArgumentError;

/// HTTP header name for the credentials.
pub const HEADER_AUTHORIZATION: &str = "Authorization";

/// HTTP header name for the accepted response type.
pub const HEADER_ACCEPT: &str = "Accept";

/// HTTP header name selecting the TwitCasting API version.
pub const HEADER_API_VERSION: &str = "X-Api-Version";

/// Response content type requested on every call.
pub const ACCEPT_JSON: &str = "application/json";

/// TwitCasting API version sent on every call.
pub const API_VERSION: &str = "2.0";

/// The fixed header set attached to every API request.
///
/// Only the `Authorization` value varies; `Accept` and `X-Api-Version`
/// are constants.
///
/// # Example
///
/// ```rust
/// use twitcasting_api::auth::{AuthHeaders, Credentials};
///
/// let headers = AuthHeaders::new(&Credentials::bearer("token").unwrap());
/// assert_eq!(headers.authorization(), "Bearer token");
/// assert!(headers.pairs().contains(&("X-Api-Version", "2.0")));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    authorization: String,
}

impl AuthHeaders {
    /// Builds the header set for validated credentials.
    #[must_use]
    pub fn new(credentials: &Credentials) -> Self {
        let authorization = match credentials {
            Credentials::Basic {
                client_id,
                client_secret,
            } => {
                let pair = format!("{}:{}", client_id.as_ref(), client_secret.as_ref());
                format!("Basic {}", STANDARD.encode(pair))
            }
            Credentials::Bearer { access_token } => format!("Bearer {}", access_token.as_ref()),
        };
        Self { authorization }
    }

    /// Resolves headers from a mode string and raw credentials.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if the mode is unknown or a
    /// credential it requires is missing.
    pub fn resolve(mode: &str, credentials: &CredentialSet) -> Result<Self, InvalidArgumentError> {
        Ok(Self::new(&Credentials::from_mode_str(mode, credentials)?))
    }

    /// Returns the `Authorization` header value.
    #[must_use]
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    /// Returns every header as `(name, value)` pairs.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            (HEADER_AUTHORIZATION, self.authorization.as_str()),
            (HEADER_ACCEPT, ACCEPT_JSON),
            (HEADER_API_VERSION, API_VERSION),
        ]
    }
}

impl fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = self.authorization.split(' ').next().unwrap_or_default();
        f.debug_struct("AuthHeaders")
            .field("authorization", &format_args!("{scheme} *****"))
            .field("accept", &ACCEPT_JSON)
            .field("api_version", &API_VERSION)
            .finish()
    }
}
