//! Authentication types for the TwitCasting API client.
//!
//! This module turns caller credentials into the header set every API call
//! carries.
//!
//! # Overview
//!
//! - [`AuthMode`]: The closed set of authorization schemes (`basic`, `bearer`)
//! - [`CredentialSet`]: Raw, possibly incomplete credential inputs
//! - [`Credentials`]: Validated credentials for exactly one mode
//! - [`AuthHeaders`]: The `Authorization`, `Accept`, and `X-Api-Version` headers
//!
//! # Example
//!
//! ```rust
//! use twitcasting_api::auth::{AuthHeaders, CredentialSet};
//!
//! let set = CredentialSet::new().client_credentials("client-id", "client-secret");
//! let headers = AuthHeaders::resolve("basic", &set).unwrap();
//! assert!(headers.authorization().starts_with("Basic "));
//!
//! // Unknown modes are rejected
//! assert!(AuthHeaders::resolve("digest", &set).is_err());
//! ```

mod credentials;
mod headers;

pub use credentials::{AuthMode, CredentialSet, Credentials};
pub use headers::{
    AuthHeaders, ACCEPT_JSON, API_VERSION, HEADER_ACCEPT, HEADER_API_VERSION, HEADER_AUTHORIZATION,
};
