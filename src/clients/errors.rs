//! Error types for TwitCasting API calls.
//!
//! Every service operation returns [`TwitcastingError`], which classifies a
//! failure into exactly one kind:
//!
//! - [`TwitcastingError::InvalidArgument`]: Bad auth-mode selection or missing credential
//! - [`TwitcastingError::Validation`]: A domain object could not be built from the response
//! - [`TwitcastingError::MalformedResponse`]: The response body was not the expected JSON
//! - [`TwitcastingError::Transport`]: No response was obtained at all
//! - [`TwitcastingError::Platform`]: The platform reported an error code (or error status)
//!
//! Nothing is retried; each failure surfaces to the caller once.
//!
//! # Example
//!
//! ```rust,ignore
//! use twitcasting_api::{FailureKind, TwitcastingError};
//!
//! match client.users().get_user_info("twitcasting_jp", &credentials).await {
//!     Ok(info) => println!("{}", info.user),
//!     Err(TwitcastingError::Platform(e)) if e.kind == FailureKind::NotFound => {
//!         println!("No such user");
//!     }
//!     Err(e) => println!("Failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::error::{InvalidArgumentError, ValidationError};
use crate::platform::{FailureKind, PlatformError};

/// Error returned when the transport produced no response at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct TransportError {
    /// The underlying reason, e.g. a connection or TLS failure.
    pub reason: String,
}

impl TransportError {
    /// Creates a transport error from any displayable reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        Self::new(error.to_string())
    }
}

/// Unified error type for TwitCasting API operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TwitcastingError {
    /// The caller supplied an invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgumentError),

    /// A domain object failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The response body could not be decoded.
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// The decode error text.
        message: String,
    },

    /// No response was obtained.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The platform reported an error.
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

impl TwitcastingError {
    /// Creates a malformed-response error from a decode error.
    #[must_use]
    pub fn malformed(error: &serde_json::Error) -> Self {
        Self::MalformedResponse {
            message: error.to_string(),
        }
    }

    /// Returns the platform failure kind, if this is a platform error.
    #[must_use]
    pub const fn platform_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Platform(e) => Some(e.kind),
            _ => None,
        }
    }

    /// Returns the platform error code, if one was reported.
    #[must_use]
    pub const fn code(&self) -> Option<i64> {
        match self {
            Self::Platform(e) => e.code,
            _ => None,
        }
    }
}
