//! Error types for the TwitCasting API client.
//!
//! This module contains the error types raised before any request reaches
//! the network: configuration errors, domain-model validation errors, and
//! invalid caller arguments.
//!
//! # Error Handling
//!
//! All constructors return `Result<T, E>` to enable fail-fast validation.
//! Errors that surface from an API call are unified in
//! [`TwitcastingError`](crate::clients::TwitcastingError).
//!
//! # Example
//!
//! ```rust
//! use twitcasting_api::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

use crate::auth::AuthMode;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide a valid TwitCasting client ID.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide a valid TwitCasting client secret.")]
    EmptyClientSecret,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid TwitCasting access token.")]
    EmptyAccessToken,

    /// Webhook signature cannot be empty.
    #[error("Webhook signature cannot be empty.")]
    EmptyWebhookSignature,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme (e.g., 'https://apiv2.twitcasting.tv').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required environment variable is not set.
    #[error("Missing required environment variable: '{name}'.")]
    MissingEnvVar {
        /// The name of the environment variable.
        name: &'static str,
    },
}

/// Errors raised when a domain object is constructed from invalid data.
///
/// Construction of [`App`](crate::App) and
/// [`WebhookSubscription`](crate::WebhookSubscription) never yields a
/// partially-valid value; it returns one of these instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty.
    #[error("{entity}: '{field}' cannot be empty")]
    EmptyField {
        /// The kind of object being constructed.
        entity: &'static str,
        /// The name of the empty field.
        field: &'static str,
    },

    /// A webhook event is outside the supported set.
    #[error("event must be either 'livestart' or 'liveend', got '{event}'")]
    InvalidEvent {
        /// The rejected event value.
        event: String,
    },
}

/// Errors caused by invalid arguments passed to an operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidArgumentError {
    /// The authorization mode string is not recognized.
    #[error("Invalid authorization mode '{mode}'. Use 'basic' or 'bearer'.")]
    UnknownAuthMode {
        /// The mode that was provided.
        mode: String,
    },

    /// A credential required by the selected mode is missing.
    #[error("{field} must be provided for {mode} authorization.")]
    MissingCredential {
        /// The selected authorization mode.
        mode: AuthMode,
        /// The name of the missing credential.
        field: &'static str,
    },

    /// A request that requires a body was built without one.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}
