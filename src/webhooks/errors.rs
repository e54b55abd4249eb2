//! Webhook-specific error types for the TwitCasting API client.
//!
//! These errors only arise when parsing inbound webhook notifications:
//!
//! - [`WebhookError::InvalidPayload`]: The body is not a usable JSON object
//! - [`WebhookError::SignatureMismatch`]: The embedded signature differs from the expected one

use thiserror::Error;

/// Error type for inbound webhook parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WebhookError {
    /// The payload could not be decoded, was empty, or has a malformed
    /// `movie`/`user` section.
    #[error("Invalid webhook payload: {reason}")]
    InvalidPayload {
        /// What was wrong with the payload.
        reason: String,
    },

    /// The payload's `signature` does not equal the expected signature.
    #[error("Webhook signature does not match the expected signature")]
    SignatureMismatch,
}

impl WebhookError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidPayload {
            reason: reason.into(),
        }
    }
}
