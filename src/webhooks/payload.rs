//! Parsing of inbound webhook notifications.
//!
//! TwitCasting delivers `livestart`/`liveend` notifications as a JSON object
//! with a `signature` and the `movie` and `user` involved:
//!
//! ```json
//! {"signature": "...", "movie": {"id": "189037369", ...}, "user": {"id": "182224938", ...}}
//! ```
//!
//! The signature check compares the payload's own `signature` field with the
//! value the application was issued. It is a plain equality check, not a MAC
//! over the body.

use serde_json::Value;
use subtle::ConstantTimeEq;

use crate::models::{sub_object, Movie, User};
use crate::webhooks::WebhookError;

/// A decoded webhook notification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WebhookPayload {
    /// The signature embedded in the payload, if it is a string.
    pub signature: Option<String>,
    /// The broadcast the notification is about.
    pub movie: Movie,
    /// The broadcaster.
    pub user: User,
}

impl WebhookPayload {
    /// Decodes a webhook body without checking the signature.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::InvalidPayload`] if the body is not JSON, is
    /// falsy (`{}`, `[]`, `null`, `""`, `0`, `false`), is not an object, or
    /// has a `movie`/`user` entry that is not an object of the expected shape.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twitcasting_api::webhooks::WebhookPayload;
    ///
    /// let payload = WebhookPayload::parse(r#"{"signature": "abc", "user": {"id": "1"}}"#).unwrap();
    /// assert_eq!(payload.signature.as_deref(), Some("abc"));
    /// assert_eq!(payload.user.id, "1");
    /// assert_eq!(payload.movie.id, "");
    ///
    /// assert!(WebhookPayload::parse("{}").is_err());
    /// ```
    pub fn parse(raw_body: &str) -> Result<Self, WebhookError> {
        let data: Value = serde_json::from_str(raw_body).map_err(|e| WebhookError::invalid(e.to_string()))?;

        if is_falsy(&data) {
            return Err(WebhookError::invalid("payload is empty"));
        }
        if !data.is_object() {
            return Err(WebhookError::invalid("payload must be a JSON object"));
        }

        let signature = data
            .get("signature")
            .and_then(Value::as_str)
            .map(str::to_string);
        let movie = Movie::from_value(sub_object(&data, "movie").map_err(WebhookError::invalid)?)
            .map_err(|e| WebhookError::invalid(format!("movie: {e}")))?;
        let user = User::from_value(sub_object(&data, "user").map_err(WebhookError::invalid)?)
            .map_err(|e| WebhookError::invalid(format!("user: {e}")))?;

        Ok(Self {
            signature,
            movie,
            user,
        })
    }

    /// Returns `true` if the embedded signature equals `expected`.
    ///
    /// A missing or non-string signature only matches an empty `expected`.
    #[must_use]
    pub fn signature_matches(&self, expected: &str) -> bool {
        match &self.signature {
            Some(signature) => signature.as_bytes().ct_eq(expected.as_bytes()).into(),
            None => expected.is_empty(),
        }
    }
}

/// Parses a webhook body and checks its signature.
///
/// The signature check is skipped when `expected_signature` is `None` or
/// empty. A payload whose `signature` is missing or not a string never
/// matches a non-empty expected signature.
///
/// # Errors
///
/// Returns [`WebhookError::InvalidPayload`] as for [`WebhookPayload::parse`],
/// or [`WebhookError::SignatureMismatch`] if the signatures differ.
///
/// # Example
///
/// ```rust
/// use twitcasting_api::webhooks::{parse_webhook_payload, WebhookError};
///
/// let body = r#"{"movie": {}, "user": {}, "signature": "abc"}"#;
///
/// let (movie, user) = parse_webhook_payload(body, Some("abc")).unwrap();
/// assert_eq!(movie.id, "");
/// assert_eq!(user.id, "");
///
/// assert_eq!(
///     parse_webhook_payload(body, Some("xyz")).unwrap_err(),
///     WebhookError::SignatureMismatch
/// );
/// ```
pub fn parse_webhook_payload(
    raw_body: &str,
    expected_signature: Option<&str>,
) -> Result<(Movie, User), WebhookError> {
    let payload = WebhookPayload::parse(raw_body)?;

    if let Some(expected) = expected_signature.filter(|s| !s.is_empty()) {
        if !payload.signature_matches(expected) {
            tracing::debug!(
                movie_id = %payload.movie.id,
                "Webhook payload signature mismatch"
            );
            return Err(WebhookError::SignatureMismatch);
        }
    }

    Ok((payload.movie, payload.user))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
