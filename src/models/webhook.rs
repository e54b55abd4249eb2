//! Webhook subscription model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::error::ValidationError;

/// An event a webhook subscription can listen for.
///
/// # Example
///
/// ```rust
/// use twitcasting_api::WebhookEvent;
///
/// let event: WebhookEvent = "livestart".parse().unwrap();
/// assert_eq!(event, WebhookEvent::LiveStart);
/// assert_eq!(WebhookEvent::LiveEnd.to_string(), "liveend");
/// assert!("livepause".parse::<WebhookEvent>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebhookEvent {
    /// A broadcast started.
    #[serde(rename = "livestart")]
    LiveStart,
    /// A broadcast ended.
    #[serde(rename = "liveend")]
    LiveEnd,
}

impl WebhookEvent {
    /// Both events.
    pub const ALL: [Self; 2] = [Self::LiveStart, Self::LiveEnd];

    /// Returns the wire name of the event.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LiveStart => "livestart",
            Self::LiveEnd => "liveend",
        }
    }
}

impl fmt::Display for WebhookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WebhookEvent {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "livestart" => Ok(Self::LiveStart),
            "liveend" => Ok(Self::LiveEnd),
            other => Err(ValidationError::InvalidEvent {
                event: other.to_string(),
            }),
        }
    }
}

/// A registration that makes the platform notify on a user's broadcasts.
///
/// # Example
///
/// ```rust
/// use twitcasting_api::{WebhookEvent, WebhookSubscription};
///
/// let subscription = WebhookSubscription::new("u1", "liveend").unwrap();
/// assert_eq!(subscription.event(), WebhookEvent::LiveEnd);
///
/// assert!(WebhookSubscription::new("", "livestart").is_err());
/// assert!(WebhookSubscription::new("u1", "foo").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WebhookSubscription {
    user_id: String,
    event: WebhookEvent,
}

impl WebhookSubscription {
    /// Creates a validated subscription.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] if `user_id` or `event` is
    /// empty, or [`ValidationError::InvalidEvent`] if `event` is not
    /// `livestart` or `liveend`.
    pub fn new(user_id: impl Into<String>, event: &str) -> Result<Self, ValidationError> {
        let user_id = user_id.into();
        if user_id.is_empty() {
            return Err(empty("user_id"));
        }
        if event.is_empty() {
            return Err(empty("event"));
        }
        Ok(Self {
            user_id,
            event: event.parse()?,
        })
    }

    /// Returns the subscribed user ID.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the subscribed event.
    #[must_use]
    pub const fn event(&self) -> WebhookEvent {
        self.event
    }
}

impl fmt::Display for WebhookSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Webhook(user_id={}, event={})", self.user_id, self.event)
    }
}

const fn empty(field: &'static str) -> ValidationError {
    ValidationError::EmptyField {
        entity: "WebhookSubscription",
        field,
    }
}

/// A webhook entry as listed by the API, before validation.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct WebhookEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    event: String,
}

impl TryFrom<WebhookEntry> for WebhookSubscription {
    type Error = ValidationError;

    fn try_from(entry: WebhookEntry) -> Result<Self, Self::Error> {
        Self::new(entry.user_id, &entry.event)
    }
}
