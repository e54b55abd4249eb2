//! Domain models for TwitCasting API data.
//!
//! All models are immutable value objects built fresh from each response or
//! webhook payload.
//!
//! # Defaulting
//!
//! Deserialization never fails because a key is absent. A missing or `null`
//! key for a plain field yields the type's zero value (`""`, `0`, `false`);
//! a missing key for an `Option` field yields `None`, never a placeholder.
//!
//! # Overview
//!
//! - [`User`]: A TwitCasting user
//! - [`App`]: The application that owns the credentials
//! - [`Movie`]: A broadcast
//! - [`WebhookSubscription`]: A `(user_id, event)` registration
//! - [`WebhookEvent`]: The events a subscription can listen for

mod movie;
mod user;
mod webhook;

pub use movie::Movie;
pub use user::{App, User};
pub use webhook::{WebhookEvent, WebhookSubscription};

pub(crate) use user::AppFields;
pub(crate) use webhook::WebhookEntry;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Deserializes `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Returns the object stored under `key`, or an empty object if the key is
/// missing or `null`.
///
/// Any other value is rejected with a description of what was found.
pub(crate) fn sub_object(parent: &Value, key: &str) -> Result<Value, String> {
    match parent.get(key) {
        None | Some(Value::Null) => Ok(Value::Object(Map::new())),
        Some(object @ Value::Object(_)) => Ok(object.clone()),
        Some(other) => Err(format!("'{key}' must be an object, got {other}")),
    }
}
