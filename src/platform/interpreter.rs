//! Response interpretation.
//!
//! Turns a raw API response into either a success value or a classified
//! failure. A response "is an error" when its decoded body has a non-null
//! `error` field, regardless of HTTP status. When the status is not 2xx and
//! the body carries no usable error object, the status code itself is
//! looked up in the error table.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::{HttpResponse, TwitcastingError};
use crate::platform::PlatformError;

/// Interprets a raw response body.
///
/// The body is decoded as JSON. If it carries a non-null `error` field the
/// error code is classified; otherwise `on_success` receives the decoded
/// value.
///
/// # Errors
///
/// - [`TwitcastingError::MalformedResponse`] if the body is not valid JSON
/// - [`TwitcastingError::Platform`] if the body reports an error
/// - Whatever `on_success` returns
///
/// # Example
///
/// ```rust
/// use twitcasting_api::platform::{interpret, FailureKind};
///
/// let id = interpret(r#"{"user": {"id": "182224938"}}"#, |v| {
///     Ok(v["user"]["id"].as_str().unwrap_or_default().to_string())
/// })
/// .unwrap();
/// assert_eq!(id, "182224938");
///
/// let error = interpret(r#"{"error": {"code": 1000}}"#, Ok).unwrap_err();
/// assert_eq!(error.platform_kind(), Some(FailureKind::InvalidToken));
/// ```
pub fn interpret<T, F>(raw_body: &str, on_success: F) -> Result<T, TwitcastingError>
where
    F: FnOnce(Value) -> Result<T, TwitcastingError>,
{
    let value: Value = serde_json::from_str(raw_body).map_err(|e| TwitcastingError::malformed(&e))?;

    if let Some(error) = platform_error(&value) {
        tracing::warn!(
            code = ?error.code,
            label = error.label,
            "TwitCasting API reported an error"
        );
        return Err(error.into());
    }

    on_success(value)
}

/// Interprets a full HTTP response, taking the status code into account.
///
/// A 2xx response is handled by [`interpret`]. For any other status, an
/// `error` object in the body wins; failing that, the status code is
/// classified (unknown statuses become
/// [`FailureKind::UnknownError`](crate::platform::FailureKind::UnknownError)).
///
/// # Errors
///
/// See [`interpret`]. A non-2xx response always yields
/// [`TwitcastingError::Platform`].
pub fn interpret_response<T, F>(response: &HttpResponse, on_success: F) -> Result<T, TwitcastingError>
where
    F: FnOnce(Value) -> Result<T, TwitcastingError>,
{
    if response.is_ok() {
        return interpret(&response.body, on_success);
    }

    let error = serde_json::from_str::<Value>(&response.body)
        .ok()
        .as_ref()
        .and_then(platform_error)
        .unwrap_or_else(|| PlatformError::from_code(i64::from(response.code)));

    tracing::warn!(
        status = response.code,
        code = ?error.code,
        label = error.label,
        "TwitCasting API request failed"
    );
    Err(error.into())
}

/// Deserializes a JSON value into `T`, reporting failures as malformed.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, TwitcastingError> {
    serde_json::from_value(value).map_err(|e| TwitcastingError::malformed(&e))
}

/// Extracts the platform error from a decoded body, if it reports one.
fn platform_error(body: &Value) -> Option<PlatformError> {
    match body.get("error") {
        None | Some(Value::Null) => None,
        Some(error) => Some(
            error_code(error).map_or_else(PlatformError::unrecognized, PlatformError::from_code),
        ),
    }
}

/// Reads `error.code` as an integer; numeric strings and whole floats
/// are accepted.
fn error_code(error: &Value) -> Option<i64> {
    match error.get("code")? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_number)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn whole_number(f: f64) -> Option<i64> {
    (f.fract() == 0.0 && f.abs() < 9.0e15).then(|| f as i64)
}
