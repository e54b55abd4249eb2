//! HTTP response types for the TwitCasting API client.
//!
//! [`HttpResponse`] holds the status code, lowercased headers, and the raw
//! body text. The body stays unparsed here; decoding and platform error
//! detection happen in [`crate::platform::interpret_response`].

use std::collections::HashMap;

/// Header carrying the number of API calls left in the current window.
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// An HTTP response from the TwitCasting API.
///
/// # Example
///
/// ```rust
/// use twitcasting_api::clients::HttpResponse;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-ratelimit-remaining".to_string(), vec!["59".to_string()]);
///
/// let response = HttpResponse::new(200, headers, r#"{"app":{}}"#);
/// assert!(response.is_ok());
/// assert_eq!(response.rate_limit_remaining(), Some(59));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (multi-value).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response. Header names are lowercased.
    #[must_use]
    pub fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: impl Into<String>,
    ) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_lowercase(), values))
            .collect();
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-RateLimit-Remaining` value, if present and numeric.
    #[must_use]
    pub fn rate_limit_remaining(&self) -> Option<u64> {
        self.header(RATE_LIMIT_REMAINING)
            .and_then(|value| value.trim().parse().ok())
    }
}
