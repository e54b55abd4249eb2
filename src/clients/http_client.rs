//! HTTP client for TwitCasting API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the TwitCasting API, and the [`HttpTransport`] seam it sends
//! requests through.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::auth::{AuthHeaders, Credentials};
use crate::clients::errors::{TransportError, TwitcastingError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::TwitcastingConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A fully resolved request, ready to be put on the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute URL including the query string.
    pub url: String,
    /// Request headers as `(name, value)` pairs.
    pub headers: Vec<(String, String)>,
    /// The serialized request body, if any.
    pub body: Option<String>,
}

impl TransportRequest {
    /// Returns the first header value with the given name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// The transport that performs HTTP exchanges.
///
/// Any HTTP response, whatever its status, is a successful exchange. An
/// `Err` means no response was obtained at all.
#[async_trait]
pub trait HttpTransport: Send + Sync + fmt::Debug {
    /// Sends one request and returns the response.
    async fn send(&self, request: TransportRequest) -> Result<HttpResponse, TransportError>;
}

/// Production transport backed by `reqwest` with rustls.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a new transport with an optional request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the underlying client cannot be created
    /// (for example if TLS initialization fails).
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<HttpResponse, TransportError> {
        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse::new(code, headers, body))
    }
}

/// HTTP client for making requests to the TwitCasting API.
///
/// The client handles:
/// - URL construction from the configured base URL, path, and query
/// - Default headers including User-Agent
/// - Authorization, `Accept`, and `X-Api-Version` headers per call
///
/// Non-2xx responses are returned as-is; classifying them is the job of
/// [`crate::platform::interpret_response`]. Nothing is retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use twitcasting_api::auth::Credentials;
/// use twitcasting_api::clients::{HttpClient, HttpMethod, HttpRequest};
/// use twitcasting_api::TwitcastingConfig;
///
/// let client = HttpClient::new(&TwitcastingConfig::default())?;
/// let credentials = Credentials::bearer("access-token")?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "verify_credentials").build()?;
/// let response = client.request(request, &credentials).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    transport: Arc<dyn HttpTransport>,
    base_uri: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client using the `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport cannot be created.
    pub fn new(config: &TwitcastingConfig) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a new HTTP client that sends through the given transport.
    #[must_use]
    pub fn with_transport(config: &TwitcastingConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}TwitCasting API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);

        Self {
            transport,
            base_uri: config.base_url().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the TwitCasting API.
    ///
    /// # Errors
    ///
    /// Returns [`TwitcastingError::InvalidArgument`] if the request fails
    /// validation, or [`TwitcastingError::Transport`] if no response was
    /// obtained.
    pub async fn request(
        &self,
        request: HttpRequest,
        credentials: &Credentials,
    ) -> Result<HttpResponse, TwitcastingError> {
        request.verify()?;

        let url = format!(
            "{}/{}",
            self.base_uri,
            request.path_and_query().trim_start_matches('/')
        );

        let auth = AuthHeaders::new(credentials);
        let mut headers: Vec<(String, String)> = self
            .default_headers
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        headers.extend(
            auth.pairs()
                .iter()
                .map(|(key, value)| ((*key).to_string(), (*value).to_string())),
        );
        if request.body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            auth_mode = %credentials.mode(),
            "Sending TwitCasting API request"
        );

        let transport_request = TransportRequest {
            method: request.http_method,
            url,
            headers,
            body: request.body.as_ref().map(ToString::to_string),
        };

        let response = self.transport.send(transport_request).await.map_err(|error| {
            tracing::warn!(
                "Request to TwitCasting API at {} failed: {}",
                request.path,
                error
            );
            error
        })?;

        if let Some(remaining) = response.rate_limit_remaining() {
            tracing::debug!(remaining, "TwitCasting API rate limit");
        }

        Ok(response)
    }
}
