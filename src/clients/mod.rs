//! HTTP client types for TwitCasting API communication.
//!
//! This module provides the HTTP layer underneath the services: building
//! requests, attaching the authorization header set, and handing the
//! exchange to a pluggable transport.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpTransport`]: The transport seam (implemented by [`ReqwestTransport`])
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, DELETE)
//! - [`TwitcastingError`]: The unified error of every API operation
//!
//! # Example
//!
//! ```rust,ignore
//! use twitcasting_api::auth::Credentials;
//! use twitcasting_api::clients::{HttpClient, HttpMethod, HttpRequest};
//! use twitcasting_api::TwitcastingConfig;
//!
//! let client = HttpClient::new(&TwitcastingConfig::default())?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "webhooks")
//!     .query_param("limit", "50")
//!     .build()?;
//!
//! let response = client.request(request, &Credentials::basic("id", "secret")?).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{TransportError, TwitcastingError};
pub use http_client::{HttpClient, HttpTransport, ReqwestTransport, TransportRequest, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
