//! # TwitCasting API Rust Client
//!
//! A Rust client for the TwitCasting API v2, providing type-safe
//! configuration, authorization header handling, platform error
//! classification, and parsing of inbound webhook notifications.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`TwitcastingConfig`] and [`TwitcastingConfigBuilder`]
//! - Validated newtypes for credentials and the API base URL
//! - Basic (client ID/secret) and bearer (access token) authorization via [`auth`]
//! - User lookups and credential verification via [`services::UserService`]
//! - Webhook subscription management via [`services::WebhookService`]
//! - Webhook notification parsing via [`webhooks`]
//! - Classification of every documented platform error code via [`platform`]
//!
//! ## Quick Start
//!
//! ```rust
//! use twitcasting_api::{TwitcastingConfig, WebhookSignature};
//! use twitcasting_api::auth::CredentialSet;
//!
//! let config = TwitcastingConfig::builder()
//!     .credentials(CredentialSet::new().client_credentials("client-id", "client-secret"))
//!     .webhook_signature(WebhookSignature::new("issued-signature").unwrap())
//!     .build();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use twitcasting_api::{AuthMode, TwitcastingClient, TwitcastingConfig, WebhookEvent};
//! use twitcasting_api::services::ListWebhooksParams;
//!
//! let client = TwitcastingClient::new(TwitcastingConfig::from_env()?)?;
//! let app = client.credentials(AuthMode::Basic)?;
//!
//! let info = client.users().get_user_info("twitcasting_jp", &app).await?;
//! println!("{} ({} supporters)", info.user, info.supporter_count);
//!
//! client
//!     .webhooks()
//!     .register_webhook(&app, &info.user.id, &[WebhookEvent::LiveStart])
//!     .await?;
//!
//! let page = client.webhooks().list_webhooks(&app, &ListWebhooksParams::new()).await?;
//! ```
//!
//! ## Error Handling
//!
//! Every API operation returns [`TwitcastingError`]. Platform-reported
//! failures carry both the numeric code and a [`FailureKind`]:
//!
//! ```rust,ignore
//! use twitcasting_api::{FailureKind, TwitcastingError};
//!
//! match client.users().get_user_info("someone", &app).await {
//!     Err(TwitcastingError::Platform(e)) if e.kind == FailureKind::NotFound => {}
//!     Err(e) => eprintln!("{e}"),
//!     Ok(info) => println!("{}", info.user),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and models validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No retries**: Every failure surfaces to the caller once

pub mod auth;
mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod platform;
pub mod services;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use auth::{AuthMode, Credentials};
pub use client::TwitcastingClient;
pub use config::{
    AccessToken, BaseUrl, ClientId, ClientSecret, TwitcastingConfig, TwitcastingConfigBuilder,
    WebhookSignature,
};
pub use error::{ConfigError, InvalidArgumentError, ValidationError};

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
    TransportError, TwitcastingError,
};

// Re-export domain and platform types
pub use models::{App, Movie, User, WebhookEvent, WebhookSubscription};
pub use platform::{FailureKind, PlatformError};
pub use webhooks::WebhookError;
