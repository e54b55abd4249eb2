//! Inbound webhook handling for the TwitCasting API client.
//!
//! TwitCasting notifies a registered URL when a subscribed user starts or
//! ends a broadcast. Subscriptions are managed through
//! [`WebhookService`](crate::services::WebhookService); this module parses
//! the notifications themselves.
//!
//! # Overview
//!
//! - [`parse_webhook_payload`]: Decode a notification and check its signature
//! - [`WebhookPayload`]: The decoded notification
//! - [`WebhookError`]: Error types for payload parsing
//!
//! # Example
//!
//! ```rust
//! use twitcasting_api::webhooks::parse_webhook_payload;
//!
//! let body = r#"{
//!     "signature": "issued-signature",
//!     "movie": {"id": "189037369", "is_live": true},
//!     "user": {"id": "182224938", "screen_id": "twitcasting_jp"}
//! }"#;
//!
//! let (movie, user) = parse_webhook_payload(body, Some("issued-signature")).unwrap();
//! assert!(movie.is_live);
//! assert_eq!(user.screen_id, "twitcasting_jp");
//! ```

mod errors;
mod payload;

pub use errors::WebhookError;
pub use payload::{parse_webhook_payload, WebhookPayload};
