//! TwitCasting API services.
//!
//! Each service borrows an [`HttpClient`](crate::clients::HttpClient) and
//! exposes the operations of one API area. Every operation takes the
//! [`Credentials`](crate::auth::Credentials) to authorize with, so one client
//! can serve both app-level (basic) and user-level (bearer) calls.
//!
//! - [`UserService`]: `GET /users/{id}`, `GET /verify_credentials`
//! - [`WebhookService`]: `GET`/`POST`/`DELETE /webhooks`

mod user;
mod webhook;

pub use user::{CredentialInfo, UserInfo, UserService};
pub use webhook::{
    ListWebhooksParams, WebhookChange, WebhookList, WebhookService, DEFAULT_LIST_LIMIT,
};
