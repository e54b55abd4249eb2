//! User and credential lookups.

use serde_json::Value;

use crate::auth::Credentials;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, TwitcastingError};
use crate::models::{sub_object, App, AppFields, User};
use crate::platform::{decode, interpret_response};

/// A user and their supporter counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserInfo {
    /// The user.
    pub user: User,
    /// Number of users supporting this user.
    pub supporter_count: u64,
    /// Number of users this user supports.
    pub supporting_count: u64,
}

/// The application and user the credentials resolve to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CredentialInfo {
    /// The application the credentials belong to.
    pub app: App,
    /// The authenticated user.
    pub user: User,
    /// Number of users supporting the authenticated user.
    pub supporter_count: u64,
    /// Number of users the authenticated user supports.
    pub supporting_count: u64,
}

/// Operations on the `/users` and `/verify_credentials` endpoints.
///
/// # Example
///
/// ```rust,ignore
/// use twitcasting_api::auth::Credentials;
///
/// let credentials = Credentials::basic("client-id", "client-secret")?;
/// let info = client.users().get_user_info("twitcasting_jp", &credentials).await?;
/// println!("{} has {} supporters", info.user, info.supporter_count);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct UserService<'a> {
    client: &'a HttpClient,
}

impl<'a> UserService<'a> {
    /// Creates a service that sends through `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Fetches a user by ID or screen ID.
    ///
    /// # Errors
    ///
    /// Returns [`TwitcastingError`] if the request fails, the platform
    /// reports an error, or the body is malformed.
    pub async fn get_user_info(
        &self,
        user_id: &str,
        credentials: &Credentials,
    ) -> Result<UserInfo, TwitcastingError> {
        let path = format!("users/{}", urlencoding::encode(user_id));
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        let response = self.client.request(request, credentials).await?;

        interpret_response(&response, |body| {
            let (supporter_count, supporting_count) = support_counts(&body)?;
            Ok(UserInfo {
                user: read_user(&body)?,
                supporter_count,
                supporting_count,
            })
        })
    }

    /// Resolves the application and user behind `credentials`.
    ///
    /// # Errors
    ///
    /// Returns [`TwitcastingError::Validation`] if the response has an empty
    /// `app` field, or any other [`TwitcastingError`] as for
    /// [`get_user_info`](Self::get_user_info).
    pub async fn verify_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<CredentialInfo, TwitcastingError> {
        let request = HttpRequest::builder(HttpMethod::Get, "verify_credentials").build()?;
        let response = self.client.request(request, credentials).await?;

        interpret_response(&response, |body| {
            let fields: AppFields = decode(section(&body, "app")?)?;
            let (supporter_count, supporting_count) = support_counts(&body)?;
            Ok(CredentialInfo {
                app: App::try_from(fields)?,
                user: read_user(&body)?,
                supporter_count,
                supporting_count,
            })
        })
    }
}

fn section(body: &Value, key: &str) -> Result<Value, TwitcastingError> {
    sub_object(body, key).map_err(|message| TwitcastingError::MalformedResponse { message })
}

fn read_user(body: &Value) -> Result<User, TwitcastingError> {
    decode(section(body, "user")?)
}

/// Reads `supporter_count`/`supporting_count` from the top level, then
/// from the `user` object, defaulting to 0. A count that is present but not
/// a non-negative integer is malformed.
fn support_counts(body: &Value) -> Result<(u64, u64), TwitcastingError> {
    let count = |key: &str| -> Result<u64, TwitcastingError> {
        let candidates = [body.get(key), body.get("user").and_then(|u| u.get(key))];
        match candidates.into_iter().flatten().find(|v| !v.is_null()) {
            None => Ok(0),
            Some(value) => value.as_u64().ok_or_else(|| TwitcastingError::MalformedResponse {
                message: format!("{key} must be a non-negative integer, got {value}"),
            }),
        }
    };
    Ok((count("supporter_count")?, count("supporting_count")?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_support_counts_prefer_top_level() {
        let body = json!({
            "user": {"supporter_count": 1, "supporting_count": 2},
            "supporter_count": 10,
            "supporting_count": 20
        });
        assert_eq!(support_counts(&body).unwrap(), (10, 20));
    }

    #[test]
    fn test_support_counts_fall_back_to_user_object() {
        let body = json!({"user": {"supporter_count": 3, "supporting_count": 4}});
        assert_eq!(support_counts(&body).unwrap(), (3, 4));
    }

    #[test]
    fn test_support_counts_default_to_zero() {
        assert_eq!(support_counts(&json!({})).unwrap(), (0, 0));
        assert_eq!(support_counts(&json!({"supporter_count": null})).unwrap(), (0, 0));
    }

    #[test]
    fn test_support_counts_of_wrong_type_are_malformed() {
        for body in [
            json!({"supporter_count": "10"}),
            json!({"supporting_count": -1}),
            json!({"user": {"supporter_count": 1.5}}),
        ] {
            assert!(matches!(
                support_counts(&body),
                Err(TwitcastingError::MalformedResponse { .. })
            ));
        }
    }

    #[test]
    fn test_read_user_defaults_missing_object() {
        assert_eq!(read_user(&json!({})).unwrap(), User::default());
    }

    #[test]
    fn test_read_user_rejects_non_object() {
        let error = read_user(&json!({"user": "182224938"})).unwrap_err();
        assert!(matches!(error, TwitcastingError::MalformedResponse { .. }));
    }
}
