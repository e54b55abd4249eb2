//! User and application models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::error::ValidationError;

/// A TwitCasting user.
///
/// Every plain field defaults to its zero value when absent; `last_movie_id`
/// stays `None` for users who have never broadcast.
///
/// # Example
///
/// ```rust
/// use twitcasting_api::User;
/// use serde_json::json;
///
/// let user = User::from_value(json!({"id": "182224938", "name": "TwitCasting"})).unwrap();
/// assert_eq!(user.to_string(), "User: TwitCasting (ID: 182224938)");
/// assert_eq!(user.level, 0);
/// assert!(user.last_movie_id.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Screen ID (the `@name` handle).
    #[serde(default, deserialize_with = "null_as_default")]
    pub screen_id: String,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Avatar image URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    /// Profile text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile: String,
    /// User level.
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: u32,
    /// ID of the most recent movie, if any.
    #[serde(default)]
    pub last_movie_id: Option<String>,
    /// Whether the user is live right now.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_live: bool,
}

impl User {
    /// Builds a user from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if a present field has the wrong type.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User: {} (ID: {})", self.name, self.id)
    }
}

/// The application the credentials belong to.
///
/// All three fields are required; an `App` with an empty field cannot be
/// constructed.
///
/// # Example
///
/// ```rust
/// use twitcasting_api::App;
///
/// let app = App::new("182224938.d37f58350925d568e2db24719fe86f0c", "Demo", "182224938").unwrap();
/// assert_eq!(app.name(), "Demo");
///
/// assert!(App::new("", "Demo", "182224938").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct App {
    client_id: String,
    name: String,
    owner_user_id: String,
}

impl App {
    /// Creates a validated app.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] naming the first empty field.
    pub fn new(
        client_id: impl Into<String>,
        name: impl Into<String>,
        owner_user_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let app = Self {
            client_id: client_id.into(),
            name: name.into(),
            owner_user_id: owner_user_id.into(),
        };
        for (field, value) in [
            ("client_id", &app.client_id),
            ("name", &app.name),
            ("owner_user_id", &app.owner_user_id),
        ] {
            if value.is_empty() {
                return Err(ValidationError::EmptyField { entity: "App", field });
            }
        }
        Ok(app)
    }

    /// Returns the client ID.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the application name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ID of the user who owns the application.
    #[must_use]
    pub fn owner_user_id(&self) -> &str {
        &self.owner_user_id
    }
}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "App: {} (Client ID: {})", self.name, self.client_id)
    }
}

/// The `app` object as it appears on the wire, before validation.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AppFields {
    #[serde(default, deserialize_with = "null_as_default")]
    client_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    owner_user_id: String,
}

impl TryFrom<AppFields> for App {
    type Error = ValidationError;

    fn try_from(fields: AppFields) -> Result<Self, Self::Error> {
        Self::new(fields.client_id, fields.name, fields.owner_user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_from_empty_object_uses_defaults() {
        let user = User::from_value(json!({})).unwrap();
        assert_eq!(user, User::default());
        assert_eq!(user.id, "");
        assert_eq!(user.screen_id, "");
        assert_eq!(user.level, 0);
        assert!(user.last_movie_id.is_none());
        assert!(!user.is_live);
    }

    #[test]
    fn test_user_null_fields_use_defaults() {
        let user = User::from_value(json!({"name": null, "level": null, "is_live": null})).unwrap();
        assert_eq!(user.name, "");
        assert_eq!(user.level, 0);
        assert!(!user.is_live);
    }

    #[test]
    fn test_user_reads_every_field() {
        let mut input = json!({
            "id": "182224938",
            "screen_id": "twitcasting_jp",
            "name": "ツイキャス公式",
            "image": "http://202-234-44-53.moi.st/image3s/pbs.twimg.com/profile_images/613625726512705536/GLlBoXcS_normal.png",
            "profile": "ツイキャスの公式アカウントです。",
            "level": 24,
            "last_movie_id": "189037369",
            "is_live": false,
            "supporter_count": 10
        });
        let user = User::from_value(input.clone()).unwrap();

        assert_eq!(user.id, "182224938");
        assert_eq!(user.name, "ツイキャス公式");
        assert_eq!(user.last_movie_id.as_deref(), Some("189037369"));
        assert!(!user.is_live);

        input.as_object_mut().unwrap().remove("supporter_count");
        assert_eq!(serde_json::to_value(&user).unwrap(), input);
    }

    #[test]
    fn test_user_keeps_empty_string_distinct_from_null() {
        let user = User::from_value(json!({"last_movie_id": ""})).unwrap();
        assert_eq!(user.last_movie_id.as_deref(), Some(""));
    }

    #[test]
    fn test_user_wrong_type_is_error() {
        assert!(User::from_value(json!({"level": "high"})).is_err());
    }

    #[test]
    fn test_app_rejects_each_empty_field() {
        assert!(matches!(
            App::new("", "n", "o"),
            Err(ValidationError::EmptyField { field: "client_id", .. })
        ));
        assert!(matches!(
            App::new("c", "", "o"),
            Err(ValidationError::EmptyField { field: "name", .. })
        ));
        assert!(matches!(
            App::new("c", "n", ""),
            Err(ValidationError::EmptyField {
                field: "owner_user_id",
                ..
            })
        ));
    }

    #[test]
    fn test_app_display() {
        let app = App::new("cid", "Demo", "1").unwrap();
        assert_eq!(app.to_string(), "App: Demo (Client ID: cid)");
    }

    #[test]
    fn test_app_fields_try_from() {
        let fields: AppFields = serde_json::from_value(json!({"name": "Demo"})).unwrap();
        assert!(App::try_from(fields).is_err());
    }
}
