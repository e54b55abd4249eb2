//! Broadcast (movie) model.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A TwitCasting broadcast.
///
/// # Example
///
/// ```rust
/// use twitcasting_api::Movie;
/// use serde_json::json;
///
/// let movie = Movie::from_value(json!({
///     "id": "189037369",
///     "user_id": "182224938",
///     "title": "Live #189037369",
///     "duration": 1186,
///     "created": 1438500282
/// }))
/// .unwrap();
///
/// assert_eq!(movie.running_time().as_secs(), 1186);
/// assert!(movie.subtitle.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Movie ID.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// ID of the broadcasting user.
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
    /// Title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Subtitle (telop).
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Latest comment posted by the broadcaster.
    #[serde(default)]
    pub last_owner_comment: Option<String>,
    /// Category ID.
    #[serde(default)]
    pub category: Option<String>,
    /// Movie page URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    /// Whether the movie is live.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_live: bool,
    /// Whether a recording is available.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_recorded: bool,
    /// Total comment count.
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment_count: u64,
    /// Large thumbnail URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub large_thumbnail: String,
    /// Small thumbnail URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub small_thumbnail: String,
    /// Country code of the broadcast.
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    /// Length in seconds.
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: u64,
    /// Start time as a Unix timestamp.
    #[serde(default, deserialize_with = "null_as_default")]
    pub created: i64,
    /// Whether this is a collaboration broadcast.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_collabo: bool,
    /// Whether the broadcast is password protected.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_protected: bool,
    /// Peak concurrent viewers.
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_view_count: u64,
    /// Current concurrent viewers.
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_view_count: u64,
    /// Total viewers.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_view_count: u64,
    /// HLS playback URL.
    #[serde(default)]
    pub hls_url: Option<String>,
}

impl Movie {
    /// Builds a movie from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if a present field has the wrong type.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Returns the start time, or `None` if `created` is out of range.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created, 0)
    }

    /// Returns the broadcast length.
    #[must_use]
    pub const fn running_time(&self) -> Duration {
        Duration::from_secs(self.duration)
    }
}
