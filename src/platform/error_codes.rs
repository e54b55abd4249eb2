//! TwitCasting platform error codes.
//!
//! The API reports business-level failures as `{"error": {"code": N, ...}}`.
//! This module maps each documented code (and the HTTP statuses the API
//! uses) to a label, a detail text, and a [`FailureKind`].
//!
//! # Example
//!
//! ```rust
//! use twitcasting_api::platform::{lookup, FailureKind};
//!
//! let entry = lookup(404);
//! assert_eq!(entry.label, "Not Found");
//! assert_eq!(entry.kind, FailureKind::NotFound);
//!
//! assert_eq!(lookup(999).kind, FailureKind::UnknownError);
//! ```

use std::fmt;

use thiserror::Error;

/// The classified kind of a platform-reported failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Code 1000.
    InvalidToken,
    /// Code 1001.
    ValidationError,
    /// Code 1002.
    InvalidWebhookUrl,
    /// Code 2000.
    ExecutionCountLimitation,
    /// Code 2001.
    ApplicationDisabled,
    /// Code 2002.
    Protected,
    /// Code 2003.
    DuplicateComment,
    /// Code 2004.
    TooManyComments,
    /// Code 2005.
    OutOfScope,
    /// Code 2006.
    EmailUnverified,
    /// Code / HTTP status 400.
    BadRequest,
    /// Code / HTTP status 403.
    Forbidden,
    /// Code / HTTP status 404.
    NotFound,
    /// Code / HTTP status 500.
    InternalServerError,
    /// Any code not in the table, or an error without a code.
    UnknownError,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One row of the platform error table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErrorCodeEntry {
    /// The numeric code.
    pub code: i64,
    /// Short label, e.g. `"Not Found"`.
    pub label: &'static str,
    /// Longer description of when the platform returns this code.
    pub detail: &'static str,
    /// The classified failure kind.
    pub kind: FailureKind,
}

const UNKNOWN_LABEL: &str = "Unknown Error";

const fn entry(code: i64, label: &'static str, detail: &'static str, kind: FailureKind) -> ErrorCodeEntry {
    ErrorCodeEntry {
        code,
        label,
        detail,
        kind,
    }
}

static ERROR_CODES: [ErrorCodeEntry; 14] = [
    entry(1000, "Invalid Token", "The access token is invalid", FailureKind::InvalidToken),
    entry(1001, "Validation Error", "A request parameter failed validation", FailureKind::ValidationError),
    entry(
        1002,
        "Invalid Webhook URL",
        "The API requires a registered webhook URL, but none is registered or its format is invalid",
        FailureKind::InvalidWebhookUrl,
    ),
    entry(
        2000,
        "Execution Count Limitation",
        "The API execution count limit has been reached",
        FailureKind::ExecutionCountLimitation,
    ),
    entry(
        2001,
        "Application Disabled",
        "The application has been disabled (contact support)",
        FailureKind::ApplicationDisabled,
    ),
    entry(
        2002,
        "Protected",
        "The content is protected (e.g. a password-protected broadcast)",
        FailureKind::Protected,
    ),
    entry(
        2003,
        "Duplicate Comment",
        "Duplicate post (e.g. the same comment sent repeatedly)",
        FailureKind::DuplicateComment,
    ),
    entry(
        2004,
        "Too Many Comments",
        "The comment limit has been reached (can occur on ended broadcasts with many comments)",
        FailureKind::TooManyComments,
    ),
    entry(
        2005,
        "Out of Scope",
        "The application lacks permission for writing, broadcasting, or similar operations",
        FailureKind::OutOfScope,
    ),
    entry(
        2006,
        "Email Unverified",
        "The feature is unavailable until the account email address is verified",
        FailureKind::EmailUnverified,
    ),
    entry(
        400,
        "Bad Request",
        "Invalid parameters (e.g. the specified target does not exist)",
        FailureKind::BadRequest,
    ),
    entry(403, "Forbidden", "Access to a resource without permission", FailureKind::Forbidden),
    entry(404, "Not Found", "The content was not found", FailureKind::NotFound),
    entry(500, "Internal Server Error", "Other error", FailureKind::InternalServerError),
];

/// Returns every known error code entry.
#[must_use]
pub fn entries() -> &'static [ErrorCodeEntry] {
    &ERROR_CODES
}

/// Looks up a platform error code.
///
/// Codes not in the table resolve to [`FailureKind::UnknownError`] with
/// label and detail `"Unknown Error"`; the returned entry keeps the queried
/// code.
#[must_use]
pub fn lookup(code: i64) -> ErrorCodeEntry {
    ERROR_CODES
        .iter()
        .find(|e| e.code == code)
        .copied()
        .unwrap_or(ErrorCodeEntry {
            code,
            label: UNKNOWN_LABEL,
            detail: UNKNOWN_LABEL,
            kind: FailureKind::UnknownError,
        })
}

/// A failure reported by the TwitCasting platform.
///
/// Carries both the classified [`FailureKind`] and the numeric code so
/// callers can branch on either. `code` is `None` only when the response
/// contained an `error` object without a usable code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Error {}: {label} - {detail}", display_code(.code))]
pub struct PlatformError {
    /// The classified failure kind.
    pub kind: FailureKind,
    /// The platform error code or HTTP status.
    pub code: Option<i64>,
    /// Short label from the error table.
    pub label: &'static str,
    /// Detail text from the error table.
    pub detail: &'static str,
}

impl PlatformError {
    /// Classifies a platform error code (or HTTP status) via [`lookup`].
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        let entry = lookup(code);
        Self {
            kind: entry.kind,
            code: Some(code),
            label: entry.label,
            detail: entry.detail,
        }
    }

    /// An error object was present but carried no recognizable code.
    #[must_use]
    pub const fn unrecognized() -> Self {
        Self {
            kind: FailureKind::UnknownError,
            code: None,
            label: UNKNOWN_LABEL,
            detail: UNKNOWN_LABEL,
        }
    }
}

fn display_code(code: &Option<i64>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_returns_exact_label_for_known_codes() {
        assert_eq!(lookup(404).label, "Not Found");
        assert_eq!(lookup(1000).label, "Invalid Token");
        assert_eq!(lookup(2002).kind, FailureKind::Protected);
        assert_eq!(lookup(500).kind, FailureKind::InternalServerError);
    }

    #[test]
    fn test_lookup_unknown_code() {
        let entry = lookup(999);
        assert_eq!(entry.kind, FailureKind::UnknownError);
        assert_eq!(entry.label, "Unknown Error");
        assert_eq!(entry.detail, "Unknown Error");
        assert_eq!(entry.code, 999);
    }

    #[test]
    fn test_table_covers_documented_codes_once() {
        let mut codes: Vec<i64> = entries().iter().map(|e| e.code).collect();
        codes.sort_unstable();
        assert_eq!(
            codes,
            vec![400, 403, 404, 500, 1000, 1001, 1002, 2000, 2001, 2002, 2003, 2004, 2005, 2006]
        );
        assert!(entries().iter().all(|e| e.kind != FailureKind::UnknownError));
    }

    #[test]
    fn test_every_entry_round_trips_through_lookup() {
        for e in entries() {
            assert_eq!(lookup(e.code), *e);
        }
    }

    #[test]
    fn test_platform_error_display_includes_code_label_and_detail() {
        let error = PlatformError::from_code(1000);
        assert_eq!(
            error.to_string(),
            "Error 1000: Invalid Token - The access token is invalid"
        );
    }

    #[test]
    fn test_unrecognized_platform_error() {
        let error = PlatformError::unrecognized();
        assert_eq!(error.kind, FailureKind::UnknownError);
        assert_eq!(error.code, None);
        assert_eq!(
            error.to_string(),
            "Error unknown: Unknown Error - Unknown Error"
        );
    }
}
