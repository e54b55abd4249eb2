//! Platform error classification and response interpretation.
//!
//! # Overview
//!
//! - [`lookup`] / [`entries`]: The table of documented TwitCasting error codes
//! - [`PlatformError`]: A classified platform-reported failure
//! - [`interpret`] / [`interpret_response`]: Turn raw responses into success
//!   values or classified errors

mod error_codes;
mod interpreter;

pub use error_codes::{entries, lookup, ErrorCodeEntry, FailureKind, PlatformError};
pub use interpreter::{interpret, interpret_response};

pub(crate) use interpreter::decode;
