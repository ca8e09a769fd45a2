//! Structured error types for remote fetches.

use thiserror::Error;

/// What went wrong with a fetch.
///
/// The UI collapses all of these into a single "request failed" screen;
/// the variants exist for the status line and for tests, not for divergent
/// recovery paths.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request rejected: HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("malformed response: {0}")]
    Decode(String),
}
