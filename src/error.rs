//! Error type for Emailable operations.

use thiserror::Error;

/// Errors surfaced by the fallible parts of the client.
///
/// The boolean checks ([`Client::is_deliverable`](crate::Client::is_deliverable),
/// [`Client::is_disposable`](crate::Client::is_disposable)) never return these;
/// they are only visible through construction and
/// [`Client::try_verify`](crate::Client::try_verify).
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure: connection, timeout, non-2xx status or body read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not a JSON object.
    #[error("failed to decode verification payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The API key was empty or blank.
    #[error("an API key is required")]
    MissingApiKey,

    /// The configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
