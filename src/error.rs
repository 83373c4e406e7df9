//! Error types.

use std::time::Duration;

/// Error enumerates the possible pumpdash error states.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when the upstream device did not produce a response head within
    /// [`Config::upstream_timeout`][`crate::config::Config::upstream_timeout`].
    #[error("upstream did not respond within {0:?}")]
    UpstreamTimeout(Duration),

    /// Returned when the request to the upstream device fails before a response is received,
    /// e.g. the connection is refused or reset.
    #[error("upstream request failed: {0}")]
    UpstreamRequest(#[from] hyper::Error),

    /// Returned when a captured path segment is a dot segment (`.` or `..`), which would address
    /// a different path on the upstream device once the URL is normalised.
    #[error("path segment \"{0}\" can't be forwarded")]
    InvalidSegment(String),

    /// Returned when a forwarded URL can't be turned into a request URI.
    #[error("invalid upstream URL \"{0}\"")]
    InvalidUpstreamURL(String),

    /// Returned when the configured [`Config::upstream`][`crate::config::Config::upstream`] uses
    /// a scheme other than `http`. The relay talks plain HTTP to devices on the local network.
    #[error("upstream scheme must be http, found \"{0}\"")]
    UnsupportedUpstreamScheme(String),

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when [trying to load a `Config`][crate::config::Config::try_from_file] fails
    /// due to invalid JSON content.
    #[error("invalid JSON")]
    InvalidJSON(#[from] serde_json::Error),
}
