//! The upstream device the relay forwards to.
//!
//! Forwarded URLs are built with [`segment_url`], which appends the captured path segment to the
//! configured [`Config::upstream`][`crate::config::Config::upstream`] base as exactly one path
//! segment. Characters that would otherwise start a new segment, a query or a fragment
//! (`/`, `?`, `#`) are percent-encoded, as are `%` and space. Unreserved characters are copied
//! as-is, so `GET /status` is forwarded to `<upstream>/status`. The dot segments `.` and `..`
//! are refused with [`Error::InvalidSegment`], since URL normalisation would resolve them to a
//! different path on the device.
//!
//! [`HttpUpstream`] performs the exchange with a single attempt and a fixed timeout.

use crate::error::Error;
use hyper::{Body, Method, Response};
use std::sync::Arc;
use url::Url;

pub mod http;

#[allow(clippy::module_name_repetitions)]
pub use http::HttpUpstream;

/// `DynUpstream` is a type alias for an [`Upstream`] shared between request handlers.
#[allow(clippy::module_name_repetitions)]
pub type DynUpstream = Arc<dyn Upstream + Send + Sync>;

/// An async trait describing a single request/response exchange with the upstream device.
#[async_trait::async_trait]
pub trait Upstream {
    /// Send one request with an empty body to `url` and return the response head and streaming
    /// body. Implementations must not retry.
    async fn forward(&self, method: Method, url: Url) -> Result<Response<Body>, Error>;
}

/// Build the forwarded URL for `segment` below `base`, after the fixed `prefix` segments.
///
/// An empty trailing segment of `base` (i.e. a base ending in `/`) is dropped first, so
/// `http://device/` and `http://device` behave the same.
///
/// # Errors
///
/// Returns [`Error::InvalidSegment`] for the dot segments `.` and `..`, and
/// [`Error::InvalidUpstreamURL`] if `base` can't carry a path (e.g. `mailto:`).
pub fn segment_url(base: &Url, prefix: &[&str], segment: &str) -> Result<Url, Error> {
    if matches!(segment, "." | "..") {
        return Err(Error::InvalidSegment(segment.to_string()));
    }
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| Error::InvalidUpstreamURL(base.to_string()))?
        .pop_if_empty()
        .extend(prefix)
        .push(segment);
    Ok(url)
}
