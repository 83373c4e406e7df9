//! HTTP relay between the dashboard and the pump controller.
//!
//! # Endpoints
//!
//! ## `/` (GET)
//!
//!   Returns the dashboard page read from
//!   [`Config::dashboard_path`][`crate::config::Config::dashboard_path`], with a content type
//!   guessed from the file extension. Returns HTTP 404 (Not Found) if the file is missing.
//!
//! ## `/:args` (GET)
//!
//!   Forwards a `GET` to `<upstream>/:args` and returns the upstream response.
//!
//!   ```bash
//!   ❯ curl http://localhost:4567/status
//!   ```
//!
//!   is relayed as `GET http://192.168.1.4/status` with the default configuration.
//!
//! ## `/pump/:state` (POST)
//!
//!   Forwards a `POST` with an empty body to `<upstream>/pump/:state` and returns the upstream
//!   response.
//!
//! # Responses
//!
//! Upstream status, headers and body are relayed unchanged, including error statuses. Only
//! hop-by-hop headers are dropped. When no upstream response is available the relay answers
//! with a JSON body of the form `{"error": "..."}`:
//!
//! * HTTP 502 (Bad Gateway) when the upstream connection fails.
//! * HTTP 504 (Gateway Timeout) when the upstream doesn't answer within
//!   [`Config::upstream_timeout`][`crate::config::Config::upstream_timeout`].
//!
//! Requests are never retried.

mod passthrough;
mod relay_error;
mod routes;
pub mod server;

pub use routes::new as router;
pub use server::new;
