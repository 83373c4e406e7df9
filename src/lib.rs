//! pumpdash
//!
//! A tiny HTTP relay for a pump controller dashboard. Serves a static HTML page and forwards
//! the page's requests to a single upstream device on the local network, so the browser only
//! ever talks to one origin.
//!
//! See [`relay`] for the endpoints and [`config`] for the settings.
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod relay;
pub mod upstream;

pub use config::{Config, SharedConfig};
pub use relay::new as new_http;
pub use upstream::HttpUpstream;
