use crate::config::SharedConfig;
use crate::relay::routes;
use crate::upstream::DynUpstream;
use std::future::Future;

/// Bind the configured listener and return the future serving the relay on it.
///
/// # Errors
///
/// Returns a [`hyper::Error`] if [`Config::bind_addr`][`crate::config::Config::bind_addr`]
/// can't be bound.
pub fn new(
    config: SharedConfig,
    upstream: DynUpstream,
) -> hyper::Result<impl Future<Output = hyper::Result<()>>> {
    Ok(axum::Server::try_bind(&config.bind_addr)?
        .serve(routes::new(config, upstream).into_make_service()))
}
