use crate::config::SharedConfig;
use crate::relay::passthrough;
use crate::relay::relay_error::RelayError;
use crate::upstream::{segment_url, DynUpstream};
use axum::extract::{Path, State};
use axum::routing::{get, get_service, post};
use axum::Router;
use hyper::{Body, Method, Response};
use tower_http::services::ServeFile;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
struct AppState {
    config: SharedConfig,
    upstream: DynUpstream,
}

/// Build the relay [`Router`] for the given configuration, forwarding through `upstream`.
pub fn new(config: SharedConfig, upstream: DynUpstream) -> Router {
    let dashboard = ServeFile::new(&config.dashboard_path);
    let api_timeout = config.api_timeout;
    Router::new()
        .route("/", get_service(dashboard))
        .route("/:args", get(forward_get))
        .route("/pump/:state", post(forward_pump))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(api_timeout))
        .with_state(AppState { config, upstream })
}

async fn forward_get(
    State(state): State<AppState>,
    Path(args): Path<String>,
) -> Result<Response<Body>, RelayError> {
    let url = segment_url(&state.config.upstream, &[], &args)?;
    let response = state.upstream.forward(Method::GET, url).await?;
    Ok(passthrough::relayed(response))
}

async fn forward_pump(
    State(state): State<AppState>,
    Path(pump_state): Path<String>,
) -> Result<Response<Body>, RelayError> {
    let url = segment_url(&state.config.upstream, &["pump"], &pump_state)?;
    tracing::info!("setting pump state \"{pump_state}\" via {url}");
    let response = state.upstream.forward(Method::POST, url).await?;
    Ok(passthrough::relayed(response))
}
