use crate::error::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub(crate) struct RelayError(anyhow::Error);

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let any_err = self.0;
        let status = match any_err.downcast_ref::<Error>() {
            Some(Error::UpstreamTimeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            Some(Error::UpstreamRequest(_)) => StatusCode::BAD_GATEWAY,
            Some(Error::InvalidSegment(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!("relay failed with {status}: {any_err}");
        let body = Json(json!({
            "error": format!("{any_err}"),
        }));
        (status, body).into_response()
    }
}

impl<E> From<E> for RelayError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
