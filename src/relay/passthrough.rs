use axum::http::header::{HeaderMap, HeaderName, CONNECTION};
use hyper::{Body, Response};

// RFC 7230 section 6.1
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Prepare an upstream response to be sent back to the caller: status, remaining headers and the
/// streaming body are kept, connection-scoped headers are dropped.
pub(super) fn relayed(mut response: Response<Body>) -> Response<Body> {
    strip_hop_by_hop(response.headers_mut());
    response
}

fn strip_hop_by_hop(headers: &mut HeaderMap) {
    // Headers listed in `Connection` are connection-scoped as well.
    let listed: Vec<HeaderName> = headers
        .get_all(CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|name| HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();
    for name in listed {
        headers.remove(name);
    }
    for name in HOP_BY_HOP {
        headers.remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::{
        CONTENT_TYPE, PROXY_AUTHENTICATE, PROXY_AUTHORIZATION, SERVER, TE, TRAILER,
        TRANSFER_ENCODING, UPGRADE,
    };
    use axum::http::StatusCode;

    #[test]
    fn drops_hop_by_hop_keeps_the_rest() {
        let response = Response::builder()
            .status(StatusCode::ACCEPTED)
            .header(CONNECTION, "keep-alive, x-device-session")
            .header("keep-alive", "timeout=5")
            .header("x-device-session", "abc")
            .header(TRANSFER_ENCODING, "chunked")
            .header(CONTENT_TYPE, "text/plain")
            .header(SERVER, "esp8266")
            .body(Body::empty())
            .unwrap();

        let response = relayed(response);
        let headers = response.headers();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        for name in [CONNECTION, TRANSFER_ENCODING, TE, TRAILER, UPGRADE] {
            assert!(!headers.contains_key(name));
        }
        assert!(!headers.contains_key(PROXY_AUTHENTICATE));
        assert!(!headers.contains_key(PROXY_AUTHORIZATION));
        assert!(!headers.contains_key("keep-alive"));
        assert!(!headers.contains_key("x-device-session"));
        assert_eq!(headers[CONTENT_TYPE], "text/plain");
        assert_eq!(headers[SERVER], "esp8266");
    }
}
