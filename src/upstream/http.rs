//! A hyper client backed implementation of the [`Upstream`][super::Upstream] trait.
use crate::error::Error;
use crate::upstream::Upstream;
use hyper::client::HttpConnector;
use hyper::header::{HeaderValue, CONTENT_LENGTH};
use hyper::{Body, Client, Method, Request, Response, Uri};
use std::time::Duration;
use url::Url;

/// Plain HTTP/1 upstream. Connections are pooled by the hyper client; each forwarded request is
/// attempted once and abandoned after `timeout`.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct HttpUpstream {
    client: Client<HttpConnector>,
    timeout: Duration,
}

impl HttpUpstream {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(timeout));
        Self {
            client: Client::builder().build(connector),
            timeout,
        }
    }

    fn request(method: Method, url: &Url) -> Result<Request<Body>, Error> {
        let uri: Uri = url
            .as_str()
            .parse()
            .map_err(|_| Error::InvalidUpstreamURL(url.to_string()))?;
        let mut req = Request::new(Body::empty());
        if method == Method::POST {
            req.headers_mut()
                .insert(CONTENT_LENGTH, HeaderValue::from_static("0"));
        }
        *req.method_mut() = method;
        *req.uri_mut() = uri;
        Ok(req)
    }
}

#[async_trait::async_trait]
impl Upstream for HttpUpstream {
    async fn forward(&self, method: Method, url: Url) -> Result<Response<Body>, Error> {
        let req = Self::request(method, &url)?;
        tracing::debug!("forwarding {} {url}", req.method());
        let response = tokio::time::timeout(self.timeout, self.client.request(req))
            .await
            .map_err(|_| Error::UpstreamTimeout(self.timeout))??;
        tracing::debug!("upstream {url} answered {}", response.status());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_request_has_empty_body_and_zero_length() {
        let url = Url::parse("http://192.168.1.4/pump/on").unwrap();
        let req = HttpUpstream::request(Method::POST, &url).unwrap();
        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.uri(), "http://192.168.1.4/pump/on");
        assert_eq!(req.headers()[CONTENT_LENGTH], "0");
    }

    #[test]
    fn get_request_has_no_headers() {
        let url = Url::parse("http://192.168.1.4/status").unwrap();
        let req = HttpUpstream::request(Method::GET, &url).unwrap();
        assert_eq!(req.method(), Method::GET);
        assert!(req.headers().is_empty());
    }
}
