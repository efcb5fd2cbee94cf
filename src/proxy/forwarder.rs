//! Upstream HTTP client.
//!
//! # Responsibilities
//! - Issue exactly one outbound call per invocation (no retries)
//! - Read the full response body into memory before returning
//! - Tag transport-level failures (DNS, connect, TLS, timeout) so the
//!   classifier never has to sniff error messages
//!
//! # Design Decisions
//! - The client is built once at startup and shared; connection reuse is
//!   its concern, not the pipeline's
//! - Redirects are not followed; the upstream's redirect goes back to the
//!   caller verbatim like any other response

use std::time::Duration;

use axum::http::{HeaderMap, Method, StatusCode};
use bytes::Bytes;
use url::Url;

use super::error::{ProxyError, ProxyResult};
use crate::config::TimeoutConfig;

/// A fully buffered upstream response.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Single-shot upstream forwarder around a shared HTTP client.
#[derive(Clone)]
pub struct Forwarder {
    client: reqwest::Client,
}

impl Forwarder {
    /// Build the forwarder with the configured timeouts.
    pub fn new(timeouts: &TimeoutConfig) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.request_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }

    /// Forward one request to `url` and buffer the whole response.
    pub async fn forward(
        &self,
        method: Method,
        url: &Url,
        headers: HeaderMap,
        body: Bytes,
    ) -> ProxyResult<UpstreamResponse> {
        let response = self
            .client
            .request(method, url.clone())
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|source| ProxyError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|source| ProxyError::Transport {
                url: url.to_string(),
                source,
            })?;

        Ok(UpstreamResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let forwarder = Forwarder::new(&TimeoutConfig {
            connect_secs: 1,
            request_secs: 2,
        });
        // Port 9 (discard) is a safe bet for a refused connection locally.
        let url = Url::parse("http://127.0.0.1:9/").unwrap();

        let err = forwarder
            .forward(Method::GET, &url, HeaderMap::new(), Bytes::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ProxyError::Transport { .. }));
    }
}
