//! Upstream response translation.
//!
//! Only status, content-type, and body are relayed to the caller. The
//! remaining upstream headers are deliberately dropped: forwarding them
//! wholesale could leak upstream-internal headers through the proxy, and
//! hop-by-hop values from the origin are meaningless here anyway.

use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};

use super::forwarder::UpstreamResponse;

/// Content type used when the upstream response does not name one.
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// Build the caller-facing response from an upstream response. Pure; never
/// fails. Body bytes round-trip untouched, binary or not.
pub fn translate(upstream: UpstreamResponse) -> Response {
    let content_type = upstream
        .headers
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));

    (
        upstream.status,
        [(header::CONTENT_TYPE, content_type)],
        upstream.body,
    )
        .into_response()
}
