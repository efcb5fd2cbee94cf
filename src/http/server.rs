//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with a single method-agnostic wildcard handler
//! - Wire up middleware (tracing, request timeout)
//! - Bind the server to a listener with graceful shutdown
//! - Run the fixed pipeline per request: resolve origin → sanitize headers
//!   → forward → translate, classifying any failure into a JSON error

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use url::Url;

use crate::config::ProxyConfig;
use crate::proxy::{resolve_origin, translate, ForbiddenHeaderSet, Forwarder, ProxyError, ProxyResult};

/// Slack between the upstream client timeout and the middleware deadline.
/// The client must time out first so a stalled upstream surfaces from the
/// forwarder as a classified 502 instead of a bare middleware 408.
const TIMEOUT_GRACE_SECS: u64 = 5;

/// Application state injected into the handler. Everything here is built
/// once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub target_param: Arc<str>,
    pub forbidden: Arc<ForbiddenHeaderSet>,
    pub forwarder: Forwarder,
}

/// HTTP server for the forwarding proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Self {
        let state = AppState {
            target_param: config.forwarding.target_param.clone().into(),
            forbidden: Arc::new(ForbiddenHeaderSet::from_config(
                &config.forwarding.forbidden_headers,
            )),
            forwarder: Forwarder::new(&config.timeouts),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers. The proxy is
    /// method- and path-agnostic, so everything lands on one handler.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(proxy_handler))
            .route("/", any(proxy_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs + TIMEOUT_GRACE_SECS,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// Ctrl+C or the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {}
                    _ = shutdown.recv() => {}
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}

/// Main proxy handler. The top-level catch: any pipeline failure becomes a
/// classified JSON response, so every request gets exactly one answer.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    match run_pipeline(state, request).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Fixed per-request sequence: resolve → sanitize → forward → translate.
async fn run_pipeline(state: AppState, request: Request<Body>) -> ProxyResult<Response> {
    let method = request.method().clone();

    // The listener hands us an origin-form URI; give it a synthetic base so
    // the resolver can work on a full URL. Only path/query/fragment are read.
    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_owned())
        .unwrap_or_else(|| "/".to_owned());
    let inbound = Url::parse(&format!("http://proxy.internal{path_and_query}"))
        .map_err(|e| ProxyError::Unclassified(format!("Unparseable request URL: {e}")))?;

    let target = resolve_origin(&inbound, &state.target_param)?;

    tracing::debug!(
        method = %method,
        path = %inbound.path(),
        target = %target,
        "Proxying request"
    );

    let outbound_headers = state.forbidden.sanitize(request.headers());

    let body = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|e| ProxyError::Unclassified(format!("Failed to read request body: {e}")))?;

    let upstream = state
        .forwarder
        .forward(method, &target, outbound_headers, body)
        .await?;

    tracing::debug!(
        status = %upstream.status,
        bytes = upstream.body.len(),
        "Upstream responded"
    );

    Ok(translate(upstream))
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
