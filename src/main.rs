//! Dynamic-Origin Forwarding Proxy
//!
//! A reverse proxy that picks its upstream per request from a query
//! parameter instead of a static routing table.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                ORIGIN PROXY                   │
//!                    │                                               │
//!  Client Request    │  ┌────────┐   ┌──────────┐   ┌────────────┐  │
//!  ──────────────────┼─▶│  http  │──▶│  origin  │──▶│   header   │  │
//!                    │  │ server │   │ resolver │   │ sanitizer  │  │
//!                    │  └────────┘   └──────────┘   └─────┬──────┘  │
//!                    │                                     │         │
//!                    │                                     ▼         │
//!  Client Response   │  ┌──────────┐   ┌───────────┐  ┌──────────┐  │
//!  ◀─────────────────┼──│ response │◀──│   error   │  │forwarder │──┼──▶ Upstream
//!                    │  │translator│   │classifier │  │ (https)  │  │    (from ?_host=)
//!                    │  └──────────┘   └───────────┘  └──────────┘  │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! The pipeline runs once per request; the only state shared across
//! requests is the immutable configuration.

use std::path::Path;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use origin_proxy::config::{self, ProxyConfig};
use origin_proxy::http::HttpServer;
use origin_proxy::lifecycle::Shutdown;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "origin_proxy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("origin-proxy v0.1.0 starting");

    // Load configuration: optional TOML file, then environment overrides.
    let config = match std::env::var("PROXY_CONFIG") {
        Ok(path) => config::load_config(Path::new(&path))?,
        Err(_) => ProxyConfig::default(),
    };

    let bind_address = config.listener.bind_address();

    tracing::info!(
        bind_address = %bind_address,
        target_param = %config.forwarding.target_param,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
