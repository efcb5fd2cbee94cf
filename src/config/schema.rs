//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Default listen port outside production.
pub const DEV_PORT: u16 = 8002;

/// Default listen port when `APP_ENV=production`.
pub const PROD_PORT: u16 = 8000;

/// Root configuration for the forwarding proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind host, port).
    pub listener: ListenerConfig,

    /// Forwarding rules (target parameter, forbidden headers).
    pub forwarding: ForwardingConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind host (e.g., "0.0.0.0").
    pub host: String,

    /// Explicit listen port. When absent the port is derived from the
    /// environment: `PORT` if set, otherwise 8002 in development and
    /// 8000 when `APP_ENV=production`.
    pub port: Option<u16>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: None,
        }
    }
}

impl ListenerConfig {
    /// Resolve the effective listen port from config and environment.
    pub fn resolve_port(&self) -> u16 {
        derive_port(
            self.port,
            std::env::var("PORT").ok().as_deref(),
            std::env::var("APP_ENV").ok().as_deref(),
        )
    }

    /// Full bind address for the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.resolve_port())
    }
}

/// Port resolution precedence: explicit config port, then the `PORT`
/// variable, then an environment-dependent default.
fn derive_port(explicit: Option<u16>, env_port: Option<&str>, app_env: Option<&str>) -> u16 {
    if let Some(port) = explicit {
        return port;
    }
    if let Some(port) = env_port.and_then(|p| p.parse().ok()) {
        return port;
    }
    if app_env == Some("production") {
        PROD_PORT
    } else {
        DEV_PORT
    }
}

/// Forwarding rules: how the upstream origin is selected and which
/// inbound headers must never be relayed.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ForwardingConfig {
    /// Query parameter naming the upstream origin (e.g., "_host").
    pub target_param: String,

    /// Header names stripped from every outbound request, matched
    /// case-insensitively. Covers hop-by-hop headers, the inbound Host,
    /// and client-tooling identification headers.
    pub forbidden_headers: Vec<String>,
}

impl Default for ForwardingConfig {
    fn default() -> Self {
        Self {
            target_param: "_host".to_string(),
            forbidden_headers: vec![
                "connection".to_string(),
                "keep-alive".to_string(),
                "transfer-encoding".to_string(),
                "host".to_string(),
                "x-original-origin".to_string(),
                "postman-token".to_string(),
            ],
        }
    }
}

/// Timeout configuration for the upstream call.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}
