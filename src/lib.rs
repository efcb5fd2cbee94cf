//! Dynamic-origin forwarding proxy library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod proxy;

pub use config::schema::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
