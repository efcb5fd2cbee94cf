//! HTTP listener subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, wildcard route, middleware)
//!     → proxy pipeline (resolve → sanitize → forward → translate)
//!     → response to client
//! ```

pub mod server;

pub use server::HttpServer;
