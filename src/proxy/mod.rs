//! Request forwarding pipeline.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → origin.rs (extract ?_host=, build upstream URL)
//!     → headers.rs (strip forbidden headers)
//!     → forwarder.rs (single upstream call, body fully buffered)
//!     → translate.rs (status + content-type + body back to caller)
//!
//! Any failure:
//!     → error.rs (classify into 400 / 502 / 500 JSON payloads)
//! ```
//!
//! Every stage is request-scoped; nothing here outlives one request.

pub mod error;
pub mod forwarder;
pub mod headers;
pub mod origin;
pub mod translate;

pub use error::{ProxyError, ProxyResult};
pub use forwarder::{Forwarder, UpstreamResponse};
pub use headers::ForbiddenHeaderSet;
pub use origin::resolve_origin;
pub use translate::translate;
