//! Process lifecycle coordination.
//!
//! The server is an explicit object: constructed with configuration,
//! started on a listener, stopped through [`Shutdown`] or Ctrl+C.

pub mod shutdown;

pub use shutdown::Shutdown;
