//! Outbound header sanitization.
//!
//! The original client headers are copied to the upstream request minus a
//! fixed set of names that must never cross the proxy boundary: hop-by-hop
//! headers, the inbound `Host`, and client-tooling identification headers.
//! The set is built once at startup and read concurrently after that.

use axum::http::{HeaderMap, HeaderName};

/// Header names removed from every outbound request.
#[derive(Debug, Clone, Default)]
pub struct ForbiddenHeaderSet {
    names: Vec<HeaderName>,
}

impl ForbiddenHeaderSet {
    /// Build the set from configured names. Names that do not parse as
    /// header names are reported and skipped; they could never match an
    /// inbound header anyway.
    pub fn from_config(names: &[String]) -> Self {
        let names = names
            .iter()
            .filter_map(|name| match name.parse::<HeaderName>() {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    tracing::warn!(header = %name, "Ignoring invalid forbidden header name");
                    None
                }
            })
            .collect();
        Self { names }
    }

    /// Whether `name` is forbidden. `HeaderName` is always lowercase, so
    /// this comparison is case-insensitive by construction.
    pub fn contains(&self, name: &HeaderName) -> bool {
        self.names.contains(name)
    }

    /// Produce the outbound header map: a copy of `inbound` with every
    /// forbidden name removed. Pure; never fails. Repeated headers keep
    /// their values and order.
    pub fn sanitize(&self, inbound: &HeaderMap) -> HeaderMap {
        let mut outbound = HeaderMap::with_capacity(inbound.len());
        for (name, value) in inbound.iter() {
            if self.contains(name) {
                continue;
            }
            outbound.append(name.clone(), value.clone());
        }
        outbound
    }
}
