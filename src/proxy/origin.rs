//! Upstream origin resolution.
//!
//! # Responsibilities
//! - Extract the target-indicator parameter from the inbound query string
//! - Reject requests without a non-empty indicator (never a default host)
//! - Preserve an explicit `http://` / `https://` prefix; default to https
//! - Carry the inbound path, remaining query pairs, and fragment unchanged
//!
//! # Design Decisions
//! - No DNS or reachability checks here; a bad host fails in the forwarder
//! - Surviving query pairs keep their inbound order, so resolution is
//!   deterministic for a given input URL

use url::Url;

use super::error::{ProxyError, ProxyResult};

/// Resolve the outbound URL for an inbound request URL.
///
/// The indicator value selects scheme and authority; path, fragment, and
/// every query pair other than the indicator itself come from `inbound`.
pub fn resolve_origin(inbound: &Url, target_param: &str) -> ProxyResult<Url> {
    let mut indicator: Option<String> = None;
    let mut remaining: Vec<(String, String)> = Vec::new();

    for (key, value) in inbound.query_pairs() {
        if key == target_param {
            // First occurrence wins if the parameter is repeated.
            if indicator.is_none() {
                indicator = Some(value.into_owned());
            }
        } else {
            remaining.push((key.into_owned(), value.into_owned()));
        }
    }

    let indicator = match indicator {
        Some(value) if !value.is_empty() => value,
        _ => {
            return Err(ProxyError::MissingTargetIndicator {
                param: target_param.to_string(),
                path: inbound.path().to_string(),
            })
        }
    };

    let origin = if has_explicit_scheme(&indicator) {
        indicator
    } else {
        format!("https://{indicator}")
    };

    let mut resolved = Url::parse(&origin)
        .map_err(|e| ProxyError::Unclassified(format!("Invalid target origin '{origin}': {e}")))?;

    // Any path/query carried inside the indicator itself is discarded; the
    // inbound request's components take their place.
    resolved.set_path(inbound.path());
    resolved.set_query(None);
    if !remaining.is_empty() {
        resolved
            .query_pairs_mut()
            .extend_pairs(remaining.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
    resolved.set_fragment(inbound.fragment());

    Ok(resolved)
}

/// True when the indicator already names its scheme, case-insensitively.
fn has_explicit_scheme(indicator: &str) -> bool {
    let lower = indicator.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
