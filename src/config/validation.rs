//! Configuration validation.
//!
//! Serde handles syntactic checks; this module covers the semantic ones.
//! All errors are collected and reported together, not just the first.

use axum::http::header::HeaderName;

use crate::config::schema::ProxyConfig;

/// A single semantic configuration problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate a configuration before it is accepted into the system.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.forwarding.target_param.is_empty() {
        errors.push(ValidationError(
            "forwarding.target_param must not be empty".to_string(),
        ));
    }

    for name in &config.forwarding.forbidden_headers {
        if name.parse::<HeaderName>().is_err() {
            errors.push(ValidationError(format!(
                "forwarding.forbidden_headers: '{}' is not a valid header name",
                name
            )));
        }
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError(
            "timeouts.connect_secs must be greater than zero".to_string(),
        ));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError(
            "timeouts.request_secs must be greater than zero".to_string(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
