//! Configuration validation.
//!
//! Serde handles syntax; this module checks the values make sense together.
//! All problems are collected so an operator sees every mistake at once.

use std::net::SocketAddr;

use axum::http::uri::Authority;
use regex::Regex;
use thiserror::Error;

use crate::config::schema::GatewayConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    BindAddress(String),

    #[error("listener.max_concurrent_requests must be greater than zero")]
    ZeroConcurrentRequests,

    #[error("upstream.address {0:?} is not a host:port authority")]
    UpstreamAddress(String),

    #[error("rewrite.path_pattern {pattern:?} does not compile: {reason}")]
    Pattern { pattern: String, reason: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("observability.metrics_address {0:?} is not a socket address")]
    MetricsAddress(String),
}

/// Validate a parsed configuration, returning every error found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }
    if config.listener.max_concurrent_requests == 0 {
        errors.push(ValidationError::ZeroConcurrentRequests);
    }
    if config.upstream.address.parse::<Authority>().is_err() {
        errors.push(ValidationError::UpstreamAddress(config.upstream.address.clone()));
    }

    if let Some(pattern) = &config.rewrite.path_pattern {
        if let Err(e) = Regex::new(pattern) {
            errors.push(ValidationError::Pattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            });
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&GatewayConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.listener.max_concurrent_requests = 0;
        config.rewrite.path_pattern = Some("[".into());
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::ZeroConcurrentRequests));
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::Pattern { pattern, .. } if pattern == "[")));
    }

    #[test]
    fn test_any_matcher_set_is_accepted() {
        let mut config = GatewayConfig::default();
        config.rewrite.path_prefixes.clear();
        config.rewrite.path_pattern = Some(r"^/v1/[^/]+/ocsp".into());
        assert_eq!(validate_config(&config), Ok(()));

        // Nothing to match: every request passes through.
        config.rewrite.path_pattern = None;
        assert_eq!(validate_config(&config), Ok(()));

        config.rewrite.path_prefixes = vec!["ocsp".into(), String::new()];
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = GatewayConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::MetricsAddress("nowhere".into())])
        );
    }
}
