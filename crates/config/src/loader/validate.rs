//! Load-time validation of configuration values.
//!
//! Invariants:
//! - Validators never alter the value they check.
//! - Error messages name the offending variable but never echo secrets.

use super::error::ConfigError;
use crate::constants::{ALLOWED_RPC_SCHEMES, ENV_RPC_URL};
use crate::types::OptimizerSettings;

/// Validates the network endpoint URL.
///
/// Validation rules:
/// - Parse as an absolute URL
/// - Require scheme is http, https, ws or wss
/// - Require host is present
pub(crate) fn validate_rpc_url(raw: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        var: ENV_RPC_URL.into(),
        message: format!(
            "must be an absolute URL with a host (e.g. https://rpc-mumbai.maticvigil.com): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if !ALLOWED_RPC_SCHEMES.contains(&scheme) {
        return Err(ConfigError::InvalidValue {
            var: ENV_RPC_URL.into(),
            message: format!(
                "scheme must be one of {}, got: {scheme}",
                ALLOWED_RPC_SCHEMES.join(", ")
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: ENV_RPC_URL.into(),
            message: "host is required".into(),
        });
    }

    Ok(())
}

/// Checks that a compiler version is a plain `MAJOR.MINOR.PATCH` triple.
pub(crate) fn validate_compiler_version(version: &str) -> Result<(), ConfigError> {
    let parts: Vec<&str> = version.split('.').collect();
    let well_formed = parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()));

    if well_formed {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            var: "compiler_version".into(),
            message: format!("expected MAJOR.MINOR.PATCH, got: {version}"),
        })
    }
}

/// Checks optimizer literals. `runs` must be positive whether or not the
/// optimizer is enabled.
pub(crate) fn validate_optimizer(settings: &OptimizerSettings) -> Result<(), ConfigError> {
    if settings.runs == 0 {
        return Err(ConfigError::InvalidValue {
            var: "optimizer.runs".into(),
            message: "must be greater than 0".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_url_accepts_http_and_ws_schemes() {
        for url in [
            "https://rpc.example",
            "http://localhost:8545",
            "wss://polygon-mumbai.example/ws/v3/abc",
            "ws://127.0.0.1:8546",
        ] {
            assert!(validate_rpc_url(url).is_ok(), "{url} should be accepted");
        }
    }

    #[test]
    fn test_rpc_url_rejects_relative_and_unknown_scheme() {
        for url in ["rpc.example", "ftp://rpc.example", "not a url"] {
            match validate_rpc_url(url) {
                Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "TESTNET_RPC"),
                other => panic!("{url} should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_compiler_version_shape() {
        assert!(validate_compiler_version("0.8.17").is_ok());
        assert!(validate_compiler_version("0.8").is_err());
        assert!(validate_compiler_version("0.8.x").is_err());
        assert!(validate_compiler_version("v0.8.17").is_err());
    }

    #[test]
    fn test_optimizer_runs_must_be_positive_even_when_disabled() {
        assert!(validate_optimizer(&OptimizerSettings::new(false, 500, false)).is_ok());
        assert!(validate_optimizer(&OptimizerSettings::new(true, 40_000, false)).is_ok());
        assert!(validate_optimizer(&OptimizerSettings::new(false, 0, false)).is_err());
    }
}
