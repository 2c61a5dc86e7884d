//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges literal compiler
//!   settings with environment-sourced secrets.
//! - Build the final immutable `BuildConfiguration`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Value validation rules (delegated to validate.rs).
//!
//! Invariants / Assumptions:
//! - Compiler version and optimizer settings come only from profile literals.
//! - Endpoint URL, signing keys, and explorer API key come only from the environment.
//! - `build()` reports every missing variable at once and never returns a partial value.
//! - Missing variables are reported before any invalid value, including `BUILD_PROFILE`.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::env::{EnvSource, apply_env, env_var_or_none};
use super::error::ConfigError;
use super::validate::{validate_compiler_version, validate_optimizer, validate_rpc_url};
use crate::constants::{
    COMPILER_VERSION, DEFAULT_NETWORK_NAME, ENV_BUILD_PROFILE, ENV_DOTENV_DISABLED,
    REQUIRED_ENV_VARS,
};
use crate::types::{BuildConfiguration, BuildProfile, NetworkConfig};

/// Configuration loader that builds config from profile literals and environment variables.
#[derive(Default)]
pub struct ConfigLoader {
    profile: Option<BuildProfile>,
    profile_name: Option<String>,
    network_name: Option<String>,
    rpc_url: Option<String>,
    signing_keys: Option<Vec<SecretString>>,
    explorer_api_key: Option<SecretString>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            env_var_or_none(ENV_DOTENV_DISABLED).as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            debug!("dotenv loading disabled");
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Select the build profile. Takes precedence over `BUILD_PROFILE`.
    pub fn with_profile(mut self, profile: BuildProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Set the name under which the network entry is produced.
    ///
    /// The name is trimmed; a blank name leaves the default in place.
    pub fn with_network_name(mut self, name: impl AsRef<str>) -> Self {
        let name = name.as_ref().trim();
        if !name.is_empty() {
            self.network_name = Some(name.to_string());
        }
        self
    }

    /// Read configuration from an environment snapshot.
    pub fn from_env<E: EnvSource + ?Sized>(mut self, env: &E) -> Result<Self, ConfigError> {
        apply_env(&mut self, env)?;
        Ok(self)
    }

    /// Build the final configuration.
    ///
    /// Fails with `ConfigError::MissingEnvVars` naming every required variable
    /// that was absent or blank.
    pub fn build(self) -> Result<BuildConfiguration, ConfigError> {
        // Same order as REQUIRED_ENV_VARS
        let absent = [
            self.rpc_url.is_none(),
            self.signing_keys.is_none(),
            self.explorer_api_key.is_none(),
        ];
        let missing: Vec<String> = REQUIRED_ENV_VARS
            .iter()
            .zip(absent)
            .filter(|(_, absent)| *absent)
            .map(|(var, _)| var.to_string())
            .collect();

        let (Some(rpc_url), Some(signing_keys), Some(explorer_api_key)) =
            (self.rpc_url, self.signing_keys, self.explorer_api_key)
        else {
            return Err(ConfigError::MissingEnvVars(missing));
        };

        validate_rpc_url(&rpc_url)?;

        let profile = match (self.profile, self.profile_name.as_deref()) {
            (Some(profile), _) => profile,
            (None, Some(name)) => {
                let profile: BuildProfile = name.parse()?;
                debug!(%profile, "build profile selected from {}", ENV_BUILD_PROFILE);
                profile
            }
            (None, None) => BuildProfile::default(),
        };
        let optimizer = profile.optimizer();
        validate_optimizer(&optimizer)?;
        validate_compiler_version(COMPILER_VERSION)?;

        let network_name = self
            .network_name
            .unwrap_or_else(|| DEFAULT_NETWORK_NAME.to_string());
        let account_count = signing_keys.len();

        let mut networks = BTreeMap::new();
        networks.insert(
            network_name.clone(),
            NetworkConfig::new(rpc_url, signing_keys),
        );

        info!(
            %profile,
            network = %network_name,
            accounts = account_count,
            optimizer_enabled = optimizer.enabled,
            optimizer_runs = optimizer.runs,
            "build configuration loaded"
        );

        Ok(BuildConfiguration::new(
            profile,
            COMPILER_VERSION.to_string(),
            optimizer,
            networks,
            explorer_api_key,
        ))
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn set_profile_name(&mut self, name: Option<String>) {
        self.profile_name = name;
    }

    pub(crate) fn set_rpc_url(&mut self, url: Option<String>) {
        self.rpc_url = url;
    }

    pub(crate) fn set_signing_keys(&mut self, keys: Option<Vec<SecretString>>) {
        self.signing_keys = keys;
    }

    pub(crate) fn set_explorer_api_key(&mut self, key: Option<SecretString>) {
        self.explorer_api_key = key;
    }
}
