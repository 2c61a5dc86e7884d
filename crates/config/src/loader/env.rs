//! Environment variable access for configuration.
//!
//! Responsibilities:
//! - Abstract environment lookups behind `EnvSource` so loading can run
//!   against the process environment or an explicit snapshot.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final configuration (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - `BUILD_PROFILE` is stored raw; it is parsed by `ConfigLoader::build()`.

use secrecy::SecretString;
use std::collections::{BTreeMap, HashMap};

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_BUILD_PROFILE, ENV_EXPLORER_API_KEY, ENV_PRIVATE_KEY, ENV_RPC_URL, SIGNING_KEY_SEPARATOR,
};

/// A source of environment variables.
///
/// Implemented for the live process environment and for plain string maps,
/// which lets tests and embedders supply a synthetic snapshot.
pub trait EnvSource {
    /// Raw value of `key`, or `None` if unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<S: std::hash::BuildHasher> EnvSource for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Read `key` from `env`, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn var_or_none<E: EnvSource + ?Sized>(env: &E, key: &str) -> Option<String> {
    env.var(key).and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read a process environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    var_or_none(&ProcessEnv, key)
}

/// Split `PRIVATE_KEY` into individual signing keys.
///
/// Segments are trimmed and empty segments dropped, so `"0xa, 0xb,"` yields two keys.
pub fn split_signing_keys(raw: &str) -> Vec<SecretString> {
    raw.split(SIGNING_KEY_SEPARATOR)
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(|key| SecretString::new(key.to_string().into()))
        .collect()
}

/// Apply environment variable configuration to the loader.
pub fn apply_env<E: EnvSource + ?Sized>(
    loader: &mut ConfigLoader,
    env: &E,
) -> Result<(), ConfigError> {
    if let Some(url) = var_or_none(env, ENV_RPC_URL) {
        loader.set_rpc_url(Some(url));
    }
    if let Some(raw_keys) = var_or_none(env, ENV_PRIVATE_KEY) {
        let keys = split_signing_keys(&raw_keys);
        if !keys.is_empty() {
            loader.set_signing_keys(Some(keys));
        }
    }
    if let Some(api_key) = var_or_none(env, ENV_EXPLORER_API_KEY) {
        loader.set_explorer_api_key(Some(SecretString::new(api_key.into())));
    }

    // Parsed in build() so missing variables are reported first
    if let Some(profile) = var_or_none(env, ENV_BUILD_PROFILE) {
        loader.set_profile_name(Some(profile));
    }

    Ok(())
}
