//! The build configuration consumed by the external toolchain.
//!
//! Responsibilities:
//! - Hold the fully populated, immutable result of a configuration load.
//!
//! Does NOT handle:
//! - Reading the environment (see `loader` module).
//! - Rendering documents (see `render` module).
//!
//! Invariants:
//! - Exactly the fields produced by the loader; nothing is mutated after build.
//! - `Debug` output never contains signing keys or the explorer API key.

use secrecy::{ExposeSecret, SecretString};
use std::collections::BTreeMap;

use crate::types::{BuildProfile, NetworkConfig, OptimizerSettings};

/// Compiler, network and explorer settings for one process run.
#[derive(Debug, Clone)]
pub struct BuildConfiguration {
    profile: BuildProfile,
    compiler_version: String,
    optimizer: OptimizerSettings,
    networks: BTreeMap<String, NetworkConfig>,
    explorer_api_key: SecretString,
}

impl BuildConfiguration {
    pub(crate) fn new(
        profile: BuildProfile,
        compiler_version: String,
        optimizer: OptimizerSettings,
        networks: BTreeMap<String, NetworkConfig>,
        explorer_api_key: SecretString,
    ) -> Self {
        Self {
            profile,
            compiler_version,
            optimizer,
            networks,
            explorer_api_key,
        }
    }

    /// Profile the compiler literals were taken from.
    pub fn profile(&self) -> BuildProfile {
        self.profile
    }

    pub fn compiler_version(&self) -> &str {
        &self.compiler_version
    }

    pub fn optimizer(&self) -> &OptimizerSettings {
        &self.optimizer
    }

    /// All configured networks keyed by name.
    pub fn networks(&self) -> &BTreeMap<String, NetworkConfig> {
        &self.networks
    }

    /// Look up a single network by name.
    pub fn network(&self, name: &str) -> Option<&NetworkConfig> {
        self.networks.get(name)
    }

    pub fn explorer_api_key(&self) -> &SecretString {
        &self.explorer_api_key
    }
}

impl PartialEq for BuildConfiguration {
    fn eq(&self, other: &Self) -> bool {
        self.profile == other.profile
            && self.compiler_version == other.compiler_version
            && self.optimizer == other.optimizer
            && self.networks == other.networks
            && self.explorer_api_key.expose_secret() == other.explorer_api_key.expose_secret()
    }
}

impl Eq for BuildConfiguration {}
