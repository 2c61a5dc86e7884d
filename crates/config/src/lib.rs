//! Build configuration for a smart-contract toolchain.
//!
//! This crate loads the compiler pin, optimizer settings, network endpoint,
//! and explorer credentials from literal profiles and environment variables,
//! producing one immutable `BuildConfiguration`.

pub mod constants;
mod loader;
pub mod render;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, EnvSource, ProcessEnv, env_var_or_none, load, split_signing_keys,
    var_or_none,
};
pub use render::{ConfigSummary, NetworkSummary};
pub use types::{BuildConfiguration, BuildProfile, NetworkConfig, OptimizerSettings};
