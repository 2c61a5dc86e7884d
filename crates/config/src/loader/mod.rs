//! Configuration loader for environment variables.
//!
//! Responsibilities:
//! - Load configuration from `.env` files and an environment snapshot.
//! - Provide a builder-pattern `ConfigLoader` merging literals with environment values.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Compiling, deploying, or verifying contracts (external toolchain).
//! - Rendering the loaded configuration (see `render` module).
//!
//! Invariants / Assumptions:
//! - Secrets are read from the environment only, never from literals.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;
mod validate;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::{EnvSource, ProcessEnv, env_var_or_none, split_signing_keys, var_or_none};
pub use error::ConfigError;

use crate::types::BuildConfiguration;

/// Load a `BuildConfiguration` from an environment snapshot.
///
/// Equivalent to `ConfigLoader::new().from_env(env)?.build()`. The profile is
/// taken from `BUILD_PROFILE` when present, otherwise `dev`.
pub fn load<E: EnvSource + ?Sized>(env: &E) -> Result<BuildConfiguration, ConfigError> {
    ConfigLoader::new().from_env(env)?.build()
}
