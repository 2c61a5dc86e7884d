//! Configuration type definitions for contract builds.
//!
//! Responsibilities:
//! - Define the immutable `BuildConfiguration` handed to the external toolchain.
//! - Define optimizer settings, network entries, and named build profiles.
//!
//! Does NOT handle:
//! - Configuration loading from the environment (see `loader` module).
//! - Rendering to toolchain documents (see `render` module).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - Built values expose read-only accessors; there are no setters.

mod build;
mod network;
mod optimizer;
mod profile;

pub use build::BuildConfiguration;
pub use network::NetworkConfig;
pub use optimizer::OptimizerSettings;
pub use profile::BuildProfile;
