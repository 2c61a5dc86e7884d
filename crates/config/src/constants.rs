//! Centralized constants for the contract-build workspace.
//!
//! Literal compiler settings live here so that both build profiles and the
//! loader read them from one place.

// =============================================================================
// Compiler Literals
// =============================================================================

/// Exact compiler release handed to the external toolchain.
pub const COMPILER_VERSION: &str = "0.8.17";

/// Optimizer run count for the `dev` profile (optimizer disabled).
pub const DEV_OPTIMIZER_RUNS: u32 = 500;

/// Optimizer run count for the `production` profile.
pub const PRODUCTION_OPTIMIZER_RUNS: u32 = 40_000;

// =============================================================================
// Network Defaults
// =============================================================================

/// Name of the single network entry produced by the loader.
pub const DEFAULT_NETWORK_NAME: &str = "mumbai";

/// URL schemes accepted for the network endpoint.
pub const ALLOWED_RPC_SCHEMES: &[&str] = &["http", "https", "ws", "wss"];

/// Separator for multiple signing keys in `PRIVATE_KEY`.
pub const SIGNING_KEY_SEPARATOR: char = ',';

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Network endpoint URL.
pub const ENV_RPC_URL: &str = "TESTNET_RPC";

/// Signing key material.
pub const ENV_PRIVATE_KEY: &str = "PRIVATE_KEY";

/// Block-explorer API credential.
pub const ENV_EXPLORER_API_KEY: &str = "POLYGONSCAN_API_KEY";

/// Optional build profile selector.
pub const ENV_BUILD_PROFILE: &str = "BUILD_PROFILE";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

/// Required variables, in the order they are reported when missing.
pub const REQUIRED_ENV_VARS: [&str; 3] = [ENV_RPC_URL, ENV_PRIVATE_KEY, ENV_EXPLORER_API_KEY];
