//! Shared test utilities for contract-build integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Required variables are set to the reference values unless overridden.

use assert_cmd::Command;

/// Variables the loader reads; cleared to avoid host leakage.
pub const LOADER_VARS: [&str; 4] = [
    "TESTNET_RPC",
    "PRIVATE_KEY",
    "POLYGONSCAN_API_KEY",
    "BUILD_PROFILE",
];

/// Returns a hermetic `contract-build` command with no loader variables set.
pub fn bare_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("contract-build");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("RUST_LOG");

    for var in LOADER_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// Returns a hermetic `contract-build` command with the reference environment.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `TESTNET_RPC`, `PRIVATE_KEY`, `POLYGONSCAN_API_KEY` hold reference values.
pub fn build_cmd() -> Command {
    let mut cmd = bare_cmd();
    cmd.env("TESTNET_RPC", "https://rpc.example")
        .env("PRIVATE_KEY", "0xabc")
        .env("POLYGONSCAN_API_KEY", "key123");
    cmd
}
