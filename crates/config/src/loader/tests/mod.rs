//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test loading from explicit environment snapshots.
//! - Test loading from the process environment and `.env` files.
//! - Test profile selection and load-time validation.
//!
//! Invariants:
//! - Tests touching process-global state use `serial_test` and `env_lock()`.
//! - Snapshot-based tests need no locking.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::collections::BTreeMap;
use std::sync::Mutex;

pub mod profile_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Snapshot with all required variables set to the reference values.
pub fn full_snapshot() -> BTreeMap<String, String> {
    snapshot(&[
        ("TESTNET_RPC", "https://rpc.example"),
        ("PRIVATE_KEY", "0xabc"),
        ("POLYGONSCAN_API_KEY", "key123"),
    ])
}

/// Build a snapshot from string pairs.
pub fn snapshot(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
