//! Network endpoint definitions.
//!
//! Responsibilities:
//! - Hold the endpoint URL and signing keys for one named network.
//!
//! Does NOT handle:
//! - Validating key material (left to the external deploy tool).
//!
//! Invariants:
//! - Signing keys are `SecretString`s and never appear in `Debug` output.
//! - Key order is preserved exactly as read.

use secrecy::{ExposeSecret, SecretString};

/// Endpoint and signing accounts for a single network.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    url: String,
    accounts: Vec<SecretString>,
}

impl NetworkConfig {
    pub fn new(url: String, accounts: Vec<SecretString>) -> Self {
        Self { url, accounts }
    }

    /// Endpoint URL as provided (trimmed, otherwise unaltered).
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Signing keys in the order they were supplied.
    pub fn accounts(&self) -> &[SecretString] {
        &self.accounts
    }
}

impl PartialEq for NetworkConfig {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
            && self.accounts.len() == other.accounts.len()
            && self
                .accounts
                .iter()
                .zip(&other.accounts)
                .all(|(a, b)| a.expose_secret() == b.expose_secret())
    }
}

impl Eq for NetworkConfig {}
