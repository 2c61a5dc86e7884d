//! Named build profiles.
//!
//! Responsibilities:
//! - Map a profile name to its literal optimizer settings.
//! - Parse profile names from environment values and CLI flags.
//!
//! Does NOT handle:
//! - Selecting the active profile (see `loader` module).
//!
//! Invariants:
//! - `dev` is the default profile.
//! - Profile names are matched case-insensitively after trimming.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEV_OPTIMIZER_RUNS, ENV_BUILD_PROFILE, PRODUCTION_OPTIMIZER_RUNS};
use crate::loader::ConfigError;
use crate::types::OptimizerSettings;

/// A named set of literal compiler settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildProfile {
    /// Fast iteration: optimizer off.
    #[default]
    Dev,
    /// Deployment builds: optimizer on with a high run count.
    Production,
}

impl BuildProfile {
    /// All known profiles, in display order.
    pub const ALL: [BuildProfile; 2] = [BuildProfile::Dev, BuildProfile::Production];

    /// Canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Production => "production",
        }
    }

    /// Literal optimizer settings for this profile.
    pub const fn optimizer(self) -> OptimizerSettings {
        match self {
            Self::Dev => OptimizerSettings::new(false, DEV_OPTIMIZER_RUNS, false),
            Self::Production => OptimizerSettings::new(true, PRODUCTION_OPTIMIZER_RUNS, false),
        }
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildProfile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Self::Dev),
            "production" | "prod" => Ok(Self::Production),
            other => {
                let known: Vec<&str> = Self::ALL.iter().map(|p| p.as_str()).collect();
                Err(ConfigError::InvalidValue {
                    var: ENV_BUILD_PROFILE.to_string(),
                    message: format!(
                        "unknown profile '{other}', expected one of: {}",
                        known.join(", ")
                    ),
                })
            }
        }
    }
}
