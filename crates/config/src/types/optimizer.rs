//! Optimizer settings passed through to the compiler.

use serde::Serialize;

/// Compiler optimizer configuration.
///
/// `runs` is kept even when the optimizer is disabled; the compiler simply
/// ignores it in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OptimizerSettings {
    /// Whether the optimizer pass is enabled.
    pub enabled: bool,
    /// Expected number of executions per deployed opcode.
    pub runs: u32,
    /// Whether the Yul intermediate-representation optimizer runs.
    pub yul_details: bool,
}

impl OptimizerSettings {
    pub const fn new(enabled: bool, runs: u32, yul_details: bool) -> Self {
        Self {
            enabled,
            runs,
            yul_details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_optimizer_keeps_runs() {
        let settings = OptimizerSettings::new(false, 500, false);
        assert!(!settings.enabled);
        assert_eq!(settings.runs, 500);
    }
}
