//! Output helpers shared by commands.
//!
//! Responsibilities:
//! - Render the redacted configuration summary as an aligned table.
//! - Write documents to disk atomically.
//!
//! Invariants:
//! - Table output is built from `ConfigSummary`, so it cannot contain secrets.
//! - File writes go through a temp file in the target directory and a rename.

use anyhow::{Context, Result};
use contract_build_config::ConfigSummary;
use std::fmt::Write as _;
use std::path::Path;

/// Format a configuration summary as `key: value` rows.
pub fn format_summary_table(summary: &ConfigSummary) -> String {
    let mut rows: Vec<(String, String)> = vec![
        ("Profile".into(), summary.profile.to_string()),
        ("Compiler".into(), summary.compiler_version.clone()),
        (
            "Optimizer".into(),
            if summary.optimizer.enabled {
                "enabled".into()
            } else {
                "disabled".into()
            },
        ),
        ("Optimizer runs".into(), summary.optimizer.runs.to_string()),
        (
            "Yul details".into(),
            summary.optimizer.yul_details.to_string(),
        ),
    ];
    for network in &summary.networks {
        rows.push((format!("Network {}", network.name), network.url.clone()));
        rows.push((
            format!("Network {} accounts", network.name),
            network.account_count.to_string(),
        ));
    }
    rows.push(("Explorer API key".into(), summary.explorer_api_key.clone()));

    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (key, value) in rows {
        let _ = writeln!(out, "{key:<width$}  {value}");
    }
    out
}

/// Write content to a file atomically.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    use std::fs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // If path has no parent (e.g., just "build.json"), use current directory
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if parent_dir != Path::new(".") {
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;
    }

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contract_build_config::{BuildProfile, NetworkSummary};

    fn summary() -> ConfigSummary {
        ConfigSummary {
            profile: BuildProfile::Production,
            compiler_version: "0.8.17".to_string(),
            optimizer: BuildProfile::Production.optimizer(),
            networks: vec![NetworkSummary {
                name: "mumbai".to_string(),
                url: "https://rpc.example".to_string(),
                account_count: 2,
            }],
            explorer_api_key: "<set>".to_string(),
        }
    }

    #[test]
    fn test_summary_table_rows() {
        let table = format_summary_table(&summary());
        assert!(table.contains("production"));
        assert!(table.contains("enabled"));
        assert!(table.contains("40000"));
        assert!(table.contains("https://rpc.example"));
        assert!(table.contains("<set>"));
        assert_eq!(table.lines().count(), 8);
    }

    #[test]
    fn test_write_to_file_creates_parent_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested/out/build.json");

        write_to_file("{}", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }
}
