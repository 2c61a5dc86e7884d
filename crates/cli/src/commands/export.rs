//! Export command: renders the full toolchain document.
//!
//! The document contains signing keys and the explorer API key in clear text;
//! it is the hand-off format for the external compile/deploy/verify tools.

use anyhow::{Context, Result};
use contract_build_config::BuildConfiguration;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::args::ExportFormat;
use crate::output::write_to_file;

pub fn run(
    config: &BuildConfiguration,
    format: ExportFormat,
    output_file: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let rendered = render(config, format)?;

    match output_file {
        Some(path) => {
            write_to_file(&rendered, path)?;
            info!(path = %path.display(), ?format, "toolchain document written");
        }
        None => write!(out, "{rendered}")?,
    }
    Ok(())
}

fn render(config: &BuildConfiguration, format: ExportFormat) -> Result<String> {
    let mut rendered = match format {
        ExportFormat::Json => serde_json::to_string_pretty(
            &config
                .to_toolchain_json()
                .context("Failed to render JSON document")?,
        )?,
        ExportFormat::Toml => config
            .to_toolchain_toml()
            .context("Failed to render TOML document")?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}
