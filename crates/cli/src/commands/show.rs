//! Show command: prints the configuration with secrets redacted.

use anyhow::Result;
use contract_build_config::BuildConfiguration;
use std::io::Write;

use crate::args::ShowFormat;
use crate::output::format_summary_table;

pub fn run(config: &BuildConfiguration, format: ShowFormat, out: &mut impl Write) -> Result<()> {
    let summary = config.summary();
    match format {
        ShowFormat::Table => write!(out, "{}", format_summary_table(&summary))?,
        ShowFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?,
    }
    Ok(())
}
