//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use contract_build_config::BuildConfiguration;
use std::io::Write;

use crate::args::Commands;
use crate::commands;

/// Dispatch a command against the loaded configuration, writing to `out`.
pub(crate) fn run_command(
    command: Commands,
    config: &BuildConfiguration,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Commands::Check => commands::check::run(config, out),
        Commands::Show { format } => commands::show::run(config, format, out),
        Commands::Export {
            format,
            output_file,
        } => commands::export::run(config, format, output_file.as_deref(), out),
    }
}
