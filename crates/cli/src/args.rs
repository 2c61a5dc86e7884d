//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read `BUILD_PROFILE` or secrets; the config loader does.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contract-build")]
#[command(
    about = "Load and export smart-contract build configuration from the environment",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  contract-build check\n  contract-build --profile production show\n  contract-build export --format toml --output-file build.toml\n"
)]
pub struct Cli {
    /// Build profile (dev, production). Overrides BUILD_PROFILE.
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Name of the produced network entry
    #[arg(long, global = true, value_name = "NAME")]
    pub network: Option<String>,

    /// Log output format (written to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify that every required variable is present and valid
    Check,

    /// Print the loaded configuration with secrets redacted
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Table)]
        format: ShowFormat,
    },

    /// Print or write the full toolchain document (includes secrets)
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output_file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Toml,
}
