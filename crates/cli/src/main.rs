//! contract-build - loads smart-contract build configuration for an external toolchain.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Load the build configuration once, from `.env` and the process environment.
//! - Hand the configuration to a command that checks, shows, or exports it.
//!
//! Does NOT handle:
//! - Compiling, deploying, or verifying contracts (external toolchain).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing and before reading the environment.
//! - Configuration errors terminate the process with a structured non-zero exit code.
//! - Logs go to stderr so exported documents on stdout stay clean.

mod args;
mod commands;
mod dispatch;
mod error;
mod output;

use anyhow::{Context, Result};
use args::{Cli, LogFormat};
use clap::Parser;
use contract_build_config::{BuildConfiguration, BuildProfile, ConfigLoader, ProcessEnv};
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so every later read sees its values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    init_logging(cli.log_format);

    let config = match load_config(&cli).context("Failed to load configuration") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(e.exit_code().as_i32());
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run_command(cli.command, &config, &mut out) {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}

fn init_logging(format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

/// Build the loader from CLI overrides, then read the process environment.
///
/// Blank `--profile`/`--network` values are ignored so the environment or
/// defaults apply.
fn load_config(cli: &Cli) -> Result<BuildConfiguration> {
    let mut loader = ConfigLoader::new();

    if let Some(profile) = cli.profile.as_deref().filter(|p| !p.trim().is_empty()) {
        loader = loader.with_profile(profile.parse::<BuildProfile>()?);
    }
    if let Some(name) = &cli.network {
        loader = loader.with_network_name(name);
    }

    Ok(loader.from_env(&ProcessEnv)?.build()?)
}
