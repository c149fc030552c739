//! # brdoc CLI entry point
//!
//! Parses command-line arguments, loads the optional config file, and
//! dispatches to subcommand handlers. Handler failures exit with the usage
//! status.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use brdoc_cli::batch::{run_batch, BatchArgs};
use brdoc_cli::check::{run_cnpj, run_cpf, CnpjArgs, CpfArgs};
use brdoc_cli::config::{CliConfig, OutputFormat, Settings};
use brdoc_cli::exit_code;

/// Brazilian identifier validator
///
/// Checks CPF and CNPJ numbers: length, digit class, repeated digits, the
/// two mod-11 check digits, the CPF issuing region and the CNPJ branch.
#[derive(Parser, Debug)]
#[command(name = "brdoc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format. Overrides the config file.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a CPF, optionally against the issuing state.
    Cpf(CpfArgs),

    /// Validate a CNPJ.
    Cnpj(CnpjArgs),

    /// Validate a file of candidates, one per line.
    Batch(BatchArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "brdoc starting");

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(exit_code::USAGE)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = CliConfig::load_optional(cli.config.as_deref())?;
    let settings = Settings::resolve(config, cli.format);

    match &cli.command {
        Commands::Cpf(args) => run_cpf(args, &settings),
        Commands::Cnpj(args) => run_cnpj(args, &settings),
        Commands::Batch(args) => run_batch(args, &settings),
    }
}
