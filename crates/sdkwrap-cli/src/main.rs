//! sdkwrap CLI.
//!
//! Generates PowerShell wrapper functions for every endpoint of a compiled
//! API client, from a JSON dump of the client assembly's metadata.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `generate` - Write wrapper and constructor functions to disk
//! - `inspect` - Show the clients and endpoints generation would use
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Generate one file per client type
//! sdkwrap generate NetBoxSdk.metadata.json --output ./Generated
//!
//! # Preview endpoints and function names
//! sdkwrap --format json inspect NetBoxSdk.metadata.json --detailed
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use sdkwrap_cli::commands;
use sdkwrap_cli::commands::generate::GenerateOptions;
use sdkwrap_core::cli::{ExitCode, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// sdkwrap - PowerShell wrappers for compiled API clients.
#[derive(Parser, Debug)]
#[command(name = "sdkwrap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate wrapper functions from assembly metadata.
    ///
    /// Writes one `<prefix>.<Client>.Generated.ps1` file per client type,
    /// or a single `<prefix>.Generated.ps1` with `--no-grouping`.
    ///
    /// Exits with code 3 if some endpoints or types could not be generated.
    Generate {
        /// Assembly metadata JSON file
        metadata: PathBuf,

        /// Output directory (created if missing)
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Configuration file (default: ./sdkwrap.toml if present)
        #[arg(short, long, env = "SDKWRAP_CONFIG")]
        config: Option<PathBuf>,

        /// Prefix of generated file names
        #[arg(long)]
        module_prefix: Option<String>,

        /// Name of the client-handle parameter
        #[arg(long)]
        handle_parameter: Option<String>,

        /// Write a single file instead of one per client type
        #[arg(long)]
        no_grouping: bool,

        /// Append to existing files instead of replacing them
        #[arg(long)]
        append: bool,

        /// Render without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Inspect assembly metadata.
    ///
    /// Lists client types and the endpoint methods that generation would
    /// wrap.
    Inspect {
        /// Assembly metadata JSON file
        metadata: PathBuf,

        /// Configuration file (default: ./sdkwrap.toml if present)
        #[arg(short, long, env = "SDKWRAP_CONFIG")]
        config: Option<PathBuf>,

        /// List every endpoint with its generated function name
        #[arg(short, long)]
        detailed: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(ExitCode::ERROR.as_i32());
    }

    let output_format = match cli.format.parse::<OutputFormat>() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            std::process::exit(ExitCode::INVALID_INPUT.as_i32());
        }
    };

    let exit_code = match execute_command(cli.command, output_format) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::ERROR
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Initializes logging to stderr.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` applies, falling
/// back to info.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Routes a parsed command to its handler.
fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            metadata,
            output,
            config,
            module_prefix,
            handle_parameter,
            no_grouping,
            append,
            dry_run,
        } => {
            let options = GenerateOptions {
                metadata,
                output,
                config,
                module_prefix,
                handle_parameter,
                no_grouping,
                append,
                dry_run,
            };
            commands::generate::run(&options, output_format)
        }
        Commands::Inspect {
            metadata,
            config,
            detailed,
        } => commands::inspect::run(&metadata, config.as_deref(), detailed, output_format),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    }
}
