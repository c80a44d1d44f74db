//! Generate command implementation.
//!
//! This command:
//! 1. Resolves the generator configuration and applies flag overrides
//! 2. Loads the assembly metadata and discovers endpoints
//! 3. Runs the generation driver
//! 4. Renders PowerShell and writes one file per output unit
//!
//! Per-endpoint and per-type failures do not stop the run. They are listed
//! in the result and turn the exit code into a partial failure.

use anyhow::{Context, Result};
use sdkwrap_codegen::{FileNaming, GenerationDriver, PowerShellEmitter, render_units};
use sdkwrap_core::GeneratorConfig;
use sdkwrap_core::cli::{ExitCode, OutputFormat};
use sdkwrap_files::{ExportOptions, write_generated};
use sdkwrap_introspector::{DiscoveryFilter, Introspector};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Inputs of the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Assembly metadata JSON file
    pub metadata: PathBuf,
    /// Output directory, created if missing
    pub output: PathBuf,
    /// Explicit configuration file
    pub config: Option<PathBuf>,
    /// Overrides `module_prefix`
    pub module_prefix: Option<String>,
    /// Overrides `handle_parameter`
    pub handle_parameter: Option<String>,
    /// Forces a single output file
    pub no_grouping: bool,
    /// Appends instead of replacing
    pub append: bool,
    /// Renders without writing
    pub dry_run: bool,
}

/// A failed endpoint or type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureEntry {
    /// Endpoint (`Client.Method`) or type name
    pub subject: String,
    /// Error message
    pub error: String,
}

/// Result of a generate run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    /// Assembly name
    pub assembly: String,
    /// Endpoints discovered
    pub endpoints: usize,
    /// Constructor functions generated
    pub constructors: usize,
    /// Wrapper functions generated
    pub wrappers: usize,
    /// Files written (or that would be written on a dry run)
    pub files: Vec<String>,
    /// Whether files were written
    pub written: bool,
    /// Endpoints and types that failed
    pub failures: Vec<FailureEntry>,
}

impl GenerationSummary {
    /// Exit code for this outcome.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        if self.failures.is_empty() {
            ExitCode::SUCCESS
        } else {
            ExitCode::PARTIAL_FAILURE
        }
    }
}

/// Resolves configuration from `options`, then applies flag overrides.
///
/// # Errors
///
/// Returns an error if a configuration file cannot be loaded or the
/// overridden configuration is invalid.
pub fn resolve_config(options: &GenerateOptions, working_dir: &Path) -> Result<GeneratorConfig> {
    let mut config = GeneratorConfig::resolve(options.config.as_deref(), working_dir)
        .context("failed to load generator configuration")?;

    if let Some(prefix) = &options.module_prefix {
        config.module_prefix.clone_from(prefix);
    }
    if let Some(handle) = &options.handle_parameter {
        config.handle_parameter.clone_from(handle);
    }
    if options.no_grouping {
        config.group_by_declaring_type = false;
    }
    if options.append {
        config.write_mode = sdkwrap_core::WriteMode::Append;
    }

    config
        .validate()
        .context("invalid configuration after applying command-line overrides")?;
    Ok(config)
}

/// Runs generation without printing.
///
/// # Errors
///
/// Returns an error if configuration, metadata loading, rendering, or
/// writing fails. Endpoint-level failures are reported in the summary.
pub fn generate(options: &GenerateOptions, working_dir: &Path) -> Result<GenerationSummary> {
    let config = resolve_config(options, working_dir)?;

    let introspector = Introspector::from_path(&options.metadata)
        .with_context(|| {
            format!(
                "failed to load assembly metadata from {}",
                options.metadata.display()
            )
        })?
        .with_filter(DiscoveryFilter::from_config(&config));

    let endpoints = introspector.discover_endpoints();
    if endpoints.is_empty() {
        warn!(
            "No endpoints found in assembly '{}'",
            introspector.assembly_name()
        );
    }

    let report = GenerationDriver::from_config(introspector.catalog(), &config).run(&endpoints);
    for failure in &report.failures {
        warn!("Skipped {}: {}", failure.subject, failure.error);
    }

    let emitter = PowerShellEmitter::new().context("failed to initialize PowerShell emitter")?;
    let code = render_units(&emitter, &report, &FileNaming::from_config(&config))
        .context("failed to render generated functions")?;

    let files = if options.dry_run {
        info!("Dry run: {} files not written", code.file_count());
        code.files().map(|f| f.path.clone()).collect()
    } else {
        fs::create_dir_all(&options.output).with_context(|| {
            format!(
                "failed to create output directory {}",
                options.output.display()
            )
        })?;
        write_generated(&code, &options.output, &ExportOptions::from_config(&config))
            .context("failed to write generated files")?
            .into_iter()
            .map(|p| p.display().to_string())
            .collect()
    };

    Ok(GenerationSummary {
        assembly: introspector.assembly_name().to_string(),
        endpoints: endpoints.len(),
        constructors: report.constructor_count(),
        wrappers: report.wrapper_count(),
        files,
        written: !options.dry_run,
        failures: report
            .failures
            .iter()
            .map(|f| FailureEntry {
                subject: f.subject.clone(),
                error: f.error.to_string(),
            })
            .collect(),
    })
}

/// Runs the generate command.
///
/// # Errors
///
/// Returns an error if generation fails as a whole or output cannot be
/// formatted.
pub fn run(options: &GenerateOptions, output_format: OutputFormat) -> Result<ExitCode> {
    let working_dir = std::env::current_dir().context("failed to read working directory")?;
    info!("Generating wrappers from {}", options.metadata.display());

    let summary = generate(options, &working_dir)?;

    let formatted = crate::formatters::format_output(&summary, output_format)?;
    println!("{formatted}");

    info!(
        "Generated {} constructors and {} wrappers into {} files",
        summary.constructors,
        summary.wrappers,
        summary.files.len()
    );
    Ok(summary.exit_code())
}
