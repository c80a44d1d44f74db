//! Inspect command implementation.
//!
//! Loads assembly metadata and shows which client types and endpoint
//! methods generation would pick up, without generating anything.

use anyhow::{Context, Result};
use sdkwrap_codegen::{DescriptorBuilder, select_endpoint_noun, select_verb};
use sdkwrap_core::{EndpointDescriptor, GeneratorConfig};
use sdkwrap_core::cli::{ExitCode, OutputFormat};
use sdkwrap_introspector::{AssemblySummary, DiscoveryFilter, Introspector};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// One discovered endpoint with the function name it would produce.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointView {
    /// `Client.Method`
    pub endpoint: String,
    /// Generated function name, absent when naming fails
    pub function: Option<String>,
    /// Return type display name
    pub returns: String,
    /// `name: Type` per declared parameter
    pub parameters: Vec<String>,
}

/// Result of the inspect command.
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    /// Per-client discovery summary
    #[serde(flatten)]
    pub summary: AssemblySummary,
    /// Total endpoints
    pub endpoint_count: usize,
    /// Endpoint details, only with `--detailed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Vec<EndpointView>>,
}

/// Builds the inspect report without printing.
///
/// # Errors
///
/// Returns an error if configuration or metadata cannot be loaded.
pub fn inspect(
    metadata: &Path,
    config: Option<&Path>,
    detailed: bool,
    working_dir: &Path,
) -> Result<InspectReport> {
    let config = GeneratorConfig::resolve(config, working_dir)
        .context("failed to load generator configuration")?;
    let introspector = Introspector::from_path(metadata)
        .with_context(|| format!("failed to load assembly metadata from {}", metadata.display()))?
        .with_filter(DiscoveryFilter::from_config(&config));

    let summary = introspector.summarize();
    let endpoint_count = summary.endpoint_count();

    let endpoints = detailed.then(|| {
        let builder = DescriptorBuilder::from_config(&config);
        introspector
            .discover_endpoints()
            .iter()
            .map(|endpoint| EndpointView {
                endpoint: endpoint.qualified_name(),
                function: function_name(endpoint, &builder),
                returns: endpoint.return_type.to_string(),
                parameters: endpoint
                    .parameters
                    .iter()
                    .map(|p| format!("{}: {}", p.name, p.parameter_type))
                    .collect(),
            })
            .collect()
    });

    Ok(InspectReport {
        summary,
        endpoint_count,
        endpoints,
    })
}

fn function_name(endpoint: &EndpointDescriptor, builder: &DescriptorBuilder) -> Option<String> {
    let verb = select_verb(&endpoint.method_name).ok()?;
    let noun = select_endpoint_noun(endpoint).ok()?;
    Some(builder.function_name(verb.as_str(), &noun))
}

/// Runs the inspect command.
///
/// # Errors
///
/// Returns an error if metadata cannot be loaded or output cannot be
/// formatted.
pub fn run(
    metadata: &Path,
    config: Option<&Path>,
    detailed: bool,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    info!("Inspecting assembly metadata: {}", metadata.display());
    let working_dir = std::env::current_dir().context("failed to read working directory")?;

    let report = inspect(metadata, config, detailed, &working_dir)?;

    let formatted = crate::formatters::format_output(&report, output_format)?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}
