//! Generation driver.
//!
//! Runs the pipeline over every endpoint, owns the run-wide emitted-type
//! registry, and collects descriptors into output units. Failures are
//! recorded per endpoint or per type and never stop the run.

use crate::builder::DescriptorBuilder;
use crate::descriptor::FunctionDescriptor;
use crate::flatten::flatten_parameters;
use crate::grouping::group_parameters;
use crate::naming::{select_endpoint_noun, select_noun, select_verb};
use crate::nested::{EmittedTypeRegistry, discover_nested_types};
use sdkwrap_core::{EndpointDescriptor, Error, GeneratorConfig, Result, TypeCatalog};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Functions destined for one output file.
#[derive(Debug, Clone, Default)]
pub struct OutputUnit {
    /// Declaring type name, absent when grouping is disabled
    pub name: Option<String>,
    /// Constructor functions, in registration order
    pub constructors: Vec<FunctionDescriptor>,
    /// Wrapper functions, in endpoint order
    pub wrappers: Vec<FunctionDescriptor>,
}

impl OutputUnit {
    fn new(name: Option<String>) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Iterates constructors first, then wrappers.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDescriptor> {
        self.constructors.iter().chain(&self.wrappers)
    }

    /// Total number of functions.
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.constructors.len() + self.wrappers.len()
    }

    /// Returns `true` if the unit has no functions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.function_count() == 0
    }

    fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for function in self.functions() {
            if !seen.insert(function.name.as_str()) && !duplicates.contains(&function.name.as_str())
            {
                duplicates.push(function.name.as_str());
            }
        }
        duplicates
    }
}

/// An endpoint or type that could not be generated.
#[derive(Debug)]
pub struct GenerationFailure {
    /// `Client.Method` for endpoints, the full type name for constructors
    pub subject: String,
    /// What went wrong
    pub error: Error,
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Output units in first-seen order
    pub units: Vec<OutputUnit>,
    /// Everything that failed, in processing order
    pub failures: Vec<GenerationFailure>,
}

impl GenerationReport {
    /// Total constructors across units.
    #[must_use]
    pub fn constructor_count(&self) -> usize {
        self.units.iter().map(|u| u.constructors.len()).sum()
    }

    /// Total wrappers across units.
    #[must_use]
    pub fn wrapper_count(&self) -> usize {
        self.units.iter().map(|u| u.wrappers.len()).sum()
    }

    /// Total functions across units.
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.constructor_count() + self.wrapper_count()
    }

    /// Returns `true` if anything failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Finds a unit by declaring type name.
    #[must_use]
    pub fn unit(&self, name: &str) -> Option<&OutputUnit> {
        self.units.iter().find(|u| u.name.as_deref() == Some(name))
    }
}

/// Orchestrates generation for a set of endpoints.
///
/// # Examples
///
/// ```
/// use sdkwrap_codegen::{DescriptorBuilder, GenerationDriver};
/// use sdkwrap_core::{EndpointDescriptor, TypeRef};
/// use sdkwrap_introspector::MetadataCatalog;
///
/// let catalog = MetadataCatalog::default();
/// let endpoints = vec![
///     EndpointDescriptor::new("DcimApi", "GetSites", TypeRef::class("NetBox.Model", "SiteList"),
///         Vec::<(String, TypeRef)>::new()),
///     EndpointDescriptor::new("IpamApi", "GetVlans", TypeRef::class("NetBox.Model", "VlanList"),
///         Vec::<(String, TypeRef)>::new()),
/// ];
///
/// let report = GenerationDriver::new(&catalog, DescriptorBuilder::default()).run(&endpoints);
/// assert_eq!(report.units.len(), 2);
///
/// let single = GenerationDriver::new(&catalog, DescriptorBuilder::default())
///     .with_grouping(false)
///     .run(&endpoints);
/// assert_eq!(single.units.len(), 1);
/// assert_eq!(single.units[0].wrappers.len(), 2);
/// ```
#[derive(Debug)]
pub struct GenerationDriver<'a, C: TypeCatalog + ?Sized> {
    catalog: &'a C,
    builder: DescriptorBuilder,
    group_by_declaring_type: bool,
}

impl<'a, C: TypeCatalog + ?Sized> GenerationDriver<'a, C> {
    /// Creates a driver that groups output by declaring type.
    #[must_use]
    pub const fn new(catalog: &'a C, builder: DescriptorBuilder) -> Self {
        Self {
            catalog,
            builder,
            group_by_declaring_type: true,
        }
    }

    /// Creates a driver configured from generator configuration.
    #[must_use]
    pub fn from_config(catalog: &'a C, config: &GeneratorConfig) -> Self {
        Self::new(catalog, DescriptorBuilder::from_config(config))
            .with_grouping(config.group_by_declaring_type)
    }

    /// Enables or disables one output unit per declaring type.
    #[must_use]
    pub const fn with_grouping(mut self, enabled: bool) -> Self {
        self.group_by_declaring_type = enabled;
        self
    }

    /// Runs generation over `endpoints` in order.
    pub fn run(&self, endpoints: &[EndpointDescriptor]) -> GenerationReport {
        info!(
            endpoints = endpoints.len(),
            grouped = self.group_by_declaring_type,
            "starting generation run"
        );

        let mut registry = EmittedTypeRegistry::new();
        let mut report = GenerationReport::default();
        let mut unit_index: HashMap<Option<String>, usize> = HashMap::new();

        for endpoint in endpoints {
            let key = self
                .group_by_declaring_type
                .then(|| endpoint.declaring_type.clone());
            let index = *unit_index.entry(key.clone()).or_insert_with(|| {
                report.units.push(OutputUnit::new(key));
                report.units.len() - 1
            });

            let (constructors, wrapper) =
                self.process_endpoint(endpoint, &mut registry, &mut report.failures);

            let unit = &mut report.units[index];
            unit.constructors.extend(constructors);
            match wrapper {
                Ok(wrapper) => {
                    debug!(endpoint = %endpoint.qualified_name(), function = %wrapper.name, "generated wrapper");
                    unit.wrappers.push(wrapper);
                }
                Err(error) => {
                    warn!(endpoint = %endpoint.qualified_name(), %error, "skipping endpoint");
                    report.failures.push(GenerationFailure {
                        subject: endpoint.qualified_name(),
                        error,
                    });
                }
            }
        }

        for unit in &report.units {
            for name in unit.duplicate_names() {
                warn!(
                    unit = unit.name.as_deref().unwrap_or("<all>"),
                    function = name,
                    "duplicate function name in output unit"
                );
            }
        }

        info!(
            constructors = report.constructor_count(),
            wrappers = report.wrapper_count(),
            failures = report.failures.len(),
            "generation run complete"
        );
        report
    }

    /// Returns the constructors newly registered by this endpoint and the
    /// wrapper (or the error that prevented it).
    fn process_endpoint(
        &self,
        endpoint: &EndpointDescriptor,
        registry: &mut EmittedTypeRegistry,
        failures: &mut Vec<GenerationFailure>,
    ) -> (Vec<FunctionDescriptor>, Result<FunctionDescriptor>) {
        let mut constructors = Vec::new();

        let verb = match select_verb(&endpoint.method_name) {
            Ok(verb) => verb,
            Err(e) => return (constructors, Err(e)),
        };
        let noun = match select_endpoint_noun(endpoint) {
            Ok(noun) => noun,
            Err(e) => return (constructors, Err(e)),
        };
        let groups = match group_parameters(&endpoint.parameters, self.catalog) {
            Ok(groups) => groups,
            Err(e) => return (constructors, Err(e)),
        };
        let flattened = flatten_parameters(&groups);

        for nested in discover_nested_types(&groups) {
            if !registry.add(&nested) {
                continue;
            }
            match self
                .builder
                .build_constructor(&select_noun(&nested), &nested, self.catalog)
            {
                Ok(ctor) => {
                    debug!(function = %ctor.name, "generated constructor");
                    constructors.push(ctor);
                }
                Err(error) => {
                    let subject = nested.to_string();
                    warn!(type_name = %subject, %error, "skipping constructor");
                    failures.push(GenerationFailure { subject, error });
                }
            }
        }

        let wrapper = self
            .builder
            .build_wrapper(verb, &noun, &flattened, endpoint, self.catalog);
        (constructors, wrapper)
    }
}
