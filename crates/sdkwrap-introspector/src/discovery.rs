//! Endpoint discovery.
//!
//! An endpoint is a public, instance, declared-only, non-special method on an
//! exported concrete client class whose name starts with one of the verb
//! prefixes `Get`, `Create`, `Delete`, or `Update` (case-insensitive).

use crate::catalog::MetadataCatalog;
use crate::metadata::{AssemblyMetadata, MethodDefinition, TypeDefinition};
use sdkwrap_core::{EndpointDescriptor, GeneratorConfig, Result, TypeKind};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Method name prefixes that mark a method as an endpoint.
pub const ENDPOINT_VERB_PREFIXES: [&str; 4] = ["Get", "Create", "Delete", "Update"];

/// Restricts which client types are scanned for endpoints.
///
/// Suffix comparisons are ordinal (case-sensitive).
///
/// # Examples
///
/// ```
/// use sdkwrap_introspector::DiscoveryFilter;
///
/// let filter = DiscoveryFilter {
///     client_type_suffix: Some("Api".to_string()),
///     client_namespace_suffix: Some(".Api".to_string()),
/// };
/// assert!(filter.matches("DcimApi", Some("NetBox.Api")));
/// assert!(!filter.matches("DcimClient", Some("NetBox.Api")));
/// assert!(!filter.matches("DcimApi", None));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryFilter {
    /// Required suffix of the client type name
    pub client_type_suffix: Option<String>,
    /// Required suffix of the client namespace
    pub client_namespace_suffix: Option<String>,
}

impl DiscoveryFilter {
    /// Builds a filter from generator configuration.
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            client_type_suffix: config.client_type_suffix.clone(),
            client_namespace_suffix: config.client_namespace_suffix.clone(),
        }
    }

    /// Returns `true` if a type with this name and namespace passes.
    #[must_use]
    pub fn matches(&self, name: &str, namespace: Option<&str>) -> bool {
        let name_ok = self
            .client_type_suffix
            .as_deref()
            .is_none_or(|suffix| name.ends_with(suffix));
        let namespace_ok = self
            .client_namespace_suffix
            .as_deref()
            .is_none_or(|suffix| namespace.is_some_and(|ns| ns.ends_with(suffix)));
        name_ok && namespace_ok
    }
}

/// Returns `true` if `method_name` starts with an endpoint verb prefix.
///
/// # Examples
///
/// ```
/// use sdkwrap_introspector::discovery::has_endpoint_prefix;
///
/// assert!(has_endpoint_prefix("GetDevices"));
/// assert!(has_endpoint_prefix("deleteVlan"));
/// assert!(!has_endpoint_prefix("PatchDevice"));
/// ```
#[must_use]
pub fn has_endpoint_prefix(method_name: &str) -> bool {
    ENDPOINT_VERB_PREFIXES.iter().any(|prefix| {
        method_name
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

fn is_client_type(ty: &TypeDefinition, filter: &DiscoveryFilter) -> bool {
    ty.kind == TypeKind::Class
        && ty.is_exported
        && !ty.is_abstract
        && filter.matches(&ty.name, ty.namespace.as_deref())
}

fn is_endpoint_method(method: &MethodDefinition) -> bool {
    method.is_public
        && !method.is_static
        && method.declared_only
        && !method.is_special_name
        && has_endpoint_prefix(&method.name)
}

/// Per-client discovery summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientSummary {
    /// Client type name
    pub name: String,
    /// Client namespace
    pub namespace: Option<String>,
    /// Endpoint method names in declaration order
    pub endpoints: Vec<String>,
    /// Declared methods that were not endpoints
    pub skipped_methods: usize,
}

/// Discovery summary for a whole assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssemblySummary {
    /// Assembly name
    pub assembly: String,
    /// Number of type definitions in the metadata
    pub type_count: usize,
    /// Clients that passed the filter
    pub clients: Vec<ClientSummary>,
}

impl AssemblySummary {
    /// Total number of endpoints across all clients.
    #[must_use]
    pub fn endpoint_count(&self) -> usize {
        self.clients.iter().map(|c| c.endpoints.len()).sum()
    }
}

/// Discovers endpoints in assembly metadata.
///
/// # Examples
///
/// ```
/// use sdkwrap_introspector::{AssemblyMetadata, DiscoveryFilter, Introspector};
///
/// let metadata = AssemblyMetadata::from_json_str(r#"{
///     "assembly": "NetBoxSdk",
///     "types": [
///         {"namespace": "NetBox.Api", "name": "DcimApi", "methods": [
///             {"name": "GetDevices", "return_type": {"namespace": "NetBox.Model", "name": "DeviceList"}}
///         ]},
///         {"namespace": "NetBox.Client", "name": "ApiClient", "methods": [
///             {"name": "GetConfig", "return_type": {"namespace": "NetBox.Client", "name": "Config"}}
///         ]}
///     ]
/// }"#).unwrap();
///
/// let introspector = Introspector::new(metadata).with_filter(DiscoveryFilter {
///     client_type_suffix: Some("Api".to_string()),
///     client_namespace_suffix: None,
/// });
/// let endpoints = introspector.discover_endpoints();
/// assert_eq!(endpoints.len(), 1);
/// assert_eq!(endpoints[0].declaring_type, "DcimApi");
/// ```
#[derive(Debug)]
pub struct Introspector {
    metadata: AssemblyMetadata,
    catalog: MetadataCatalog,
    filter: DiscoveryFilter,
}

impl Introspector {
    /// Creates an introspector over loaded metadata with no client filter.
    #[must_use]
    pub fn new(metadata: AssemblyMetadata) -> Self {
        let catalog = MetadataCatalog::from_metadata(&metadata);
        Self {
            metadata,
            catalog,
            filter: DiscoveryFilter::default(),
        }
    }

    /// Loads metadata from `path`.
    ///
    /// # Errors
    ///
    /// Returns `Error::MetadataError` if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = AssemblyMetadata::load(path)?;
        info!(
            assembly = %metadata.assembly,
            path = %path.display(),
            "loaded assembly metadata"
        );
        Ok(Self::new(metadata))
    }

    /// Replaces the client filter.
    #[must_use]
    pub fn with_filter(mut self, filter: DiscoveryFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Returns the assembly name.
    #[must_use]
    pub fn assembly_name(&self) -> &str {
        &self.metadata.assembly
    }

    /// Returns the loaded metadata.
    #[must_use]
    pub const fn metadata(&self) -> &AssemblyMetadata {
        &self.metadata
    }

    /// Returns the type catalog built from the metadata.
    #[must_use]
    pub const fn catalog(&self) -> &MetadataCatalog {
        &self.catalog
    }

    /// Iterates over client types that pass the filter.
    pub fn client_types(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.metadata
            .types
            .iter()
            .filter(|ty| is_client_type(ty, &self.filter))
    }

    /// Discovers all endpoints, in type then method declaration order.
    #[must_use]
    pub fn discover_endpoints(&self) -> Vec<EndpointDescriptor> {
        let mut endpoints = Vec::new();

        for client in self.client_types() {
            let before = endpoints.len();
            endpoints.extend(
                client
                    .methods
                    .iter()
                    .filter(|m| is_endpoint_method(m))
                    .map(|m| to_endpoint(client, m)),
            );
            debug!(
                client = %client.name,
                endpoints = endpoints.len() - before,
                "scanned client type"
            );
        }

        info!(
            assembly = %self.metadata.assembly,
            endpoints = endpoints.len(),
            "endpoint discovery complete"
        );
        endpoints
    }

    /// Summarizes discovery per client type.
    #[must_use]
    pub fn summarize(&self) -> AssemblySummary {
        let clients = self
            .client_types()
            .map(|client| {
                let endpoints: Vec<String> = client
                    .methods
                    .iter()
                    .filter(|m| is_endpoint_method(m))
                    .map(|m| m.name.clone())
                    .collect();
                ClientSummary {
                    name: client.name.clone(),
                    namespace: client.namespace.clone(),
                    skipped_methods: client.methods.len() - endpoints.len(),
                    endpoints,
                }
            })
            .collect();

        AssemblySummary {
            assembly: self.metadata.assembly.clone(),
            type_count: self.metadata.types.len(),
            clients,
        }
    }
}

fn to_endpoint(client: &TypeDefinition, method: &MethodDefinition) -> EndpointDescriptor {
    EndpointDescriptor::new(
        client.name.clone(),
        method.name.clone(),
        method.return_type.clone(),
        method
            .parameters
            .iter()
            .map(|p| (p.name.clone(), p.parameter_type.clone())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "assembly": "NetBoxSdk",
        "types": [
            {"namespace": "NetBox.Api", "name": "DcimApi", "methods": [
                {"name": "GetDevices", "return_type": {"namespace": "NetBox.Model", "name": "DeviceListResponse"}},
                {"name": "CreateSite", "return_type": {"namespace": "NetBox.Model", "name": "Site"},
                 "parameters": [{"name": "request", "type": {"namespace": "NetBox.Model", "name": "SiteRequest"}}]},
                {"name": "PatchDevice", "return_type": {"namespace": "NetBox.Model", "name": "Device"}},
                {"name": "GetHashCode", "declared_only": false,
                 "return_type": {"namespace": "System", "name": "Int32", "kind": "struct"}},
                {"name": "GetDefault", "is_static": true, "return_type": {"namespace": "NetBox.Api", "name": "DcimApi"}},
                {"name": "get_BasePath", "is_special_name": true, "return_type": {"namespace": "System", "name": "String"}},
                {"name": "DeleteDeviceInternal", "is_public": false, "return_type": {"namespace": "System", "name": "Void", "kind": "void"}}
            ]},
            {"namespace": "NetBox.Api", "name": "ApiBase", "is_abstract": true, "methods": [
                {"name": "GetBase", "return_type": {"namespace": "System", "name": "String"}}
            ]},
            {"namespace": "NetBox.Api", "name": "InternalApi", "is_exported": false, "methods": [
                {"name": "GetSecret", "return_type": {"namespace": "System", "name": "String"}}
            ]},
            {"namespace": "NetBox.Api", "name": "IDcimApi", "kind": "interface", "methods": [
                {"name": "GetDevices", "return_type": {"namespace": "NetBox.Model", "name": "DeviceListResponse"}}
            ]},
            {"namespace": "NetBox.Api", "name": "IpamApi", "methods": [
                {"name": "deleteVlan", "return_type": {"namespace": "System", "name": "Void", "kind": "void"},
                 "parameters": [{"name": "id", "type": {"namespace": "System", "name": "Int32", "kind": "struct"}}]}
            ]}
        ]
    }"#;

    fn introspector() -> Introspector {
        Introspector::new(AssemblyMetadata::from_json_str(SAMPLE).unwrap())
    }

    #[test]
    fn test_prefix_matching() {
        assert!(has_endpoint_prefix("GetDevices"));
        assert!(has_endpoint_prefix("GETDEVICES"));
        assert!(has_endpoint_prefix("createSite"));
        assert!(has_endpoint_prefix("Update"));
        assert!(!has_endpoint_prefix("Ge"));
        assert!(!has_endpoint_prefix("ListDevices"));
        assert!(!has_endpoint_prefix(""));
    }

    #[test]
    fn test_discover_filters_methods_and_types() {
        let endpoints = introspector().discover_endpoints();
        let names: Vec<_> = endpoints
            .iter()
            .map(EndpointDescriptor::qualified_name)
            .collect();
        assert_eq!(
            names,
            vec!["DcimApi.GetDevices", "DcimApi.CreateSite", "IpamApi.deleteVlan"]
        );
    }

    #[test]
    fn test_endpoint_parameters() {
        let endpoints = introspector().discover_endpoints();
        let create = &endpoints[1];
        assert_eq!(create.parameters.len(), 1);
        assert_eq!(create.parameters[0].name, "request");
        assert_eq!(create.parameters[0].position, 0);
        assert_eq!(create.parameters[0].parameter_type.name, "SiteRequest");
    }

    #[test]
    fn test_filter_by_type_suffix() {
        let introspector = introspector().with_filter(DiscoveryFilter {
            client_type_suffix: Some("DcimApi".to_string()),
            client_namespace_suffix: None,
        });
        let endpoints = introspector.discover_endpoints();
        assert_eq!(endpoints.len(), 2);
        assert!(endpoints.iter().all(|e| e.declaring_type == "DcimApi"));
    }

    #[test]
    fn test_filter_by_namespace_suffix() {
        let introspector = introspector().with_filter(DiscoveryFilter {
            client_type_suffix: None,
            client_namespace_suffix: Some(".Client".to_string()),
        });
        assert!(introspector.discover_endpoints().is_empty());
    }

    #[test]
    fn test_filter_suffix_is_case_sensitive() {
        let filter = DiscoveryFilter {
            client_type_suffix: Some("Api".to_string()),
            client_namespace_suffix: None,
        };
        assert!(filter.matches("DcimApi", None));
        assert!(!filter.matches("DcimAPI", None));
    }

    #[test]
    fn test_filter_from_config() {
        let config = GeneratorConfig {
            client_type_suffix: Some("Api".to_string()),
            ..Default::default()
        };
        let filter = DiscoveryFilter::from_config(&config);
        assert_eq!(filter.client_type_suffix.as_deref(), Some("Api"));
        assert!(filter.client_namespace_suffix.is_none());
    }

    #[test]
    fn test_summary() {
        let summary = introspector().summarize();
        assert_eq!(summary.assembly, "NetBoxSdk");
        assert_eq!(summary.type_count, 5);
        assert_eq!(summary.clients.len(), 2);
        assert_eq!(summary.clients[0].name, "DcimApi");
        assert_eq!(summary.clients[0].endpoints, vec!["GetDevices", "CreateSite"]);
        assert_eq!(summary.clients[0].skipped_methods, 5);
        assert_eq!(summary.endpoint_count(), 3);
    }

    #[test]
    fn test_catalog_built_from_metadata() {
        let introspector = introspector();
        assert_eq!(introspector.catalog().len(), 5);
        assert_eq!(introspector.assembly_name(), "NetBoxSdk");
        assert_eq!(introspector.metadata().types.len(), 5);
    }
}
