//! Assembly metadata document.
//!
//! The document is a JSON dump of the reflected surface of a compiled client
//! assembly. Producing it is the job of an external dump tool; this module
//! only deserializes and sanity-checks it.
//!
//! Omitted flags take the values a typical generated client would have:
//! types are exported, concrete classes with a parameterless constructor,
//! and methods are public, instance, declared-only, and not special-name.

use sdkwrap_core::{Error, Result, TypeKind, TypeRef, TypeShape};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

const fn default_true() -> bool {
    true
}

/// Root of the metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyMetadata {
    /// Assembly simple name
    pub assembly: String,
    /// Every type the dump tool reflected
    #[serde(default)]
    pub types: Vec<TypeDefinition>,
}

/// A reflected type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefinition {
    /// Declaring namespace
    #[serde(default)]
    pub namespace: Option<String>,
    /// Type name, generic arity marker included
    pub name: String,
    /// Type kind
    #[serde(default)]
    pub kind: TypeKind,
    /// Visible outside the assembly
    #[serde(default = "default_true")]
    pub is_exported: bool,
    /// Abstract (or static) type
    #[serde(default)]
    pub is_abstract: bool,
    /// Properties and construction options
    #[serde(flatten)]
    pub shape: TypeShape,
    /// Methods declared on the type
    #[serde(default)]
    pub methods: Vec<MethodDefinition>,
}

impl TypeDefinition {
    /// Returns a non-generic reference to this definition.
    #[must_use]
    pub fn type_ref(&self) -> TypeRef {
        TypeRef {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            kind: self.kind,
            generic_arguments: Vec::new(),
        }
    }

    /// Returns the catalog key (`Namespace.Name`).
    #[must_use]
    pub fn definition_name(&self) -> String {
        match self.namespace.as_deref() {
            Some(ns) if !ns.is_empty() => format!("{ns}.{}", self.name),
            _ => self.name.clone(),
        }
    }
}

/// A reflected method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDefinition {
    /// Method name
    pub name: String,
    /// Public visibility
    #[serde(default = "default_true")]
    pub is_public: bool,
    /// Static method
    #[serde(default)]
    pub is_static: bool,
    /// Compiler-generated accessor or operator
    #[serde(default)]
    pub is_special_name: bool,
    /// Declared on this type rather than inherited
    #[serde(default = "default_true")]
    pub declared_only: bool,
    /// Declared return type
    pub return_type: TypeRef,
    /// Parameters in declaration order
    #[serde(default)]
    pub parameters: Vec<MethodParameter>,
}

/// A reflected method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodParameter {
    /// Parameter name
    pub name: String,
    /// Declared parameter type
    #[serde(rename = "type")]
    pub parameter_type: TypeRef,
}

impl AssemblyMetadata {
    /// Parses a metadata document.
    ///
    /// # Errors
    ///
    /// Returns `Error::MetadataError` if the JSON is malformed, the assembly
    /// name is empty, or a type is defined twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdkwrap_introspector::AssemblyMetadata;
    ///
    /// let metadata = AssemblyMetadata::from_json_str(r#"{"assembly": "Empty"}"#).unwrap();
    /// assert!(metadata.types.is_empty());
    ///
    /// assert!(AssemblyMetadata::from_json_str("{").is_err());
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self> {
        let metadata: Self = serde_json::from_str(text).map_err(|e| Error::MetadataError {
            message: format!("invalid metadata JSON: {e}"),
            source: Some(e),
        })?;
        metadata.validate()?;
        debug!(
            assembly = %metadata.assembly,
            types = metadata.types.len(),
            "parsed assembly metadata"
        );
        Ok(metadata)
    }

    /// Reads and parses a metadata document from disk.
    ///
    /// # Errors
    ///
    /// Returns `Error::MetadataError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::MetadataError {
            message: format!("failed to read {}: {e}", path.display()),
            source: None,
        })?;
        Self::from_json_str(&text)
    }

    /// Looks up a type definition by its catalog key.
    #[must_use]
    pub fn find_type(&self, definition_name: &str) -> Option<&TypeDefinition> {
        self.types
            .iter()
            .find(|t| t.definition_name() == definition_name)
    }

    fn validate(&self) -> Result<()> {
        if self.assembly.trim().is_empty() {
            return Err(Error::MetadataError {
                message: "assembly name cannot be empty".to_string(),
                source: None,
            });
        }

        let mut seen = HashSet::new();
        for ty in &self.types {
            let key = ty.definition_name();
            if !seen.insert(key.clone()) {
                return Err(Error::MetadataError {
                    message: format!("type '{key}' is defined more than once"),
                    source: None,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "assembly": "NetBoxSdk",
        "types": [
            {
                "namespace": "NetBox.Model",
                "name": "SiteRequest",
                "properties": [
                    {"name": "Name", "type": {"namespace": "System", "name": "String"},
                     "attributes": ["RequiredAttribute"]},
                    {"name": "Id", "type": {"namespace": "System", "name": "Int32", "kind": "struct"},
                     "can_write": false}
                ]
            },
            {
                "namespace": "NetBox.Api",
                "name": "DcimApi",
                "methods": [
                    {"name": "CreateSite",
                     "return_type": {"namespace": "NetBox.Model", "name": "Site"},
                     "parameters": [{"name": "request", "type": {"namespace": "NetBox.Model", "name": "SiteRequest"}}]},
                    {"name": "get_Configuration", "is_special_name": true,
                     "return_type": {"namespace": "NetBox.Client", "name": "Configuration"}}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let metadata = AssemblyMetadata::from_json_str(SAMPLE).unwrap();
        assert_eq!(metadata.assembly, "NetBoxSdk");
        assert_eq!(metadata.types.len(), 2);

        let request = &metadata.types[0];
        assert_eq!(request.kind, TypeKind::Class);
        assert!(request.is_exported);
        assert!(!request.is_abstract);
        assert!(request.shape.has_parameterless_constructor);
        assert_eq!(request.shape.properties.len(), 2);
        assert!(!request.shape.properties[1].can_write);
        assert_eq!(request.shape.properties[0].attributes, vec!["RequiredAttribute"]);
    }

    #[test]
    fn test_method_defaults() {
        let metadata = AssemblyMetadata::from_json_str(SAMPLE).unwrap();
        let api = &metadata.types[1];
        let create = &api.methods[0];
        assert!(create.is_public);
        assert!(!create.is_static);
        assert!(create.declared_only);
        assert!(!create.is_special_name);
        assert_eq!(create.parameters[0].name, "request");
        assert!(api.methods[1].is_special_name);
    }

    #[test]
    fn test_static_factory_flattened_into_shape() {
        let metadata = AssemblyMetadata::from_json_str(
            r#"{"assembly": "A", "types": [{
                "namespace": "M", "name": "Token",
                "has_parameterless_constructor": false,
                "static_factory": "Create"
            }]}"#,
        )
        .unwrap();
        let shape = &metadata.types[0].shape;
        assert!(!shape.has_parameterless_constructor);
        assert_eq!(shape.static_factory.as_deref(), Some("Create"));
    }

    #[test]
    fn test_find_type() {
        let metadata = AssemblyMetadata::from_json_str(SAMPLE).unwrap();
        assert!(metadata.find_type("NetBox.Model.SiteRequest").is_some());
        assert!(metadata.find_type("NetBox.Model.Missing").is_none());
    }

    #[test]
    fn test_definition_name_and_type_ref() {
        let metadata = AssemblyMetadata::from_json_str(SAMPLE).unwrap();
        let api = &metadata.types[1];
        assert_eq!(api.definition_name(), "NetBox.Api.DcimApi");
        assert_eq!(
            api.type_ref().full_name().as_deref(),
            Some("NetBox.Api.DcimApi")
        );
    }

    #[test]
    fn test_invalid_json_keeps_source() {
        let err = AssemblyMetadata::from_json_str("{\"assembly\": ").unwrap_err();
        assert!(err.is_metadata_error());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_empty_assembly_name_rejected() {
        let err = AssemblyMetadata::from_json_str(r#"{"assembly": "  "}"#).unwrap_err();
        assert!(err.is_metadata_error());
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let err = AssemblyMetadata::from_json_str(
            r#"{"assembly": "A", "types": [
                {"namespace": "M", "name": "Site"},
                {"namespace": "M", "name": "Site"}
            ]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("M.Site"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AssemblyMetadata::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.is_metadata_error());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata.json");
        fs::write(&path, SAMPLE).unwrap();
        let metadata = AssemblyMetadata::load(&path).unwrap();
        assert_eq!(metadata.types.len(), 2);
    }
}
