//! Type catalog backed by assembly metadata.

use crate::metadata::AssemblyMetadata;
use sdkwrap_core::{Error, Result, TypeCatalog, TypeRef, TypeShape};
use std::collections::HashMap;

/// Answers [`TypeCatalog`] queries from a loaded metadata document.
///
/// Shapes are keyed by definition name, so a constructed generic such as
/// `Page<Device>` resolves to the shape of `` Page`1 ``.
///
/// # Examples
///
/// ```
/// use sdkwrap_core::{TypeCatalog, TypeRef};
/// use sdkwrap_introspector::{AssemblyMetadata, MetadataCatalog};
///
/// let metadata = AssemblyMetadata::from_json_str(r#"{
///     "assembly": "NetBoxSdk",
///     "types": [{"namespace": "NetBox.Model", "name": "Tag",
///                "properties": [{"name": "Slug", "type": {"namespace": "System", "name": "String"}}]}]
/// }"#).unwrap();
///
/// let catalog = MetadataCatalog::from_metadata(&metadata);
/// let shape = catalog.describe(&TypeRef::class("NetBox.Model", "Tag")).unwrap();
/// assert_eq!(shape.properties[0].name, "Slug");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetadataCatalog {
    shapes: HashMap<String, TypeShape>,
}

impl MetadataCatalog {
    /// Builds a catalog holding the shape of every type in `metadata`.
    #[must_use]
    pub fn from_metadata(metadata: &AssemblyMetadata) -> Self {
        let shapes = metadata
            .types
            .iter()
            .map(|ty| (ty.definition_name(), ty.shape.clone()))
            .collect();
        Self { shapes }
    }

    /// Adds or replaces the shape registered under `definition_name`.
    pub fn insert(&mut self, definition_name: impl Into<String>, shape: TypeShape) {
        self.shapes.insert(definition_name.into(), shape);
    }

    /// Returns `true` if the catalog can describe `ty`.
    #[must_use]
    pub fn contains(&self, ty: &TypeRef) -> bool {
        ty.definition_name()
            .is_some_and(|key| self.shapes.contains_key(&key))
    }

    /// Number of described types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if no types are described.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl TypeCatalog for MetadataCatalog {
    fn describe(&self, ty: &TypeRef) -> Result<&TypeShape> {
        let key = ty
            .definition_name()
            .ok_or_else(|| Error::UnresolvableTypeName {
                context: format!("type '{}' requested from the catalog", ty.name),
            })?;

        self.shapes
            .get(&key)
            .ok_or_else(|| Error::TypeIntrospection {
                type_name: key,
                reason: "type is not present in the assembly metadata".to_string(),
            })
    }
}
