//! Nested complex-type discovery and the run-wide emitted-type registry.

use crate::classifier::is_complex;
use crate::grouping::ParameterGroup;
use sdkwrap_core::TypeRef;
use std::collections::HashSet;

/// Collects the distinct complex property types of complex groups.
///
/// Only writable properties are considered. `Nullable` wrappers are removed
/// and the result keeps first-seen order.
///
/// # Examples
///
/// ```
/// use sdkwrap_codegen::{ParameterGroup, discover_nested_types};
/// use sdkwrap_core::{PropertyInfo, TypeRef};
///
/// let tenant = TypeRef::class("NetBox.Model", "NestedTenant");
/// let group = ParameterGroup {
///     name: "request".to_string(),
///     declared_type: TypeRef::class("NetBox.Model", "SiteRequest"),
///     is_complex: true,
///     properties: vec![
///         PropertyInfo::new("Tenant", tenant.clone()),
///         PropertyInfo::new("Owner", tenant.clone()),
///     ],
///     position: 0,
/// };
///
/// assert_eq!(discover_nested_types(&[group]), vec![tenant]);
/// ```
#[must_use]
pub fn discover_nested_types(groups: &[ParameterGroup]) -> Vec<TypeRef> {
    let mut seen = HashSet::new();
    let mut nested = Vec::new();

    for prop in groups
        .iter()
        .filter(|g| g.is_complex)
        .flat_map(ParameterGroup::writable_properties)
    {
        let ty = prop.property_type.unwrap_nullable();
        if is_complex(ty) && seen.insert(ty) {
            nested.push(ty.clone());
        }
    }
    nested
}

/// Set of complex types that already have a constructor in this run.
///
/// Owned by the generation driver; it only grows.
#[derive(Debug, Default)]
pub struct EmittedTypeRegistry {
    emitted: HashSet<TypeRef>,
}

impl EmittedTypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `ty`, returning `true` if it was not registered before.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdkwrap_codegen::EmittedTypeRegistry;
    /// use sdkwrap_core::TypeRef;
    ///
    /// let mut registry = EmittedTypeRegistry::new();
    /// let tag = TypeRef::class("NetBox.Model", "NestedTag");
    /// assert!(registry.add(&tag));
    /// assert!(!registry.add(&tag));
    /// ```
    pub fn add(&mut self, ty: &TypeRef) -> bool {
        if self.emitted.contains(ty) {
            return false;
        }
        self.emitted.insert(ty.clone())
    }

    /// Returns `true` if `ty` is registered.
    #[must_use]
    pub fn contains(&self, ty: &TypeRef) -> bool {
        self.emitted.contains(ty)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.emitted.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }
}
