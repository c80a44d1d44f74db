//! Parameter flattening.
//!
//! Lifts the writable properties of complex groups onto the call surface.
//! Each flattened entry remembers the group it came from so the wrapper body
//! can rebuild the original argument.
//!
//! Two sibling complex groups exposing the same property name produce two
//! entries with the same `name`. No disambiguation is applied.
//!
//! PowerShell parameter names are case-insensitive, so a simple parameter
//! `id` next to a lifted property `Id` collides in the same way even though
//! the names differ here.

use crate::classifier::is_complex;
use crate::grouping::ParameterGroup;
use sdkwrap_core::TypeRef;

/// One parameter of the generated call surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedParameter {
    /// Call-surface name (parameter name, or property name when lifted)
    pub name: String,
    /// Call-surface type
    pub parameter_type: TypeRef,
    /// Classification of `parameter_type`
    pub is_complex: bool,
    /// Name of the originating group
    pub source_group_name: String,
    /// Position of the originating group
    pub source_group_position: usize,
    /// Declared type of the originating group
    pub source_group_type: TypeRef,
    /// Property this entry was lifted from, absent for pass-through groups
    pub source_property_name: Option<String>,
}

impl FlattenedParameter {
    /// Returns `true` if lifted from a property of a complex group.
    #[inline]
    #[must_use]
    pub const fn is_property_sourced(&self) -> bool {
        self.source_property_name.is_some()
    }
}

/// Flattens groups into the ordered call surface.
///
/// Simple groups yield one entry. Complex groups yield one entry per
/// writable property in declaration order; read-only properties are
/// skipped. Groups are emitted in ascending position order.
///
/// # Examples
///
/// ```
/// use sdkwrap_codegen::{ParameterGroup, flatten_parameters};
/// use sdkwrap_core::{PropertyInfo, TypeRef};
///
/// let request = ParameterGroup {
///     name: "request".to_string(),
///     declared_type: TypeRef::class("NetBox.Model", "SiteRequest"),
///     is_complex: true,
///     properties: vec![
///         PropertyInfo::new("Name", TypeRef::class("System", "String")),
///         PropertyInfo::new("Status", TypeRef::enumeration("NetBox.Model", "StatusEnum")),
///     ],
///     position: 0,
/// };
///
/// let flat = flatten_parameters(&[request]);
/// assert_eq!(flat.len(), 2);
/// assert_eq!(flat[1].source_property_name.as_deref(), Some("Status"));
/// ```
#[must_use]
pub fn flatten_parameters(groups: &[ParameterGroup]) -> Vec<FlattenedParameter> {
    let mut ordered: Vec<&ParameterGroup> = groups.iter().collect();
    ordered.sort_by_key(|g| g.position);

    let mut flattened = Vec::new();
    for group in ordered {
        if group.is_complex {
            flattened.extend(group.writable_properties().map(|prop| FlattenedParameter {
                name: prop.name.clone(),
                parameter_type: prop.property_type.clone(),
                is_complex: is_complex(&prop.property_type),
                source_group_name: group.name.clone(),
                source_group_position: group.position,
                source_group_type: group.declared_type.clone(),
                source_property_name: Some(prop.name.clone()),
            }));
        } else {
            flattened.push(FlattenedParameter {
                name: group.name.clone(),
                parameter_type: group.declared_type.clone(),
                is_complex: false,
                source_group_name: group.name.clone(),
                source_group_position: group.position,
                source_group_type: group.declared_type.clone(),
                source_property_name: None,
            });
        }
    }
    flattened
}
