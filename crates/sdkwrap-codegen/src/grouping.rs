//! Parameter grouping.
//!
//! Every declared parameter becomes one group. Complex groups carry the full
//! public property set of their type, one level deep.

use crate::classifier::is_complex;
use sdkwrap_core::{ParameterInfo, PropertyInfo, Result, TypeCatalog, TypeRef};

/// One original endpoint parameter, with its properties when complex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterGroup {
    /// Declared parameter name
    pub name: String,
    /// Declared parameter type
    pub declared_type: TypeRef,
    /// Whether the type was classified complex
    pub is_complex: bool,
    /// Public instance properties of the type (empty when simple)
    pub properties: Vec<PropertyInfo>,
    /// Zero-based position in the declared parameter list
    pub position: usize,
}

impl ParameterGroup {
    /// Iterates over properties with a public setter.
    pub fn writable_properties(&self) -> impl Iterator<Item = &PropertyInfo> {
        self.properties.iter().filter(|p| p.can_write)
    }
}

/// Groups an endpoint's parameters.
///
/// # Errors
///
/// Returns the catalog's error if a complex parameter type cannot be
/// described; the whole endpoint fails in that case.
///
/// # Examples
///
/// ```
/// use sdkwrap_codegen::group_parameters;
/// use sdkwrap_core::{ParameterInfo, TypeRef};
/// use sdkwrap_introspector::MetadataCatalog;
///
/// let params = vec![ParameterInfo {
///     name: "id".to_string(),
///     parameter_type: TypeRef::value("System", "Int32"),
///     position: 0,
/// }];
///
/// let groups = group_parameters(&params, &MetadataCatalog::default()).unwrap();
/// assert_eq!(groups.len(), 1);
/// assert!(!groups[0].is_complex);
/// ```
pub fn group_parameters<C>(parameters: &[ParameterInfo], catalog: &C) -> Result<Vec<ParameterGroup>>
where
    C: TypeCatalog + ?Sized,
{
    parameters
        .iter()
        .enumerate()
        .map(|(position, param)| {
            let complex = is_complex(&param.parameter_type);
            let properties = if complex {
                catalog
                    .describe(param.parameter_type.unwrap_nullable())?
                    .properties
                    .clone()
            } else {
                Vec::new()
            };

            Ok(ParameterGroup {
                name: param.name.clone(),
                declared_type: param.parameter_type.clone(),
                is_complex: complex,
                properties,
                position,
            })
        })
        .collect()
}
