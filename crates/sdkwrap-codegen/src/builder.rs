//! Constructor and wrapper descriptor construction.

use crate::classifier::is_complex;
use crate::descriptor::{
    ConstructionPath, FunctionDescriptor, FunctionKind, ParameterSpec, Statement,
};
use crate::flatten::FlattenedParameter;
use crate::naming::{Verb, is_void_like, payload_type};
use sdkwrap_core::{
    EndpointDescriptor, Error, GeneratorConfig, PropertyInfo, Result, TypeCatalog, TypeRef,
};
use std::fmt;

const CONSTRUCTOR_VERB: &str = "New";
const CONSTRUCTOR_VARIABLE: &str = "obj";

/// Decides whether a constructor parameter is mandatory beyond the
/// non-nullable value-type rule.
pub trait RequiredPredicate: fmt::Debug + Send + Sync {
    /// Returns `true` if `property` must be supplied.
    fn is_required(&self, property: &PropertyInfo) -> bool;
}

/// Marks a property required when any attribute type name contains one of
/// the configured markers.
///
/// Matching is a plain substring test, so `NotRequiredAttribute` matches the
/// `Required` marker.
///
/// # Examples
///
/// ```
/// use sdkwrap_codegen::{AttributeNameMarkers, RequiredPredicate};
/// use sdkwrap_core::{PropertyInfo, TypeRef};
///
/// let markers = AttributeNameMarkers::default();
/// let name = PropertyInfo::new("Name", TypeRef::class("System", "String"))
///     .with_attribute("RequiredAttribute");
/// assert!(markers.is_required(&name));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeNameMarkers {
    markers: Vec<String>,
}

impl AttributeNameMarkers {
    /// Creates a predicate with the given markers.
    #[must_use]
    pub fn new<S: Into<String>>(markers: impl IntoIterator<Item = S>) -> Self {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the configured markers.
    #[must_use]
    pub fn markers(&self) -> &[String] {
        &self.markers
    }
}

impl Default for AttributeNameMarkers {
    fn default() -> Self {
        Self::new(["Required", "Mandatory"])
    }
}

impl RequiredPredicate for AttributeNameMarkers {
    fn is_required(&self, property: &PropertyInfo) -> bool {
        property.attributes.iter().any(|attribute| {
            self.markers
                .iter()
                .any(|marker| attribute.contains(marker.as_str()))
        })
    }
}

/// Builds constructor and wrapper descriptors.
///
/// # Examples
///
/// ```
/// use sdkwrap_codegen::DescriptorBuilder;
///
/// let builder = DescriptorBuilder::default().with_separator("-");
/// assert_eq!(builder.function_name("Read", "Device"), "Read-Device");
/// assert_eq!(builder.handle_parameter(), "Sdk");
/// ```
#[derive(Debug)]
pub struct DescriptorBuilder {
    handle_parameter: String,
    separator: String,
    required: Box<dyn RequiredPredicate>,
}

impl Default for DescriptorBuilder {
    fn default() -> Self {
        Self {
            handle_parameter: "Sdk".to_string(),
            separator: String::new(),
            required: Box::new(AttributeNameMarkers::default()),
        }
    }
}

impl DescriptorBuilder {
    /// Creates a builder from generator configuration.
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            handle_parameter: config.handle_parameter.clone(),
            separator: config.verb_noun_separator.clone(),
            required: Box::new(AttributeNameMarkers::new(
                config.required_attribute_markers.iter().cloned(),
            )),
        }
    }

    /// Sets the name of the client-handle parameter.
    #[must_use]
    pub fn with_handle_parameter(mut self, name: impl Into<String>) -> Self {
        self.handle_parameter = name.into();
        self
    }

    /// Sets the text between verb and noun.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Replaces the required-property predicate.
    #[must_use]
    pub fn with_required_predicate(mut self, predicate: impl RequiredPredicate + 'static) -> Self {
        self.required = Box::new(predicate);
        self
    }

    /// Returns the client-handle parameter name.
    #[must_use]
    pub fn handle_parameter(&self) -> &str {
        &self.handle_parameter
    }

    /// Joins a verb and noun into a function name.
    #[must_use]
    pub fn function_name(&self, verb: &str, noun: &str) -> String {
        format!("{verb}{}{noun}", self.separator)
    }

    /// Builds the `New<Noun>` constructor for a complex type.
    ///
    /// One parameter per writable property, required when the property is a
    /// non-nullable value type or the predicate says so. The body creates an
    /// instance, assigns each explicitly supplied parameter, and emits it.
    ///
    /// # Errors
    ///
    /// Returns an error if the type or a property type has no full name, or
    /// if the catalog cannot describe the type.
    pub fn build_constructor<C>(
        &self,
        noun: &str,
        ty: &TypeRef,
        catalog: &C,
    ) -> Result<FunctionDescriptor>
    where
        C: TypeCatalog + ?Sized,
    {
        let type_name = resolve_name(ty, || format!("constructor type '{}'", ty.name))?;
        let shape = catalog.describe(ty)?;

        let mut parameters = Vec::new();
        let mut body = vec![Statement::ConstructInstance {
            variable: CONSTRUCTOR_VARIABLE.to_string(),
            type_name: type_name.clone(),
            path: ConstructionPath::select(shape),
        }];

        for (position, prop) in shape.writable_properties().enumerate() {
            let prop_type = resolve_name(prop.property_type.unwrap_nullable(), || {
                format!("property '{}' of '{type_name}'", prop.name)
            })?;

            parameters.push(ParameterSpec {
                name: prop.name.clone(),
                type_name: Some(prop_type),
                required: prop.property_type.is_non_nullable_value_type()
                    || self.required.is_required(prop),
                position,
            });
            body.push(Statement::ConditionalAssign {
                parameter: prop.name.clone(),
                variable: CONSTRUCTOR_VARIABLE.to_string(),
                property: prop.name.clone(),
            });
        }

        body.push(Statement::Emit {
            variable: CONSTRUCTOR_VARIABLE.to_string(),
        });

        Ok(FunctionDescriptor {
            name: self.function_name(CONSTRUCTOR_VERB, noun),
            kind: FunctionKind::Constructor,
            parameters,
            body,
            output_type: Some(type_name),
        })
    }

    /// Builds the `<Verb><Noun>` wrapper for an endpoint.
    ///
    /// Position 0 is the untyped client handle. Each flattened parameter
    /// follows at its index plus one. The body rebuilds every complex
    /// argument from its flattened members, then invokes the endpoint on the
    /// handle with arguments in declared order.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter, argument, or return type has no full
    /// name, or if the catalog cannot describe a rebuilt argument type.
    pub fn build_wrapper<C>(
        &self,
        verb: Verb,
        noun: &str,
        flattened: &[FlattenedParameter],
        endpoint: &EndpointDescriptor,
        catalog: &C,
    ) -> Result<FunctionDescriptor>
    where
        C: TypeCatalog + ?Sized,
    {
        let mut parameters = vec![ParameterSpec {
            name: self.handle_parameter.clone(),
            type_name: None,
            required: true,
            position: 0,
        }];

        for (index, fp) in flattened.iter().enumerate() {
            let type_name = resolve_name(fp.parameter_type.unwrap_nullable(), || {
                format!(
                    "parameter '{}' of {}",
                    fp.name,
                    endpoint.qualified_name()
                )
            })?;
            parameters.push(ParameterSpec {
                name: fp.name.clone(),
                type_name: Some(type_name),
                required: fp.is_complex || fp.parameter_type.is_non_nullable_value_type(),
                position: index + 1,
            });
        }

        let mut body = Vec::new();
        let mut arguments = Vec::with_capacity(endpoint.parameters.len());

        for (position, declared) in endpoint.parameters.iter().enumerate() {
            let members: Vec<&FlattenedParameter> = flattened
                .iter()
                .filter(|fp| fp.source_group_position == position)
                .collect();

            let passthrough = members.iter().find(|fp| !fp.is_property_sourced());
            if let Some(fp) = passthrough
                && members.len() == 1
            {
                arguments.push(fp.name.clone());
                continue;
            }

            if members.is_empty() && !is_complex(&declared.parameter_type) {
                arguments.push(declared.name.clone());
                continue;
            }

            let group_type = members
                .first()
                .map_or(&declared.parameter_type, |fp| &fp.source_group_type)
                .unwrap_nullable();
            let type_name = resolve_name(group_type, || {
                format!(
                    "argument '{}' of {}",
                    declared.name,
                    endpoint.qualified_name()
                )
            })?;
            let shape = catalog.describe(group_type)?;
            let variable = format!("obj{position}");

            body.push(Statement::ConstructInstance {
                variable: variable.clone(),
                type_name,
                path: ConstructionPath::select(shape),
            });
            for fp in &members {
                let property = fp
                    .source_property_name
                    .clone()
                    .unwrap_or_else(|| fp.name.clone());
                body.push(Statement::ConditionalAssign {
                    parameter: fp.name.clone(),
                    variable: variable.clone(),
                    property,
                });
            }
            arguments.push(variable);
        }

        body.push(Statement::InvokeMethod {
            target: self.handle_parameter.clone(),
            method: endpoint.method_name.clone(),
            arguments,
        });

        Ok(FunctionDescriptor {
            name: self.function_name(verb.as_str(), noun),
            kind: FunctionKind::Wrapper,
            parameters,
            body,
            output_type: output_type(endpoint)?,
        })
    }
}

fn resolve_name(ty: &TypeRef, context: impl FnOnce() -> String) -> Result<String> {
    ty.full_name().ok_or_else(|| Error::UnresolvableTypeName {
        context: context(),
    })
}

fn output_type(endpoint: &EndpointDescriptor) -> Result<Option<String>> {
    let payload = payload_type(&endpoint.return_type);
    if is_void_like(payload) {
        return Ok(None);
    }
    resolve_name(payload, || {
        format!("return type of {}", endpoint.qualified_name())
    })
    .map(Some)
}
