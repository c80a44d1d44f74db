//! Type metadata model for sdkwrap.
//!
//! These types describe the statically reflected surface of a compiled API
//! client: type references, the public properties of model types, and the
//! endpoints (client methods) that become wrapper functions.
//!
//! `TypeRef` is a structural reference. Two references are the same type
//! exactly when namespace, name, kind, and generic arguments match, which is
//! what the emitted-type registry relies on for deduplication.
//!
//! # Examples
//!
//! ```
//! use sdkwrap_core::TypeRef;
//!
//! let int = TypeRef::value("System", "Int32");
//! let nullable = TypeRef::nullable(int.clone());
//!
//! assert!(int.is_non_nullable_value_type());
//! assert!(!nullable.is_non_nullable_value_type());
//! assert_eq!(nullable.unwrap_nullable(), &int);
//! assert_eq!(nullable.full_name().as_deref(), Some("System.Nullable[System.Int32]"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

const SYSTEM_NAMESPACE: &str = "System";
const NULLABLE_NAME: &str = "Nullable`1";

/// Kind of a reflected type.
///
/// Struct and enum kinds are value types; everything else is a reference
/// type (or not a real type at all, like open generic parameters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// Reference type (class or record)
    #[default]
    Class,
    /// Value type (struct, including primitives like `System.Int32`)
    Struct,
    /// Enumeration
    Enum,
    /// Interface
    Interface,
    /// Single-dimensional array; the element type is the only generic argument
    Array,
    /// Open generic parameter such as `T`
    GenericParameter,
    /// `System.Void`
    Void,
}

/// Structural reference to a reflected type.
///
/// # Examples
///
/// ```
/// use sdkwrap_core::TypeRef;
///
/// let response = TypeRef::generic(
///     "System.Threading.Tasks",
///     "Task`1",
///     vec![TypeRef::class("NetBox.Model", "DeviceListResponse")],
/// );
///
/// assert_eq!(response.simple_name(), "Task");
/// assert_eq!(
///     response.full_name().as_deref(),
///     Some("System.Threading.Tasks.Task[NetBox.Model.DeviceListResponse]")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Declaring namespace, absent for global or generic-parameter types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Reflected type name, including any generic arity marker (`` List`1 ``)
    pub name: String,
    /// Type kind
    #[serde(default)]
    pub kind: TypeKind,
    /// Generic arguments in declaration order (array element for arrays)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_arguments: Vec<TypeRef>,
}

impl TypeRef {
    /// Creates a non-generic type reference.
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            namespace: Some(namespace.into()),
            name: name.into(),
            kind,
            generic_arguments: Vec::new(),
        }
    }

    /// Creates a reference-type (class) reference.
    #[must_use]
    pub fn class(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(namespace, name, TypeKind::Class)
    }

    /// Creates a value-type (struct) reference.
    #[must_use]
    pub fn value(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(namespace, name, TypeKind::Struct)
    }

    /// Creates an enumeration reference.
    #[must_use]
    pub fn enumeration(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(namespace, name, TypeKind::Enum)
    }

    /// Creates a constructed generic class reference.
    #[must_use]
    pub fn generic(
        namespace: impl Into<String>,
        name: impl Into<String>,
        arguments: Vec<Self>,
    ) -> Self {
        Self {
            generic_arguments: arguments,
            ..Self::class(namespace, name)
        }
    }

    /// Wraps a value type in `System.Nullable`1`.
    #[must_use]
    pub fn nullable(inner: Self) -> Self {
        Self {
            namespace: Some(SYSTEM_NAMESPACE.to_string()),
            name: NULLABLE_NAME.to_string(),
            kind: TypeKind::Struct,
            generic_arguments: vec![inner],
        }
    }

    /// Creates an array of `element`.
    #[must_use]
    pub fn array(element: Self) -> Self {
        Self {
            namespace: element.namespace.clone(),
            name: format!("{}[]", element.name),
            kind: TypeKind::Array,
            generic_arguments: vec![element],
        }
    }

    /// Creates an open generic parameter (`T`). It has no full name.
    #[must_use]
    pub fn generic_parameter(name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            name: name.into(),
            kind: TypeKind::GenericParameter,
            generic_arguments: Vec::new(),
        }
    }

    /// `System.Void`.
    #[must_use]
    pub fn void() -> Self {
        Self::new(SYSTEM_NAMESPACE, "Void", TypeKind::Void)
    }

    /// Returns the name without its generic arity marker.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdkwrap_core::TypeRef;
    ///
    /// assert_eq!(TypeRef::class("System.Collections.Generic", "List`1").simple_name(), "List");
    /// assert_eq!(TypeRef::class("NetBox.Model", "Site").simple_name(), "Site");
    /// ```
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.name
            .split_once('`')
            .map_or(self.name.as_str(), |(base, _)| base)
    }

    /// Returns the catalog key of the type definition (`Namespace.Name`,
    /// arity marker kept), or `None` when the name is unresolvable.
    #[must_use]
    pub fn definition_name(&self) -> Option<String> {
        if !self.has_resolvable_name() {
            return None;
        }
        Some(match &self.namespace {
            Some(ns) if !ns.is_empty() => format!("{ns}.{}", self.name),
            _ => self.name.clone(),
        })
    }

    /// Returns the fully qualified name in PowerShell type-literal form.
    ///
    /// Generic arguments are rendered as `[A,B]` and arrays as `Element[]`.
    /// Returns `None` for open generic parameters, empty or
    /// compiler-generated names, and generics over any such type.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        if self.kind == TypeKind::Array {
            let element = self.generic_arguments.first()?;
            return element.full_name().map(|name| format!("{name}[]"));
        }
        if !self.has_resolvable_name() {
            return None;
        }

        let base = match &self.namespace {
            Some(ns) if !ns.is_empty() => format!("{ns}.{}", self.simple_name()),
            _ => self.simple_name().to_string(),
        };

        if self.generic_arguments.is_empty() {
            return Some(base);
        }

        let arguments = self
            .generic_arguments
            .iter()
            .map(Self::full_name)
            .collect::<Option<Vec<_>>>()?;
        Some(format!("{base}[{}]", arguments.join(",")))
    }

    /// Returns `true` for struct and enum kinds.
    #[must_use]
    pub const fn is_value_type(&self) -> bool {
        matches!(self.kind, TypeKind::Struct | TypeKind::Enum)
    }

    /// Returns `true` for enumerations.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self.kind, TypeKind::Enum)
    }

    /// Returns `true` for `System.Void`.
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.kind == TypeKind::Void
            || (self.namespace.as_deref() == Some(SYSTEM_NAMESPACE) && self.name == "Void")
    }

    /// Returns `true` for constructed generics (arrays excluded).
    #[must_use]
    pub fn is_generic(&self) -> bool {
        self.kind != TypeKind::Array && !self.generic_arguments.is_empty()
    }

    /// Returns the wrapped type if this is `System.Nullable`1`.
    #[must_use]
    pub fn nullable_underlying(&self) -> Option<&Self> {
        if self.namespace.as_deref() == Some(SYSTEM_NAMESPACE)
            && self.name == NULLABLE_NAME
            && self.generic_arguments.len() == 1
        {
            self.generic_arguments.first()
        } else {
            None
        }
    }

    /// Strips one `Nullable` wrapper if present.
    #[must_use]
    pub fn unwrap_nullable(&self) -> &Self {
        self.nullable_underlying().unwrap_or(self)
    }

    /// Returns `true` for value types that are not `Nullable`-wrapped.
    #[must_use]
    pub fn is_non_nullable_value_type(&self) -> bool {
        self.is_value_type() && self.nullable_underlying().is_none()
    }

    fn has_resolvable_name(&self) -> bool {
        self.kind != TypeKind::GenericParameter
            && !self.name.is_empty()
            && !self.name.contains('<')
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.full_name() {
            Some(name) => f.write_str(&name),
            None => write!(f, "<unresolved {}>", self.name),
        }
    }
}

const fn default_true() -> bool {
    true
}

/// Public instance property of a model type.
///
/// # Examples
///
/// ```
/// use sdkwrap_core::{PropertyInfo, TypeRef};
///
/// let prop = PropertyInfo::new("Name", TypeRef::class("System", "String"));
/// assert!(prop.can_write);
/// assert!(prop.attributes.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyInfo {
    /// Property name
    pub name: String,
    /// Declared property type
    #[serde(rename = "type")]
    pub property_type: TypeRef,
    /// Whether the property has a public setter
    #[serde(default = "default_true")]
    pub can_write: bool,
    /// Type names of custom attributes applied to the property
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
}

impl PropertyInfo {
    /// Creates a writable property without attributes.
    #[must_use]
    pub fn new(name: impl Into<String>, property_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            property_type,
            can_write: true,
            attributes: Vec::new(),
        }
    }

    /// Marks the property as read-only.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.can_write = false;
        self
    }

    /// Adds a custom attribute type name.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }
}

/// Construction-relevant shape of a model type.
///
/// Properties are kept in declaration order; flattening order depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeShape {
    /// Public instance properties in declaration order
    #[serde(default)]
    pub properties: Vec<PropertyInfo>,
    /// Whether a public parameterless constructor exists
    #[serde(default = "default_true")]
    pub has_parameterless_constructor: bool,
    /// Public static parameterless factory returning the type, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_factory: Option<String>,
}

impl TypeShape {
    /// Creates a shape with a parameterless constructor.
    #[must_use]
    pub const fn new(properties: Vec<PropertyInfo>) -> Self {
        Self {
            properties,
            has_parameterless_constructor: true,
            static_factory: None,
        }
    }

    /// Marks the type as lacking a parameterless constructor, optionally
    /// naming its static factory.
    #[must_use]
    pub fn without_default_constructor(mut self, static_factory: Option<String>) -> Self {
        self.has_parameterless_constructor = false;
        self.static_factory = static_factory;
        self
    }

    /// Iterates over properties that have a public setter.
    pub fn writable_properties(&self) -> impl Iterator<Item = &PropertyInfo> {
        self.properties.iter().filter(|p| p.can_write)
    }
}

/// One declared parameter of an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterInfo {
    /// Parameter name
    pub name: String,
    /// Declared parameter type
    #[serde(rename = "type")]
    pub parameter_type: TypeRef,
    /// Zero-based position in the declared parameter list
    pub position: usize,
}

/// One discoverable API operation: a public instance method of a client type.
///
/// Created once per reflected method and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use sdkwrap_core::{EndpointDescriptor, TypeRef};
///
/// let endpoint = EndpointDescriptor::new(
///     "DcimApi",
///     "CreateSite",
///     TypeRef::class("NetBox.Model", "Site"),
///     [("request", TypeRef::class("NetBox.Model", "SiteRequest"))],
/// );
///
/// assert_eq!(endpoint.parameters[0].position, 0);
/// assert_eq!(endpoint.parameters[0].name, "request");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// Simple name of the declaring client type (e.g. `DcimApi`)
    pub declaring_type: String,
    /// Method name (e.g. `GetDevices`)
    pub method_name: String,
    /// Declared return type
    pub return_type: TypeRef,
    /// Parameters in declaration order
    pub parameters: Vec<ParameterInfo>,
}

impl EndpointDescriptor {
    /// Creates an endpoint, assigning parameter positions from iteration order.
    #[must_use]
    pub fn new<N: Into<String>>(
        declaring_type: impl Into<String>,
        method_name: impl Into<String>,
        return_type: TypeRef,
        parameters: impl IntoIterator<Item = (N, TypeRef)>,
    ) -> Self {
        let parameters = parameters
            .into_iter()
            .enumerate()
            .map(|(position, (name, parameter_type))| ParameterInfo {
                name: name.into(),
                parameter_type,
                position,
            })
            .collect();

        Self {
            declaring_type: declaring_type.into(),
            method_name: method_name.into(),
            return_type,
            parameters,
        }
    }

    /// Returns `Declaring.Method`, used to label failures and logs.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.declaring_type, self.method_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_simple() {
        let site = TypeRef::class("NetBox.Model", "Site");
        assert_eq!(site.full_name().as_deref(), Some("NetBox.Model.Site"));
        assert_eq!(site.definition_name().as_deref(), Some("NetBox.Model.Site"));
    }

    #[test]
    fn test_full_name_generic_strips_arity() {
        let list = TypeRef::generic(
            "System.Collections.Generic",
            "Dictionary`2",
            vec![
                TypeRef::class("System", "String"),
                TypeRef::value("System", "Int32"),
            ],
        );
        assert_eq!(
            list.full_name().as_deref(),
            Some("System.Collections.Generic.Dictionary[System.String,System.Int32]")
        );
        assert_eq!(
            list.definition_name().as_deref(),
            Some("System.Collections.Generic.Dictionary`2")
        );
    }

    #[test]
    fn test_full_name_array() {
        let devices = TypeRef::array(TypeRef::class("NetBox.Model", "Device"));
        assert_eq!(devices.full_name().as_deref(), Some("NetBox.Model.Device[]"));
        assert!(!devices.is_generic());
    }

    #[test]
    fn test_unresolvable_names() {
        assert!(TypeRef::generic_parameter("T").full_name().is_none());
        assert!(TypeRef::class("", "").full_name().is_none());
        assert!(
            TypeRef::class("App", "<>f__AnonymousType0`2")
                .full_name()
                .is_none()
        );

        let open = TypeRef::generic(
            "System.Collections.Generic",
            "List`1",
            vec![TypeRef::generic_parameter("T")],
        );
        assert!(open.full_name().is_none());
        assert!(open.definition_name().is_some());
    }

    #[test]
    fn test_global_namespace() {
        let ty = TypeRef {
            namespace: None,
            name: "Widget".to_string(),
            kind: TypeKind::Class,
            generic_arguments: vec![],
        };
        assert_eq!(ty.full_name().as_deref(), Some("Widget"));
    }

    #[test]
    fn test_nullable_helpers() {
        let guid = TypeRef::value("System", "Guid");
        let nullable = TypeRef::nullable(guid.clone());

        assert_eq!(nullable.nullable_underlying(), Some(&guid));
        assert_eq!(nullable.unwrap_nullable(), &guid);
        assert_eq!(guid.unwrap_nullable(), &guid);
        assert!(nullable.is_value_type());
        assert!(!nullable.is_non_nullable_value_type());
        assert!(guid.is_non_nullable_value_type());
    }

    #[test]
    fn test_value_type_kinds() {
        assert!(TypeRef::enumeration("NetBox.Model", "Status").is_value_type());
        assert!(TypeRef::enumeration("NetBox.Model", "Status").is_enum());
        assert!(!TypeRef::class("System", "String").is_value_type());
        assert!(!TypeRef::class("System", "String").is_non_nullable_value_type());
    }

    #[test]
    fn test_void_detection() {
        assert!(TypeRef::void().is_void());
        assert!(TypeRef::class("System", "Void").is_void());
        assert!(!TypeRef::class("NetBox", "Void").is_void());
    }

    #[test]
    fn test_structural_identity() {
        let a = TypeRef::class("NetBox.Model", "Tag");
        let b = TypeRef::class("NetBox.Model", "Tag");
        let c = TypeRef::class("NetBox.Other", "Tag");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_type_ref_deserialize_defaults() {
        let ty: TypeRef =
            serde_json::from_str(r#"{"namespace": "NetBox.Model", "name": "Site"}"#).unwrap();
        assert_eq!(ty.kind, TypeKind::Class);
        assert!(ty.generic_arguments.is_empty());

        let ty: TypeRef =
            serde_json::from_str(r#"{"name": "T", "kind": "generic_parameter"}"#).unwrap();
        assert_eq!(ty.kind, TypeKind::GenericParameter);
    }

    #[test]
    fn test_property_builders() {
        let prop = PropertyInfo::new("Id", TypeRef::value("System", "Int32"))
            .read_only()
            .with_attribute("KeyAttribute");
        assert!(!prop.can_write);
        assert_eq!(prop.attributes, vec!["KeyAttribute".to_string()]);
    }

    #[test]
    fn test_writable_properties() {
        let shape = TypeShape::new(vec![
            PropertyInfo::new("Name", TypeRef::class("System", "String")),
            PropertyInfo::new("Id", TypeRef::value("System", "Int32")).read_only(),
        ]);
        let names: Vec<_> = shape.writable_properties().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Name"]);
    }

    #[test]
    fn test_shape_without_default_constructor() {
        let shape = TypeShape::new(vec![]).without_default_constructor(Some("Create".into()));
        assert!(!shape.has_parameterless_constructor);
        assert_eq!(shape.static_factory.as_deref(), Some("Create"));
    }

    #[test]
    fn test_endpoint_positions() {
        let endpoint = EndpointDescriptor::new(
            "IpamApi",
            "UpdateVlan",
            TypeRef::class("NetBox.Model", "Vlan"),
            [
                ("id", TypeRef::value("System", "Int32")),
                ("request", TypeRef::class("NetBox.Model", "VlanRequest")),
            ],
        );
        let positions: Vec<_> = endpoint.parameters.iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![0, 1]);
        assert_eq!(endpoint.qualified_name(), "IpamApi.UpdateVlan");
    }
}
