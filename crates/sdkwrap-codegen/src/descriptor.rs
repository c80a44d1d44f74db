//! Serializer-agnostic function descriptors.
//!
//! A [`FunctionDescriptor`] is an abstract function: a name, typed positional
//! parameters, a flat list of body statements, and an optional output type.
//! Emitters turn descriptors into source text for a target language.

use sdkwrap_core::TypeShape;
use serde::Serialize;

/// How an instance of a model type is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConstructionPath {
    /// Public parameterless constructor
    DefaultConstructor,
    /// Static parameterless factory method
    StaticFactory {
        /// Factory method name
        method: String,
    },
}

impl ConstructionPath {
    /// Name used when a type has neither a parameterless constructor nor a
    /// recorded factory.
    pub const FALLBACK_FACTORY: &'static str = "new";

    /// Selects the construction path for a type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdkwrap_codegen::ConstructionPath;
    /// use sdkwrap_core::TypeShape;
    ///
    /// let with_ctor = TypeShape::new(vec![]);
    /// assert_eq!(ConstructionPath::select(&with_ctor), ConstructionPath::DefaultConstructor);
    ///
    /// let factory_only = TypeShape::new(vec![]).without_default_constructor(None);
    /// assert_eq!(
    ///     ConstructionPath::select(&factory_only),
    ///     ConstructionPath::StaticFactory { method: "new".to_string() }
    /// );
    /// ```
    #[must_use]
    pub fn select(shape: &TypeShape) -> Self {
        if shape.has_parameterless_constructor {
            Self::DefaultConstructor
        } else {
            Self::StaticFactory {
                method: shape
                    .static_factory
                    .clone()
                    .unwrap_or_else(|| Self::FALLBACK_FACTORY.to_string()),
            }
        }
    }
}

/// One statement of a generated function body.
///
/// Variable and parameter names are bare identifiers; emitters add any
/// sigils their language needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "statement", rename_all = "snake_case")]
pub enum Statement {
    /// `variable = new type_name`
    ConstructInstance {
        /// Variable receiving the instance
        variable: String,
        /// Fully qualified type name
        type_name: String,
        /// Construction path
        path: ConstructionPath,
    },
    /// If `parameter` was explicitly supplied, `variable.property = parameter`
    ConditionalAssign {
        /// Call-surface parameter checked and read
        parameter: String,
        /// Instance variable written
        variable: String,
        /// Property written
        property: String,
    },
    /// `target.method(arguments...)`, result emitted
    InvokeMethod {
        /// Variable holding the receiver
        target: String,
        /// Method name
        method: String,
        /// Argument variables in positional order
        arguments: Vec<String>,
    },
    /// Emit `variable` as the function result
    Emit {
        /// Variable to emit
        variable: String,
    },
}

/// One positional parameter of a generated function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSpec {
    /// Parameter name
    pub name: String,
    /// Type constraint, absent for untyped parameters
    pub type_name: Option<String>,
    /// Whether the caller must supply it
    pub required: bool,
    /// Zero-based position
    pub position: usize,
}

/// Whether a function builds a model instance or wraps an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKind {
    /// `New<Noun>` constructor for a complex type
    Constructor,
    /// `<Verb><Noun>` wrapper for an endpoint
    Wrapper,
}

/// An abstract generated function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDescriptor {
    /// Function name
    pub name: String,
    /// Constructor or wrapper
    pub kind: FunctionKind,
    /// Parameters in position order
    pub parameters: Vec<ParameterSpec>,
    /// Body statements in execution order
    pub body: Vec<Statement>,
    /// Output type annotation, absent for void
    pub output_type: Option<String>,
}

impl FunctionDescriptor {
    /// Looks up a parameter by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Number of `ConstructInstance` statements in the body.
    #[must_use]
    pub fn construction_count(&self) -> usize {
        self.body
            .iter()
            .filter(|s| matches!(s, Statement::ConstructInstance { .. }))
            .count()
    }

    /// Returns the endpoint invocation, if the body has one.
    #[must_use]
    pub fn invocation(&self) -> Option<&Statement> {
        self.body
            .iter()
            .find(|s| matches!(s, Statement::InvokeMethod { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_default_constructor() {
        let shape = TypeShape::new(vec![]);
        assert_eq!(
            ConstructionPath::select(&shape),
            ConstructionPath::DefaultConstructor
        );
    }

    #[test]
    fn test_select_recorded_factory() {
        let shape = TypeShape::new(vec![]).without_default_constructor(Some("Create".into()));
        assert_eq!(
            ConstructionPath::select(&shape),
            ConstructionPath::StaticFactory {
                method: "Create".to_string()
            }
        );
    }

    #[test]
    fn test_factory_ignored_when_constructor_exists() {
        let mut shape = TypeShape::new(vec![]);
        shape.static_factory = Some("Create".to_string());
        assert_eq!(
            ConstructionPath::select(&shape),
            ConstructionPath::DefaultConstructor
        );
    }

    fn descriptor() -> FunctionDescriptor {
        FunctionDescriptor {
            name: "NewSite".to_string(),
            kind: FunctionKind::Wrapper,
            parameters: vec![ParameterSpec {
                name: "Sdk".to_string(),
                type_name: None,
                required: true,
                position: 0,
            }],
            body: vec![
                Statement::ConstructInstance {
                    variable: "obj0".to_string(),
                    type_name: "NetBox.Model.SiteRequest".to_string(),
                    path: ConstructionPath::DefaultConstructor,
                },
                Statement::InvokeMethod {
                    target: "Sdk".to_string(),
                    method: "CreateSite".to_string(),
                    arguments: vec!["obj0".to_string()],
                },
            ],
            output_type: Some("NetBox.Model.Site".to_string()),
        }
    }

    #[test]
    fn test_descriptor_queries() {
        let d = descriptor();
        assert!(d.parameter("Sdk").is_some());
        assert!(d.parameter("Name").is_none());
        assert_eq!(d.construction_count(), 1);
        assert!(matches!(
            d.invocation(),
            Some(Statement::InvokeMethod { method, .. }) if method == "CreateSite"
        ));
    }

    #[test]
    fn test_statement_json_shape() {
        let value = serde_json::to_value(&descriptor().body[0]).unwrap();
        assert_eq!(value["statement"], "construct_instance");
        assert_eq!(value["path"]["kind"], "default_constructor");
    }
}
