//! Simple/complex type classification.
//!
//! Simple types pass straight through to the call surface. Complex types are
//! flattened into their properties and rebuilt inside the generated body.

use sdkwrap_core::TypeRef;
use serde::Serialize;

const SYSTEM_NAMESPACE: &str = "System";

/// Names in the `System` namespace that are always simple.
pub const SIMPLE_SYSTEM_TYPES: [&str; 18] = [
    "String",
    "Boolean",
    "Byte",
    "SByte",
    "Int16",
    "UInt16",
    "Int32",
    "UInt32",
    "Int64",
    "UInt64",
    "Single",
    "Double",
    "Decimal",
    "DateTime",
    "DateTimeOffset",
    "Guid",
    "TimeSpan",
    "Uri",
];

/// Classification of a parameter or property type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeClass {
    /// Passed through as a single call-surface parameter
    Simple,
    /// Flattened into its properties and reconstructed
    Complex,
}

impl TypeClass {
    /// Returns `true` for [`TypeClass::Complex`].
    #[inline]
    #[must_use]
    pub const fn is_complex(self) -> bool {
        matches!(self, Self::Complex)
    }
}

/// Classifies a type.
///
/// `Nullable` wrappers are removed first. Enums and the primitive-like
/// `System` types are simple; everything else is complex.
///
/// # Examples
///
/// ```
/// use sdkwrap_codegen::{TypeClass, classify};
/// use sdkwrap_core::TypeRef;
///
/// assert_eq!(classify(&TypeRef::class("System", "String")), TypeClass::Simple);
/// assert_eq!(
///     classify(&TypeRef::nullable(TypeRef::value("System", "Int32"))),
///     TypeClass::Simple
/// );
/// assert_eq!(classify(&TypeRef::class("NetBox.Model", "SiteRequest")), TypeClass::Complex);
/// ```
#[must_use]
pub fn classify(ty: &TypeRef) -> TypeClass {
    let ty = ty.unwrap_nullable();

    if ty.is_enum() {
        return TypeClass::Simple;
    }

    let is_simple_system = ty.namespace.as_deref() == Some(SYSTEM_NAMESPACE)
        && ty.generic_arguments.is_empty()
        && SIMPLE_SYSTEM_TYPES.contains(&ty.name.as_str());

    if is_simple_system {
        TypeClass::Simple
    } else {
        TypeClass::Complex
    }
}

/// Shorthand for `classify(ty).is_complex()`.
#[inline]
#[must_use]
pub fn is_complex(ty: &TypeRef) -> bool {
    classify(ty).is_complex()
}
