//! Type catalog trait.
//!
//! The generation pipeline never reflects over types itself. It asks a
//! `TypeCatalog` for the shape of every complex type it meets.

use crate::{Result, TypeRef, TypeShape};

/// Answers questions about the types referenced by endpoints.
///
/// Implementations are read-only during a generation run, so a single
/// catalog can be shared by the grouper, the constructor builder, and any
/// number of drivers.
///
/// # Errors
///
/// Implementations report `Error::UnresolvableTypeName` when the reference
/// has no full name and `Error::TypeIntrospection` when the type is not
/// known to the catalog.
pub trait TypeCatalog {
    /// Describes the public properties and construction options of `ty`.
    ///
    /// # Errors
    ///
    /// Returns an error if the type cannot be resolved or described.
    fn describe(&self, ty: &TypeRef) -> Result<&TypeShape>;
}

impl<C: TypeCatalog + ?Sized> TypeCatalog for &C {
    fn describe(&self, ty: &TypeRef) -> Result<&TypeShape> {
        (**self).describe(ty)
    }
}
