//! Core traits for sdkwrap.
//!
//! # Module Structure
//!
//! - `catalog` - Type catalog answering construction-shape questions
//!
//! # Examples
//!
//! ```
//! use sdkwrap_core::traits::TypeCatalog;
//! use sdkwrap_core::{Error, PropertyInfo, Result, TypeRef, TypeShape};
//!
//! struct SingleType {
//!     shape: TypeShape,
//! }
//!
//! impl TypeCatalog for SingleType {
//!     fn describe(&self, ty: &TypeRef) -> Result<&TypeShape> {
//!         if ty.name == "Site" {
//!             Ok(&self.shape)
//!         } else {
//!             Err(Error::TypeIntrospection {
//!                 type_name: ty.to_string(),
//!                 reason: "unknown type".to_string(),
//!             })
//!         }
//!     }
//! }
//!
//! let catalog = SingleType {
//!     shape: TypeShape::new(vec![PropertyInfo::new("Name", TypeRef::class("System", "String"))]),
//! };
//! let shape = catalog.describe(&TypeRef::class("NetBox.Model", "Site")).unwrap();
//! assert_eq!(shape.properties.len(), 1);
//! ```

mod catalog;

pub use catalog::TypeCatalog;
