//! Assembly metadata introspection.
//!
//! Loads the JSON metadata document describing a compiled API client,
//! answers type-shape questions through [`MetadataCatalog`], and discovers
//! the endpoints that become wrapper functions.
//!
//! # Examples
//!
//! ```
//! use sdkwrap_introspector::{AssemblyMetadata, Introspector};
//!
//! let metadata = AssemblyMetadata::from_json_str(r#"{
//!     "assembly": "NetBoxSdk",
//!     "types": [{
//!         "namespace": "NetBox.Api",
//!         "name": "DcimApi",
//!         "methods": [{
//!             "name": "GetDevices",
//!             "return_type": {"namespace": "NetBox.Model", "name": "DeviceListResponse"}
//!         }]
//!     }]
//! }"#).unwrap();
//!
//! let introspector = Introspector::new(metadata);
//! let endpoints = introspector.discover_endpoints();
//! assert_eq!(endpoints.len(), 1);
//! assert_eq!(endpoints[0].method_name, "GetDevices");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod catalog;
pub mod discovery;
pub mod metadata;

pub use catalog::MetadataCatalog;
pub use discovery::{AssemblySummary, ClientSummary, DiscoveryFilter, Introspector};
pub use metadata::{AssemblyMetadata, MethodDefinition, MethodParameter, TypeDefinition};
