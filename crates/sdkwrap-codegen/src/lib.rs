//! Wrapper-function generation for compiled API clients.
//!
//! Transforms endpoint metadata into function descriptors and serializes
//! them as PowerShell using Handlebars templates.
//!
//! # Pipeline
//!
//! 1. [`naming`] derives the verb and noun of each function
//! 2. [`grouping`] and [`flatten`] lift complex parameters to a flat call surface
//! 3. [`nested`] finds the nested complex types that need constructor functions
//! 4. [`builder`] produces constructor and wrapper [`FunctionDescriptor`]s
//! 5. [`driver`] runs the above per endpoint and collects output units
//! 6. [`emitter`] serializes descriptors to source text
//!
//! # Examples
//!
//! ```
//! use sdkwrap_codegen::{DescriptorBuilder, GenerationDriver};
//! use sdkwrap_core::{EndpointDescriptor, TypeRef};
//! use sdkwrap_introspector::MetadataCatalog;
//!
//! let catalog = MetadataCatalog::default();
//! let endpoint = EndpointDescriptor::new(
//!     "DcimApi",
//!     "GetDevices",
//!     TypeRef::class("NetBox.Model", "DeviceListResponse"),
//!     Vec::<(String, TypeRef)>::new(),
//! );
//!
//! let driver = GenerationDriver::new(&catalog, DescriptorBuilder::default());
//! let report = driver.run(&[endpoint]);
//! assert_eq!(report.units[0].wrappers[0].name, "ReadDevice");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod builder;
pub mod classifier;
pub mod descriptor;
pub mod driver;
pub mod emitter;
pub mod flatten;
pub mod grouping;
pub mod naming;
pub mod nested;
pub mod template_engine;
pub mod types;

pub use builder::{AttributeNameMarkers, DescriptorBuilder, RequiredPredicate};
pub use classifier::{TypeClass, classify};
pub use descriptor::{ConstructionPath, FunctionDescriptor, FunctionKind, ParameterSpec, Statement};
pub use driver::{GenerationDriver, GenerationFailure, GenerationReport, OutputUnit};
pub use emitter::{FileNaming, FunctionEmitter, PowerShellEmitter, render_units};
pub use flatten::{FlattenedParameter, flatten_parameters};
pub use grouping::{ParameterGroup, group_parameters};
pub use naming::{Verb, select_endpoint_noun, select_noun, select_verb};
pub use nested::{EmittedTypeRegistry, discover_nested_types};
pub use types::{GeneratedCode, GeneratedFile};
