//! Core types, traits, and errors for sdkwrap.
//!
//! This crate provides the foundational types and abstractions used across
//! all other crates in the sdkwrap workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - Type metadata model (`TypeRef`, `PropertyInfo`, `TypeShape`, `EndpointDescriptor`)
//! - Error hierarchy with contextual information
//! - The `TypeCatalog` trait answering type questions during generation
//! - Generator configuration and CLI value types

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod cli;
mod config;
mod error;
pub mod traits;
mod types;

pub use config::{DEFAULT_CONFIG_FILE, GeneratorConfig, WriteMode};
pub use error::{Error, Result};
pub use traits::TypeCatalog;
pub use types::{
    EndpointDescriptor, ParameterInfo, PropertyInfo, TypeKind, TypeRef, TypeShape,
};
