//! Error types for sdkwrap.
//!
//! This module provides the error hierarchy shared by every crate in the
//! workspace. Most variants describe a failure that is local to a single
//! endpoint or type: the generation driver records them and moves on, so
//! one bad method never aborts a whole run.
//!
//! # Examples
//!
//! ```
//! use sdkwrap_core::{Error, Result};
//!
//! fn require_prefix(method: &str) -> Result<()> {
//!     if !method.starts_with("Get") {
//!         return Err(Error::UnrecognizedVerb {
//!             method: method.to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_prefix("PatchDevice").unwrap_err();
//! assert!(err.is_unrecognized_verb());
//! ```

use thiserror::Error;

/// Main error type for sdkwrap.
///
/// All errors in the system use this type, providing consistent error handling
/// across all crates in the workspace.
#[derive(Error, Debug)]
pub enum Error {
    /// Method name does not start with any recognized verb prefix.
    ///
    /// Discovery filters these methods out, so reaching naming resolution
    /// with one is a contract violation for that endpoint.
    #[error("Unrecognized verb in method name: {method}")]
    UnrecognizedVerb {
        /// The offending method name
        method: String,
    },

    /// A type has no obtainable fully qualified name.
    ///
    /// Raised for open generic parameters, anonymous or compiler-generated
    /// types, and constructed generics over such types.
    #[error("Cannot resolve a fully qualified type name for {context}")]
    UnresolvableTypeName {
        /// What was being resolved (type display name plus usage site)
        context: String,
    },

    /// The type catalog could not describe a referenced type.
    #[error("Type introspection failed for '{type_name}': {reason}")]
    TypeIntrospection {
        /// Fully qualified name of the type
        type_name: String,
        /// Why the type could not be described
        reason: String,
    },

    /// Configuration error.
    ///
    /// Raised when configuration is invalid, missing required fields,
    /// or contains contradictory settings.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Assembly metadata could not be read or parsed.
    #[error("Metadata error: {message}")]
    MetadataError {
        /// Description of the metadata failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Rendering a function descriptor to source text failed.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns `true` if this is an unrecognized verb error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdkwrap_core::Error;
    ///
    /// let err = Error::UnrecognizedVerb {
    ///     method: "ListDevices".to_string(),
    /// };
    /// assert!(err.is_unrecognized_verb());
    /// ```
    #[must_use]
    pub const fn is_unrecognized_verb(&self) -> bool {
        matches!(self, Self::UnrecognizedVerb { .. })
    }

    /// Returns `true` if a type name could not be resolved.
    #[must_use]
    pub const fn is_unresolvable_type(&self) -> bool {
        matches!(self, Self::UnresolvableTypeName { .. })
    }

    /// Returns `true` if this is a type introspection error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdkwrap_core::Error;
    ///
    /// let err = Error::TypeIntrospection {
    ///     type_name: "NetBox.Model.Site".to_string(),
    ///     reason: "not present in metadata".to_string(),
    /// };
    /// assert!(err.is_introspection_error());
    /// ```
    #[must_use]
    pub const fn is_introspection_error(&self) -> bool {
        matches!(self, Self::TypeIntrospection { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdkwrap_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "module_prefix is empty".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a metadata error.
    #[must_use]
    pub const fn is_metadata_error(&self) -> bool {
        matches!(self, Self::MetadataError { .. })
    }

    /// Returns `true` if this is a serialization error.
    #[must_use]
    pub const fn is_serialization_error(&self) -> bool {
        matches!(self, Self::SerializationError { .. })
    }

    /// Returns `true` when the error only affects the endpoint or type being
    /// generated, as opposed to the whole run.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdkwrap_core::Error;
    ///
    /// let local = Error::UnresolvableTypeName { context: "T".to_string() };
    /// assert!(local.is_generation_local());
    ///
    /// let global = Error::ConfigError { message: "bad".to_string() };
    /// assert!(!global.is_generation_local());
    /// ```
    #[must_use]
    pub const fn is_generation_local(&self) -> bool {
        matches!(
            self,
            Self::UnrecognizedVerb { .. }
                | Self::UnresolvableTypeName { .. }
                | Self::TypeIntrospection { .. }
                | Self::SerializationError { .. }
        )
    }
}

/// Result type alias for sdkwrap operations.
///
/// # Examples
///
/// ```
/// use sdkwrap_core::Result;
///
/// fn example() -> Result<i32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_verb_display() {
        let err = Error::UnrecognizedVerb {
            method: "PatchDevice".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unrecognized verb in method name: PatchDevice"
        );
        assert!(err.is_unrecognized_verb());
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_introspection_display() {
        let err = Error::TypeIntrospection {
            type_name: "NetBox.Model.Site".to_string(),
            reason: "not present in metadata".to_string(),
        };
        assert!(err.to_string().contains("NetBox.Model.Site"));
        assert!(err.to_string().contains("not present in metadata"));
        assert!(err.is_introspection_error());
    }

    #[test]
    fn test_metadata_error_with_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::MetadataError {
            message: "invalid JSON".to_string(),
            source: Some(source),
        };
        assert!(err.is_metadata_error());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_generation_local_classification() {
        assert!(
            Error::UnrecognizedVerb {
                method: "X".to_string()
            }
            .is_generation_local()
        );
        assert!(
            Error::TypeIntrospection {
                type_name: "T".to_string(),
                reason: "r".to_string()
            }
            .is_generation_local()
        );
        assert!(
            Error::SerializationError {
                message: "m".to_string()
            }
            .is_generation_local()
        );
        assert!(!Error::InvalidArgument("x".to_string()).is_generation_local());
        assert!(
            !Error::MetadataError {
                message: "m".to_string(),
                source: None
            }
            .is_generation_local()
        );
    }
}
