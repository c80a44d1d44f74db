//! Generator configuration.
//!
//! Configuration is read from a TOML file. Every key is optional; missing
//! keys take the defaults listed on [`GeneratorConfig`].
//!
//! # Examples
//!
//! ```
//! use sdkwrap_core::{GeneratorConfig, WriteMode};
//!
//! let config = GeneratorConfig::from_toml_str(r#"
//!     module_prefix = "NetBox"
//!     write_mode = "append"
//! "#).unwrap();
//!
//! assert_eq!(config.module_prefix, "NetBox");
//! assert_eq!(config.write_mode, WriteMode::Append);
//! assert_eq!(config.handle_parameter, "Sdk");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the working directory when no config is given.
pub const DEFAULT_CONFIG_FILE: &str = "sdkwrap.toml";

/// How generated files are written when they already exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Truncate and rewrite the file
    #[default]
    Replace,
    /// Append to the end of the file
    Append,
}

impl WriteMode {
    /// Returns the string representation of the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Append => "append",
        }
    }
}

/// Configuration for a generation run.
///
/// # Examples
///
/// ```
/// use sdkwrap_core::GeneratorConfig;
///
/// let config = GeneratorConfig::default();
/// assert_eq!(config.module_prefix, "SdkWrappers");
/// assert!(config.group_by_declaring_type);
/// assert_eq!(config.required_attribute_markers, vec!["Required", "Mandatory"]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Prefix of every generated file name.
    ///
    /// Default: `SdkWrappers`
    pub module_prefix: String,

    /// Emit one file per declaring client type instead of a single file.
    ///
    /// Default: true
    pub group_by_declaring_type: bool,

    /// Name of the leading parameter that receives the client instance.
    ///
    /// Default: `Sdk`
    pub handle_parameter: String,

    /// Text placed between verb and noun in function names.
    ///
    /// Default: empty (`ReadDevice`); `-` gives `Read-Device`.
    pub verb_noun_separator: String,

    /// Substrings of attribute type names that mark a property as required.
    ///
    /// Default: `["Required", "Mandatory"]`
    pub required_attribute_markers: Vec<String>,

    /// Only client types whose name ends with this suffix are scanned.
    ///
    /// Default: none (all exported classes)
    pub client_type_suffix: Option<String>,

    /// Only client types whose namespace ends with this suffix are scanned.
    ///
    /// Default: none
    pub client_namespace_suffix: Option<String>,

    /// Replace or append to existing output files.
    ///
    /// Default: replace
    pub write_mode: WriteMode,

    /// Write replacements to a temporary file and rename it into place.
    ///
    /// Default: true
    pub atomic_writes: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            module_prefix: "SdkWrappers".to_string(),
            group_by_declaring_type: true,
            handle_parameter: "Sdk".to_string(),
            verb_noun_separator: String::new(),
            required_attribute_markers: vec!["Required".to_string(), "Mandatory".to_string()],
            client_type_suffix: None,
            client_namespace_suffix: None,
            write_mode: WriteMode::Replace,
            atomic_writes: true,
        }
    }
}

impl GeneratorConfig {
    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the TOML is malformed, contains
    /// unknown keys, or fails validation.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| Error::ConfigError {
            message: format!("invalid TOML: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::ConfigError {
            message: format!("failed to read {}: {e}", path.display()),
        })?;
        debug!(path = %path.display(), "loaded generator config");
        Self::from_toml_str(&text)
    }

    /// Resolves configuration for a run.
    ///
    /// Uses `explicit` when given, otherwise `sdkwrap.toml` in `working_dir`
    /// if it exists, otherwise defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if a selected file cannot be loaded.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdkwrap_core::GeneratorConfig;
    ///
    /// let dir = std::env::temp_dir().join("sdkwrap-doc-no-config");
    /// let config = GeneratorConfig::resolve(None, &dir).unwrap();
    /// assert_eq!(config, GeneratorConfig::default());
    /// ```
    pub fn resolve(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate: PathBuf = working_dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            return Self::load(&candidate);
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` describing the first invalid key.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdkwrap_core::GeneratorConfig;
    ///
    /// let invalid = GeneratorConfig {
    ///     handle_parameter: "1Sdk".to_string(),
    ///     ..Default::default()
    /// };
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.module_prefix.is_empty()
            || !self
                .module_prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        {
            return Err(config_error(format!(
                "module_prefix '{}' must be non-empty and contain only letters, digits, '_', '-', or '.'",
                self.module_prefix
            )));
        }

        if !is_identifier(&self.handle_parameter) {
            return Err(config_error(format!(
                "handle_parameter '{}' is not a valid parameter name",
                self.handle_parameter
            )));
        }

        if !self
            .verb_noun_separator
            .chars()
            .all(|c| matches!(c, '-' | '_'))
        {
            return Err(config_error(format!(
                "verb_noun_separator '{}' may only contain '-' or '_'",
                self.verb_noun_separator
            )));
        }

        if self.required_attribute_markers.iter().any(String::is_empty) {
            return Err(config_error(
                "required_attribute_markers cannot contain empty strings".to_string(),
            ));
        }

        for (key, value) in [
            ("client_type_suffix", &self.client_type_suffix),
            ("client_namespace_suffix", &self.client_namespace_suffix),
        ] {
            if value.as_deref().is_some_and(str::is_empty) {
                return Err(config_error(format!("{key} cannot be empty when set")));
            }
        }

        Ok(())
    }
}

fn config_error(message: String) -> Error {
    Error::ConfigError { message }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
