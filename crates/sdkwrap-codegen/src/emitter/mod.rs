//! Descriptor serialization.
//!
//! A [`FunctionEmitter`] turns one [`FunctionDescriptor`] into source text.
//! [`render_units`] applies an emitter to a whole [`GenerationReport`],
//! producing one file per non-empty output unit.

mod powershell;

pub use powershell::PowerShellEmitter;

use crate::descriptor::FunctionDescriptor;
use crate::driver::GenerationReport;
use crate::types::{GeneratedCode, GeneratedFile};
use sdkwrap_core::{GeneratorConfig, Result};
use tracing::debug;

/// Serializes function descriptors for one target language.
pub trait FunctionEmitter {
    /// File extension without the leading dot.
    fn file_extension(&self) -> &str;

    /// Renders one function definition.
    ///
    /// # Errors
    ///
    /// Returns error if the descriptor cannot be rendered.
    fn emit_function(&self, function: &FunctionDescriptor) -> Result<String>;
}

/// Output file naming scheme.
///
/// # Examples
///
/// ```
/// use sdkwrap_codegen::FileNaming;
///
/// let naming = FileNaming::new("NetBox");
/// assert_eq!(naming.file_name(Some("DcimApi"), "ps1"), "NetBox.DcimApi.Generated.ps1");
/// assert_eq!(naming.file_name(None, "ps1"), "NetBox.Generated.ps1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNaming {
    module_prefix: String,
}

impl FileNaming {
    /// Creates a scheme with the given prefix.
    #[must_use]
    pub fn new(module_prefix: impl Into<String>) -> Self {
        Self {
            module_prefix: module_prefix.into(),
        }
    }

    /// Creates a scheme from generator configuration.
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.module_prefix.clone())
    }

    /// Returns the file name for a unit.
    #[must_use]
    pub fn file_name(&self, unit: Option<&str>, extension: &str) -> String {
        match unit {
            Some(unit) => format!("{}.{unit}.Generated.{extension}", self.module_prefix),
            None => format!("{}.Generated.{extension}", self.module_prefix),
        }
    }
}

impl Default for FileNaming {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

/// Renders every non-empty unit of `report` into a file.
///
/// Functions appear constructors first, each followed by a blank line.
///
/// # Errors
///
/// Returns the first emitter error; no partial output is returned.
pub fn render_units<E: FunctionEmitter + ?Sized>(
    emitter: &E,
    report: &GenerationReport,
    naming: &FileNaming,
) -> Result<GeneratedCode> {
    let mut code = GeneratedCode::new();

    for unit in report.units.iter().filter(|u| !u.is_empty()) {
        let mut content = String::new();
        for function in unit.functions() {
            content.push_str(&emitter.emit_function(function)?);
            content.push_str("\n\n");
        }

        let path = naming.file_name(unit.name.as_deref(), emitter.file_extension());
        debug!(path = %path, functions = unit.function_count(), "rendered unit");
        code.add_file(GeneratedFile { path, content });
    }

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::FunctionKind;
    use crate::driver::OutputUnit;
    use sdkwrap_core::Error;

    struct NameEmitter;

    impl FunctionEmitter for NameEmitter {
        fn file_extension(&self) -> &str {
            "txt"
        }

        fn emit_function(&self, function: &FunctionDescriptor) -> Result<String> {
            if function.name == "Broken" {
                return Err(Error::SerializationError {
                    message: "cannot render".to_string(),
                });
            }
            Ok(function.name.clone())
        }
    }

    fn function(name: &str, kind: FunctionKind) -> FunctionDescriptor {
        FunctionDescriptor {
            name: name.to_string(),
            kind,
            parameters: vec![],
            body: vec![],
            output_type: None,
        }
    }

    fn unit(name: Option<&str>, ctors: &[&str], wrappers: &[&str]) -> OutputUnit {
        OutputUnit {
            name: name.map(String::from),
            constructors: ctors
                .iter()
                .map(|n| function(n, FunctionKind::Constructor))
                .collect(),
            wrappers: wrappers
                .iter()
                .map(|n| function(n, FunctionKind::Wrapper))
                .collect(),
        }
    }

    #[test]
    fn test_render_units_layout() {
        let report = GenerationReport {
            units: vec![
                unit(Some("DcimApi"), &["NewNestedTenant"], &["NewSite", "ReadDevice"]),
                unit(Some("IpamApi"), &[], &["ReadVlan"]),
            ],
            failures: vec![],
        };
        let code = render_units(&NameEmitter, &report, &FileNaming::new("NetBox")).unwrap();

        assert_eq!(code.file_count(), 2);
        assert_eq!(code.files[0].path, "NetBox.DcimApi.Generated.txt");
        assert_eq!(
            code.files[0].content,
            "NewNestedTenant\n\nNewSite\n\nReadDevice\n\n"
        );
        assert_eq!(code.files[1].content, "ReadVlan\n\n");
    }

    #[test]
    fn test_empty_units_skipped() {
        let report = GenerationReport {
            units: vec![unit(Some("EmptyApi"), &[], &[]), unit(None, &[], &["ReadSite"])],
            failures: vec![],
        };
        let code = render_units(&NameEmitter, &report, &FileNaming::default()).unwrap();
        assert_eq!(code.file_count(), 1);
        assert_eq!(code.files[0].path, "SdkWrappers.Generated.txt");
    }

    #[test]
    fn test_emitter_error_fails_render() {
        let report = GenerationReport {
            units: vec![unit(Some("DcimApi"), &[], &["ReadSite", "Broken"])],
            failures: vec![],
        };
        let err = render_units(&NameEmitter, &report, &FileNaming::default()).unwrap_err();
        assert!(err.is_serialization_error());
    }

    #[test]
    fn test_dyn_emitter() {
        let emitter: Box<dyn FunctionEmitter> = Box::new(NameEmitter);
        let report = GenerationReport {
            units: vec![unit(None, &[], &["ReadSite"])],
            failures: vec![],
        };
        let code = render_units(emitter.as_ref(), &report, &FileNaming::default()).unwrap();
        assert_eq!(code.files[0].content, "ReadSite\n\n");
    }
}
