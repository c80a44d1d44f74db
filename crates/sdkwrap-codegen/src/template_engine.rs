//! Template engine for script rendering using Handlebars.
//!
//! Templates are compiled into the binary and rendered in strict mode, so
//! every key a template references must be present in the context (a `null`
//! value is fine). HTML escaping is disabled since output is script source.
//!
//! # Examples
//!
//! ```
//! use sdkwrap_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let mut engine = TemplateEngine::new().unwrap();
//! engine.register_template_string("greeting", "Write-Output \"{{name}}\"").unwrap();
//! let text = engine.render("greeting", &json!({"name": "<Sdk>"})).unwrap();
//! assert_eq!(text, "Write-Output \"<Sdk>\"");
//! ```

use handlebars::Handlebars;
use sdkwrap_core::{Error, Result};
use serde::Serialize;

/// Name of the built-in PowerShell function template.
pub const POWERSHELL_FUNCTION: &str = "powershell/function";

/// Handlebars wrapper with the built-in templates registered.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates an engine with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns error if a built-in template fails to compile.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_powershell_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    fn register_powershell_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        handlebars
            .register_template_string(
                POWERSHELL_FUNCTION,
                include_str!("../templates/powershell/function.ps1.hbs"),
            )
            .map_err(|e| Error::SerializationError {
                message: format!("Failed to register powershell function template: {e}"),
            })
    }

    /// Renders a registered template.
    ///
    /// # Errors
    ///
    /// Returns error if the template is unknown, a referenced key is
    /// missing, or the context cannot be serialized.
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::SerializationError {
                message: format!("Template rendering failed: {e}"),
            })
    }

    /// Registers an additional template.
    ///
    /// # Errors
    ///
    /// Returns error if the template does not compile.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::SerializationError {
                message: format!("Failed to register template '{name}': {e}"),
            })
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}
