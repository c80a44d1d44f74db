//! PowerShell function emitter.

use super::FunctionEmitter;
use crate::descriptor::{ConstructionPath, FunctionDescriptor, ParameterSpec, Statement};
use crate::template_engine::{POWERSHELL_FUNCTION, TemplateEngine};
use sdkwrap_core::Result;
use serde::Serialize;

/// Renders descriptors as advanced PowerShell functions.
///
/// # Examples
///
/// ```
/// use sdkwrap_codegen::{FunctionDescriptor, FunctionEmitter, FunctionKind, ParameterSpec,
///     PowerShellEmitter, Statement};
///
/// let function = FunctionDescriptor {
///     name: "ReadDevice".to_string(),
///     kind: FunctionKind::Wrapper,
///     parameters: vec![ParameterSpec {
///         name: "Sdk".to_string(),
///         type_name: None,
///         required: true,
///         position: 0,
///     }],
///     body: vec![Statement::InvokeMethod {
///         target: "Sdk".to_string(),
///         method: "GetDevices".to_string(),
///         arguments: vec![],
///     }],
///     output_type: Some("NetBox.Model.Device".to_string()),
/// };
///
/// let emitter = PowerShellEmitter::new().unwrap();
/// let text = emitter.emit_function(&function).unwrap();
/// assert!(text.starts_with("function ReadDevice {"));
/// assert!(text.contains("[OutputType([NetBox.Model.Device])]"));
/// assert!(text.contains("$Sdk.GetDevices()"));
/// ```
#[derive(Debug)]
pub struct PowerShellEmitter {
    engine: TemplateEngine<'static>,
}

#[derive(Serialize)]
struct FunctionContext<'d> {
    name: &'d str,
    output_type: Option<&'d str>,
    parameters: Vec<ParameterContext<'d>>,
    body: Vec<String>,
}

#[derive(Serialize)]
struct ParameterContext<'d> {
    attribute: String,
    type_name: Option<&'d str>,
    name: &'d str,
}

impl PowerShellEmitter {
    /// Creates an emitter with the built-in function template.
    ///
    /// # Errors
    ///
    /// Returns error if the template fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
        })
    }
}

impl FunctionEmitter for PowerShellEmitter {
    fn file_extension(&self) -> &str {
        "ps1"
    }

    fn emit_function(&self, function: &FunctionDescriptor) -> Result<String> {
        let context = FunctionContext {
            name: &function.name,
            output_type: function.output_type.as_deref(),
            parameters: function
                .parameters
                .iter()
                .map(|p| ParameterContext {
                    attribute: parameter_attribute(p),
                    type_name: p.type_name.as_deref(),
                    name: &p.name,
                })
                .collect(),
            body: function.body.iter().map(statement_line).collect(),
        };

        let rendered = self.engine.render(POWERSHELL_FUNCTION, &context)?;
        Ok(rendered.trim_end().to_string())
    }
}

fn parameter_attribute(parameter: &ParameterSpec) -> String {
    if parameter.required {
        format!(
            "[Parameter(Mandatory = $true, Position = {})]",
            parameter.position
        )
    } else {
        format!("[Parameter(Position = {})]", parameter.position)
    }
}

fn statement_line(statement: &Statement) -> String {
    match statement {
        Statement::ConstructInstance {
            variable,
            type_name,
            path: ConstructionPath::DefaultConstructor,
        } => format!("${variable} = New-Object -TypeName \"{type_name}\""),
        Statement::ConstructInstance {
            variable,
            type_name,
            path: ConstructionPath::StaticFactory { method },
        } => format!("${variable} = [{type_name}]::{method}()"),
        Statement::ConditionalAssign {
            parameter,
            variable,
            property,
        } => format!(
            "if ($PSBoundParameters.ContainsKey('{parameter}')) {{ ${variable}.{property} = ${parameter} }}"
        ),
        Statement::InvokeMethod {
            target,
            method,
            arguments,
        } => {
            let args = arguments
                .iter()
                .map(|a| format!("${a}"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("${target}.{method}({args})")
        }
        Statement::Emit { variable } => format!("${variable}"),
    }
}
