//! Output formatters for CLI commands.
//!
//! Every command result is `Serialize`; the same value is printed as
//! indented JSON, compact JSON, or a colored key/value outline.

use anyhow::Result;
use colored::Colorize;
use sdkwrap_core::cli::OutputFormat;
use serde::Serialize;

/// Formats `data` according to `format`.
///
/// # Examples
///
/// ```
/// use sdkwrap_cli::formatters::format_output;
/// use sdkwrap_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     assembly: String,
///     endpoints: usize,
/// }
///
/// let summary = Summary { assembly: "NetBoxSdk".to_string(), endpoints: 7 };
/// let output = format_output(&summary, OutputFormat::Json)?;
/// assert!(output.contains("\"assembly\": \"NetBoxSdk\""));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Formats data as indented JSON.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Formats data as single-line JSON.
    pub fn format_compact<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, json};

    /// Formats data as single-line JSON, suitable for piping.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        json::format_compact(data)
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use serde_json::Value;
    use std::fmt::Write;

    /// Formats data as a colored outline.
    ///
    /// Objects become `key: value` lines, arrays become `- item` lines, and
    /// nesting is shown by two-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        match &value {
            Value::Object(_) | Value::Array(_) => write_block(&mut out, &value, 0)?,
            scalar => out.push_str(&scalar_text(scalar)),
        }
        Ok(out.trim_end().to_string())
    }

    fn write_block(out: &mut String, value: &Value, indent: usize) -> Result<()> {
        let pad = "  ".repeat(indent);
        match value {
            Value::Object(map) => {
                for (key, item) in map {
                    if is_nested(item) {
                        writeln!(out, "{pad}{}:", key.blue().bold())?;
                        write_block(out, item, indent + 1)?;
                    } else {
                        writeln!(out, "{pad}{}: {}", key.blue().bold(), scalar_text(item))?;
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    if is_nested(item) {
                        writeln!(out, "{pad}-")?;
                        write_block(out, item, indent + 1)?;
                    } else {
                        writeln!(out, "{pad}- {}", scalar_text(item))?;
                    }
                }
            }
            scalar => writeln!(out, "{pad}{}", scalar_text(scalar))?,
        }
        Ok(())
    }

    fn is_nested(value: &Value) -> bool {
        match value {
            Value::Object(map) => !map.is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => false,
        }
    }

    fn scalar_text(value: &Value) -> String {
        match value {
            Value::Null => "none".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) => s.green().to_string(),
            Value::Array(_) => "[]".dimmed().to_string(),
            Value::Object(_) => "{}".dimmed().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Client {
        name: String,
        endpoints: Vec<String>,
    }

    #[derive(Serialize)]
    struct Summary {
        assembly: String,
        type_count: usize,
        grouped: bool,
        clients: Vec<Client>,
        notes: Option<String>,
    }

    fn summary() -> Summary {
        Summary {
            assembly: "NetBoxSdk".to_string(),
            type_count: 14,
            grouped: true,
            clients: vec![Client {
                name: "DcimApi".to_string(),
                endpoints: vec!["GetDevices".to_string(), "CreateSite".to_string()],
            }],
            notes: None,
        }
    }

    #[test]
    fn test_json_format() {
        let output = json::format(&summary()).unwrap();
        assert!(output.contains("\"assembly\": \"NetBoxSdk\""));
        assert!(output.contains("\"type_count\": 14"));
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_text_format_is_single_line() {
        let output = text::format(&summary()).unwrap();
        assert!(!output.contains('\n'));
        assert!(output.contains("\"assembly\":\"NetBoxSdk\""));
    }

    #[test]
    fn test_pretty_format_outline() {
        colored::control::set_override(false);
        let output = pretty::format(&summary()).unwrap();
        assert!(output.contains("assembly: NetBoxSdk"));
        assert!(output.contains("type_count: 14"));
        assert!(output.contains("clients:\n  -\n    endpoints:\n      - GetDevices\n"));
        assert!(output.contains("\n    name: DcimApi"));
        assert!(output.contains("notes: none"));
        assert!(!output.ends_with('\n'));
    }

    #[test]
    fn test_pretty_scalar() {
        colored::control::set_override(false);
        assert_eq!(pretty::format(&42).unwrap(), "42");
    }

    #[test]
    fn test_format_output_dispatch() {
        let data = summary();
        assert!(
            format_output(&data, OutputFormat::Json)
                .unwrap()
                .contains("\"grouped\": true")
        );
        assert!(
            format_output(&data, OutputFormat::Text)
                .unwrap()
                .contains("\"grouped\":true")
        );
        assert!(
            format_output(&data, OutputFormat::Pretty)
                .unwrap()
                .contains("grouped")
        );
    }
}
