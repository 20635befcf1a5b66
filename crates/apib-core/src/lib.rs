pub mod ast;
pub mod config;
pub mod error;
pub mod swagger;
pub mod transform;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use ast::Blueprint;
use error::TransformError;

/// Output formats the converter can produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Swagger,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Swagger => "swagger",
        }
    }

    /// Look up the formatter responsible for this output format.
    pub fn formatter(&self) -> Box<dyn Formatter> {
        match self {
            OutputFormat::Swagger => Box::new(SwaggerFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("swagger") {
            Ok(OutputFormat::Swagger)
        } else {
            Err(TransformError::UnsupportedFormat(s.to_string()))
        }
    }
}

/// Trait for formatters that render a Blueprint AST into an output document.
pub trait Formatter {
    fn format(&self, blueprint: &Blueprint) -> Result<serde_json::Value, TransformError>;
}

/// Renders the Swagger 2.0 document.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwaggerFormatter;

impl Formatter for SwaggerFormatter {
    fn format(&self, blueprint: &Blueprint) -> Result<serde_json::Value, TransformError> {
        let spec = transform::convert(blueprint)?;
        Ok(serde_json::to_value(&spec)?)
    }
}

/// Convert a Blueprint AST into the requested output format.
pub fn render(
    blueprint: &Blueprint,
    format: OutputFormat,
) -> Result<serde_json::Value, TransformError> {
    format.formatter().format(blueprint)
}

/// Convert a Blueprint AST into an output format named at runtime.
pub fn render_named(
    blueprint: &Blueprint,
    format: &str,
) -> Result<serde_json::Value, TransformError> {
    render(blueprint, format.parse()?)
}
