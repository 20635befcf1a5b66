pub mod blueprint;
pub mod element;

pub use blueprint::*;
pub use element::{Element, ElementAttributes, ElementContent, ElementMeta, MemberContent, Text};

use serde::Deserialize;

use crate::error::ParseError;

/// The Blueprint parser's result envelope: `{ast, error, warnings}`.
#[derive(Debug, Deserialize)]
struct ParseResult {
    ast: Blueprint,
    #[serde(default)]
    error: Option<Annotation>,
    #[serde(default)]
    warnings: Vec<Annotation>,
}

#[derive(Debug, Deserialize)]
struct Annotation {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

/// Decode a Blueprint AST from JSON.
pub fn from_json(input: &str) -> Result<Blueprint, ParseError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    from_value(value)
}

/// Decode a Blueprint AST from YAML.
pub fn from_yaml(input: &str) -> Result<Blueprint, ParseError> {
    let value: serde_json::Value = serde_yaml_ng::from_str(input)?;
    from_value(value)
}

/// Decode a Blueprint AST from an already-parsed value, accepting either the
/// bare AST or the parser's result envelope.
pub fn from_value(value: serde_json::Value) -> Result<Blueprint, ParseError> {
    if value.get("ast").is_none() {
        return Ok(serde_json::from_value(value)?);
    }

    let result: ParseResult = serde_json::from_value(value)?;
    if let Some(error) = result.error.filter(|e| e.code != 0) {
        return Err(ParseError::Upstream {
            code: error.code,
            message: error.message,
        });
    }
    for warning in &result.warnings {
        log::warn!("blueprint warning {}: {}", warning.code, warning.message);
    }
    Ok(result.ast)
}
