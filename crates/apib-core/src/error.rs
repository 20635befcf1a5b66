use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("blueprint parser reported error {code}: {message}")]
    Upstream { code: i64, message: String },
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("malformed AST: {0}")]
    Structural(String),

    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("definition name collision: `{first}` and `{second}` both map to `{name}`")]
    DefinitionCollision {
        name: String,
        first: String,
        second: String,
    },

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl TransformError {
    pub(crate) fn structural(message: impl Into<String>) -> Self {
        Self::Structural(message.into())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },
}
