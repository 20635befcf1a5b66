use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::OutputFormat;
use crate::error::ConfigError;

/// Top-level project configuration loaded from `.apib.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApibConfig {
    /// Path to the Blueprint AST (JSON or YAML). Standard input when unset.
    pub input: Option<String>,
    /// Path of the converted document. Standard output when unset.
    pub output: Option<String>,
    pub format: OutputFormat,
    pub encoding: Encoding,
    pub pretty: bool,
}

/// Text encoding of the converted document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    #[default]
    Json,
    Yaml,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".apib.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<ApibConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ApibConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# apib configuration
# input: api.ast.json   # Blueprint AST (JSON or YAML); stdin when omitted
# output: swagger.json  # stdout when omitted
format: swagger         # swagger
encoding: json          # json | yaml
pretty: false
"#
}
