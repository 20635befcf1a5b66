use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Location of an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyLocation {
    Header,
}

/// A security scheme definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityScheme {
    #[serde(rename = "in")]
    pub location: ApiKeyLocation,

    /// Name of the header carrying the credential.
    pub name: String,

    #[serde(rename = "type")]
    pub scheme_type: String,
}

/// A security requirement: map of scheme name → required scopes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;
