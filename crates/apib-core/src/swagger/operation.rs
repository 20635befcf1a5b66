use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::parameter::Parameter;
use super::schema::SchemaOrRef;
use super::security::SecurityRequirement;

/// Operations of one path, keyed by lower-cased HTTP method.
pub type PathItem = IndexMap<String, Operation>;

/// An API operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Operation {
    pub description: String,

    pub summary: String,

    pub consumes: Vec<String>,

    pub produces: Vec<String>,

    pub parameters: Vec<Parameter>,

    pub responses: IndexMap<String, Response>,

    #[serde(rename = "operationId")]
    pub operation_id: String,

    pub tags: Vec<String>,

    pub security: Vec<SecurityRequirement>,
}

/// A response entry, keyed by status in [`Operation::responses`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,
    pub schema: SchemaOrRef,
}
