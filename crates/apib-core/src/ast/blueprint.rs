use serde::{Deserialize, Serialize};

use super::element::Element;

/// Root of the Blueprint AST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub metadata: Vec<Metadata>,

    #[serde(rename = "resourceGroups")]
    pub resource_groups: Vec<ResourceGroup>,

    /// Top-level content blocks. When there is one more block than resource
    /// groups, the last one holds the named data structures.
    #[serde(default)]
    pub content: Vec<Element>,
}

impl Blueprint {
    pub fn metadata_value(&self, name: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
            .map(|m| m.value.as_str())
    }

    /// The trailing data-structure block, if the document has one.
    pub fn data_structures(&self) -> Option<&Element> {
        if self.content.len() == self.resource_groups.len() + 1 {
            self.content.last()
        } else {
            None
        }
    }
}

/// A `name: value` pair from the document's metadata section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceGroup {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "uriTemplate")]
    pub uri_template: String,

    #[serde(default)]
    pub parameters: Vec<Parameter>,

    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub method: String,

    #[serde(default)]
    pub parameters: Vec<Parameter>,

    pub examples: Vec<Example>,
}

impl Action {
    /// The first request of the first example, which carries the body and
    /// header conventions the converter reads.
    pub fn first_request(&self) -> Option<&Payload> {
        self.examples.first()?.requests.first()
    }
}

/// A declared URI or action parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "type", default)]
    pub param_type: String,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub default: String,

    #[serde(default)]
    pub example: String,

    #[serde(default)]
    pub values: Vec<ParameterValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterValue {
    pub value: String,
}

/// A transaction example: requests paired with their responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub requests: Vec<Payload>,

    #[serde(default)]
    pub responses: Vec<Payload>,
}

/// A request or response. For responses `name` is the status code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub headers: Vec<Header>,

    #[serde(default)]
    pub body: String,

    #[serde(default)]
    pub content: Vec<Element>,
}

impl Payload {
    /// Value of the `Content-Type` header, matched case-insensitively.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case("content-type"))
            .map(|h| h.value.as_str())
            .filter(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    #[serde(default)]
    pub value: String,
}
