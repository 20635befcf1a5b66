use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Prefix of every local definition reference.
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// A JSON Schema type keyword value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

/// A reference or inline schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Schema(Box<Schema>),
}

impl SchemaOrRef {
    /// Reference to a named entry of the document's `definitions`.
    pub fn definition(name: &str) -> Self {
        SchemaOrRef::Ref {
            ref_path: format!("{DEFINITIONS_PREFIX}{name}"),
        }
    }

    pub fn of_type(schema_type: SchemaType) -> Self {
        SchemaOrRef::Schema(Box::new(Schema::of_type(schema_type)))
    }

    /// The `{}` schema, used when a payload declares no structure.
    pub fn empty() -> Self {
        SchemaOrRef::Schema(Box::default())
    }
}

impl From<Schema> for SchemaOrRef {
    fn from(schema: Schema) -> Self {
        SchemaOrRef::Schema(Box::new(schema))
    }
}

/// The Swagger 2.0 subset of JSON Schema produced by the converter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    // Array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaOrRef>>,

    // Object properties
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaOrRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    // Enum values
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<serde_json::Value>,

    // Composition
    #[serde(rename = "allOf", default, skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<SchemaOrRef>,

    /// Present (possibly empty) on definitions extended by another via `allOf`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
}

impl Schema {
    pub fn of_type(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Default::default()
        }
    }

    pub fn array_of(items: SchemaOrRef) -> Self {
        Self {
            schema_type: Some(SchemaType::Array),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_serialization() {
        let value = serde_json::to_value(SchemaOrRef::definition("Widget")).unwrap();
        assert_eq!(value, serde_json::json!({"$ref": "#/definitions/Widget"}));
    }

    #[test]
    fn test_empty_schema_serializes_to_empty_object() {
        let value = serde_json::to_value(SchemaOrRef::empty()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn test_array_schema() {
        insta::assert_json_snapshot!(Schema::array_of(SchemaOrRef::of_type(SchemaType::Integer)), @r#"
        {
          "type": "array",
          "items": {
            "type": "integer"
          }
        }
        "#);
    }

    #[test]
    fn test_untagged_deserialization() {
        let reference: SchemaOrRef =
            serde_json::from_str(r##"{"$ref": "#/definitions/Widget"}"##).unwrap();
        assert_eq!(reference, SchemaOrRef::definition("Widget"));

        let inline: SchemaOrRef = serde_json::from_str(r#"{"type": "string"}"#).unwrap();
        assert_eq!(inline, SchemaOrRef::of_type(SchemaType::String));
    }
}
