use crate::ast::Element;
use crate::error::TransformError;
use crate::swagger::{Schema, SchemaOrRef, SchemaType};

use super::classify::{TypeKind, classify};
use super::naming::definition_name;

/// Element tag of the content node that holds a payload's structure.
pub const DATA_STRUCTURE: &str = "dataStructure";

/// Derive the schema of a request or response payload from its content nodes.
///
/// Only the first `dataStructure` node is considered. Payloads without one
/// yield the empty schema.
pub fn derive_schema(content: &[Element]) -> Result<SchemaOrRef, TransformError> {
    let Some(node) = content.iter().find(|c| c.element == DATA_STRUCTURE) else {
        return Ok(SchemaOrRef::empty());
    };
    let payload = node
        .first_child()
        .ok_or_else(|| TransformError::structural("dataStructure node without content"))?;
    value_schema(payload)
}

/// Schema describing a single value element.
pub fn value_schema(element: &Element) -> Result<SchemaOrRef, TransformError> {
    match classify(&element.element) {
        TypeKind::Primitive(primitive) => Ok(SchemaOrRef::of_type(primitive.schema_type())),
        TypeKind::Object => Ok(SchemaOrRef::of_type(SchemaType::Object)),
        TypeKind::Array => Ok(array_schema(element)?.into()),
        TypeKind::Enum => Ok(enum_schema(element)?.into()),
        TypeKind::Reference(name) => Ok(SchemaOrRef::definition(&definition_name(name))),
    }
}

/// `{type: array, items}` from the first nested element type. Untyped
/// arrays hold strings.
pub fn array_schema(element: &Element) -> Result<Schema, TransformError> {
    let items = match element.first_child() {
        Some(item) => value_schema(item)?,
        None => SchemaOrRef::of_type(SchemaType::String),
    };
    Ok(Schema::array_of(items))
}

/// `{type, enum}` from the literal values of an enum element. The type is
/// taken from the first literal's element.
pub fn enum_schema(element: &Element) -> Result<Schema, TransformError> {
    let literals = element.children();
    let first = literals
        .first()
        .ok_or_else(|| TransformError::structural("enum without values"))?;
    let TypeKind::Primitive(primitive) = classify(&first.element) else {
        return Err(TransformError::structural(format!(
            "enum values must be primitive, found `{}`",
            first.element
        )));
    };

    Ok(Schema {
        schema_type: Some(primitive.schema_type()),
        enum_values: literals
            .iter()
            .filter_map(|literal| literal.literal().cloned())
            .collect(),
        ..Default::default()
    })
}
