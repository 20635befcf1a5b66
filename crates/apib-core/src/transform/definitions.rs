use std::collections::HashMap;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::ast::Element;
use crate::error::TransformError;
use crate::swagger::{Schema, SchemaOrRef, SchemaType};

use super::body_schema::{DATA_STRUCTURE, array_schema, enum_schema};
use super::classify::{TypeKind, classify};
use super::naming::definition_name;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

static DATE_TIME_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z$",
        r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d+Z$",
        r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}[+-]\d{2}:\d{2}$",
        r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d+[+-]\d{2}:\d{2}$",
        r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}$",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("valid date-time regex"))
    .collect()
});

/// `format` annotation for a primitive sample value, if it looks like a date.
pub fn sample_format(sample: &str) -> Option<&'static str> {
    if DATE_RE.is_match(sample) {
        Some("date")
    } else if DATE_TIME_RES.iter().any(|re| re.is_match(sample)) {
        Some("date-time")
    } else {
        None
    }
}

/// Convert the trailing data-structure block into named definitions.
pub fn build_definitions(block: &Element) -> Result<IndexMap<String, Schema>, TransformError> {
    let mut builder = DefinitionBuilder::default();
    for node in block.children() {
        if node.element != DATA_STRUCTURE {
            log::debug!("skipping `{}` element in data structures", node.element);
            continue;
        }
        let structure = node
            .first_child()
            .ok_or_else(|| TransformError::structural("dataStructure node without content"))?;
        builder.add_structure(structure)?;
    }
    Ok(builder.definitions)
}

#[derive(Debug, Default)]
struct DefinitionBuilder {
    definitions: IndexMap<String, Schema>,
    /// Source identifier behind each definition name.
    sources: HashMap<String, String>,
}

impl DefinitionBuilder {
    fn add_structure(&mut self, structure: &Element) -> Result<(), TransformError> {
        let id = structure.id().ok_or_else(|| {
            TransformError::structural(format!(
                "`{}` data structure without an identifier",
                structure.element
            ))
        })?;

        let mut extends = None;
        let schema = match classify(&structure.element) {
            TypeKind::Primitive(_) => {
                log::debug!("skipping primitive data structure {id}");
                return Ok(());
            }
            TypeKind::Object => object_schema(structure)?,
            TypeKind::Array => array_schema(structure)?,
            TypeKind::Enum => enum_schema(structure)?,
            TypeKind::Reference(parent) => {
                let parent_name = self.claim(parent)?;
                let own = object_schema(structure)?;
                let schema = Schema {
                    schema_type: Some(SchemaType::Object),
                    all_of: vec![
                        SchemaOrRef::definition(&parent_name),
                        Schema {
                            properties: own.properties,
                            required: own.required,
                            ..Default::default()
                        }
                        .into(),
                    ],
                    ..Default::default()
                };
                extends = Some(parent_name);
                schema
            }
        };

        let name = self.claim(id)?;
        log::debug!("definition {name} from {id}");
        let mut schema = Schema {
            title: Some(id.to_string()),
            ..schema
        };

        // A parent stub may already exist; keep its position and discriminator.
        match self.definitions.get_mut(&name) {
            Some(existing) => {
                schema.discriminator = existing.discriminator.take();
                *existing = schema;
            }
            None => {
                self.definitions.insert(name, schema);
            }
        }

        if let Some(parent) = extends {
            self.mark_extended(&parent);
        }
        Ok(())
    }

    /// Resolve the definition name of a source identifier, failing when a
    /// different identifier already owns that name.
    fn claim(&mut self, source: &str) -> Result<String, TransformError> {
        let name = definition_name(source);
        match self.sources.get(&name) {
            Some(first) if first != source => Err(TransformError::DefinitionCollision {
                name,
                first: first.clone(),
                second: source.to_string(),
            }),
            Some(_) => Ok(name),
            None => {
                self.sources.insert(name.clone(), source.to_string());
                Ok(name)
            }
        }
    }

    /// Flag a definition as extended, creating a stub when it is not defined yet.
    fn mark_extended(&mut self, name: &str) {
        self.definitions
            .entry(name.to_string())
            .or_default()
            .discriminator = Some(String::new());
    }
}

/// `{type: object, properties, required}` from the members of a structure.
fn object_schema(structure: &Element) -> Result<Schema, TransformError> {
    let mut schema = Schema::of_type(SchemaType::Object);

    for member in structure.children() {
        if member.element != "member" {
            log::debug!("skipping `{}` element inside structure", member.element);
            continue;
        }
        let content = member
            .member()
            .ok_or_else(|| TransformError::structural("member without key/value content"))?;
        let key = content
            .key
            .literal_str()
            .ok_or_else(|| TransformError::structural("member key is not a string"))?;

        let property = member_schema(member, content.value.as_ref())?;
        schema.properties.insert(key.to_string(), property);

        if member.has_type_attribute("required") {
            schema.required.push(key.to_string());
        }
    }

    Ok(schema)
}

/// Schema of one object member. Members without a value type are strings.
fn member_schema(
    member: &Element,
    value: Option<&Element>,
) -> Result<SchemaOrRef, TransformError> {
    let Some(value) = value else {
        return Ok(Schema {
            description: member.description().map(str::to_string),
            ..Schema::of_type(SchemaType::String)
        }
        .into());
    };
    let mut schema = match classify(&value.element) {
        TypeKind::Reference(name) => return Ok(SchemaOrRef::definition(&definition_name(name))),
        TypeKind::Primitive(primitive) => Schema {
            format: value
                .literal_str()
                .and_then(sample_format)
                .map(str::to_string),
            ..Schema::of_type(primitive.schema_type())
        },
        TypeKind::Object => Schema::of_type(SchemaType::Object),
        TypeKind::Array => array_schema(value)?,
        TypeKind::Enum => enum_schema(value)?,
    };
    schema.description = member.description().map(str::to_string);
    Ok(schema.into())
}
