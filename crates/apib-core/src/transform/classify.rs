use crate::swagger::SchemaType;

/// Built-in scalar element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    Number,
    String,
    Boolean,
    Integer,
}

impl PrimitiveType {
    pub fn from_element(name: &str) -> Option<Self> {
        match name {
            "number" => Some(PrimitiveType::Number),
            "string" => Some(PrimitiveType::String),
            "boolean" => Some(PrimitiveType::Boolean),
            "integer" => Some(PrimitiveType::Integer),
            _ => None,
        }
    }

    pub fn schema_type(self) -> SchemaType {
        match self {
            PrimitiveType::Number => SchemaType::Number,
            PrimitiveType::String => SchemaType::String,
            PrimitiveType::Boolean => SchemaType::Boolean,
            PrimitiveType::Integer => SchemaType::Integer,
        }
    }
}

/// Category of an element name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind<'a> {
    Primitive(PrimitiveType),
    Array,
    Object,
    Enum,
    /// A named data structure, by its source identifier.
    Reference(&'a str),
}

impl TypeKind<'_> {
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeKind::Primitive(_))
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, TypeKind::Array | TypeKind::Object | TypeKind::Enum)
    }
}

/// Categorize an element name. Anything that is neither primitive nor
/// structural names another data structure.
pub fn classify(element: &str) -> TypeKind<'_> {
    if let Some(primitive) = PrimitiveType::from_element(element) {
        return TypeKind::Primitive(primitive);
    }
    match element {
        "array" => TypeKind::Array,
        "object" => TypeKind::Object,
        "enum" => TypeKind::Enum,
        other => TypeKind::Reference(other),
    }
}
