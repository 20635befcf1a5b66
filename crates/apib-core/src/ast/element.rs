use serde::{Deserialize, Serialize};

/// A node of the data-structure element tree (`dataStructure`, `object`,
/// `member`, `array`, `enum`, primitives and named type references).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub element: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ElementMeta>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ElementAttributes>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ElementContent>,
}

/// What an element carries: nested elements, a `member` key/value pair, or a literal sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementContent {
    Elements(Vec<Element>),
    Member(Box<MemberContent>),
    Literal(serde_json::Value),
}

/// Key/value payload of a `member` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberContent {
    pub key: Element,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Element>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Text>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Text>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementAttributes {
    /// Either a plain string list or a refract `array` of `string` elements.
    #[serde(
        rename = "typeAttributes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub type_attributes: Option<serde_json::Value>,
}

/// A string that may be written plainly or wrapped in a refract `string` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Text {
    Plain(String),
    Element(Box<Element>),
}

impl Text {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Text::Plain(s) => Some(s),
            Text::Element(el) => el.literal_str(),
        }
    }
}

impl Element {
    /// Nested elements, empty when the content is a member, a literal, or absent.
    pub fn children(&self) -> &[Element] {
        match &self.content {
            Some(ElementContent::Elements(items)) => items,
            _ => &[],
        }
    }

    pub fn first_child(&self) -> Option<&Element> {
        self.children().first()
    }

    pub fn member(&self) -> Option<&MemberContent> {
        match &self.content {
            Some(ElementContent::Member(member)) => Some(member),
            _ => None,
        }
    }

    pub fn literal(&self) -> Option<&serde_json::Value> {
        match &self.content {
            Some(ElementContent::Literal(value)) => Some(value),
            _ => None,
        }
    }

    pub fn literal_str(&self) -> Option<&str> {
        self.literal().and_then(|v| v.as_str())
    }

    /// Identifier from `meta.id`.
    pub fn id(&self) -> Option<&str> {
        self.meta.as_ref()?.id.as_ref()?.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.meta.as_ref()?.description.as_ref()?.as_str()
    }

    /// Whether `attributes.typeAttributes` lists the given marker (e.g. `required`).
    pub fn has_type_attribute(&self, name: &str) -> bool {
        let Some(attrs) = self
            .attributes
            .as_ref()
            .and_then(|a| a.type_attributes.as_ref())
        else {
            return false;
        };

        let entries = match attrs {
            serde_json::Value::Array(items) => items.as_slice(),
            serde_json::Value::Object(refract) => match refract.get("content") {
                Some(serde_json::Value::Array(items)) => items.as_slice(),
                _ => return false,
            },
            _ => return false,
        };

        entries.iter().any(|entry| match entry {
            serde_json::Value::String(s) => s == name,
            serde_json::Value::Object(el) => {
                el.get("content").and_then(|c| c.as_str()) == Some(name)
            }
            _ => false,
        })
    }
}
