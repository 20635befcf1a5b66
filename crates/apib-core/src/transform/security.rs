use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::ast::Header;
use crate::swagger::{ApiKeyLocation, SecurityRequirement, SecurityScheme};

/// ` {security:<type>}` marker embedded in a request header value.
static SECURITY_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" \{security:([^}]+)\}").expect("valid security marker regex"));

/// Security definitions collected during one conversion, keyed by scheme name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityRegistry {
    schemes: IndexMap<String, SecurityScheme>,
}

impl SecurityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scheme. The first registration of a name wins.
    pub fn register(&mut self, name: &str, scheme: SecurityScheme) {
        self.schemes.entry(name.to_string()).or_insert(scheme);
    }

    pub fn get(&self, name: &str) -> Option<&SecurityScheme> {
        self.schemes.get(name)
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    pub fn into_definitions(self) -> IndexMap<String, SecurityScheme> {
        self.schemes
    }
}

/// Scan request headers for security markers, registering each scheme and
/// returning the operation's security requirements.
///
/// For `Authorization: token {security:apiKey}` the scheme is named `token`
/// and has type `apiKey`.
pub fn extract_security(
    headers: &[Header],
    registry: &mut SecurityRegistry,
) -> Vec<SecurityRequirement> {
    let mut requirements = Vec::new();

    for header in headers {
        let Some(captures) = SECURITY_MARKER_RE.captures(&header.value) else {
            continue;
        };
        let scheme_type = &captures[1];
        let scheme_name = SECURITY_MARKER_RE.replace(&header.value, "").trim().to_string();
        if scheme_name.is_empty() {
            log::warn!("ignoring unnamed security marker on header {}", header.name);
            continue;
        }

        registry.register(
            &scheme_name,
            SecurityScheme {
                location: ApiKeyLocation::Header,
                name: header.name.clone(),
                scheme_type: scheme_type.to_string(),
            },
        );

        let mut requirement = SecurityRequirement::new();
        requirement.insert(scheme_name, Vec::new());
        requirements.push(requirement);
    }

    requirements
}
