use crate::ast::Blueprint;
use crate::error::TransformError;
use crate::swagger::{Info, SWAGGER_VERSION, SwaggerSpec};

use super::definitions::build_definitions;
use super::paths::process_resource_groups;
use super::security::SecurityRegistry;

/// Convert a Blueprint AST into a Swagger 2.0 document.
///
/// Security definitions are collected per call, so repeated conversions
/// never share state. Any structural problem aborts the whole conversion.
pub fn convert(blueprint: &Blueprint) -> Result<SwaggerSpec, TransformError> {
    let mut registry = SecurityRegistry::new();

    // Phase 1: Resource groups into tags and paths
    let groups = process_resource_groups(blueprint, &mut registry)?;

    // Phase 2: Trailing data structures into definitions
    let definitions = blueprint
        .data_structures()
        .map(build_definitions)
        .transpose()?;

    // Phase 3: Document metadata
    let info = Info {
        title: blueprint.name.clone(),
        description: blueprint.description.clone(),
        version: blueprint.metadata_value("VERSION").map(str::to_string),
    };
    let host = blueprint
        .metadata_value("HOST")
        .map(HostParts::parse)
        .unwrap_or_default();

    log::debug!(
        "converted {} paths, {} definitions, {} security schemes",
        groups.paths.len(),
        definitions.as_ref().map_or(0, |d| d.len()),
        registry.len()
    );

    Ok(SwaggerSpec {
        swagger: SWAGGER_VERSION.to_string(),
        info,
        host: host.host,
        base_path: host.base_path,
        schemes: host.schemes,
        tags: groups.tags,
        paths: groups.paths,
        definitions,
        security_definitions: registry.into_definitions(),
    })
}

/// `HOST` metadata split into Swagger's `schemes`, `host` and `basePath`.
#[derive(Debug, Clone, Default, PartialEq)]
struct HostParts {
    host: Option<String>,
    base_path: Option<String>,
    schemes: Vec<String>,
}

impl HostParts {
    fn parse(value: &str) -> Self {
        let value = value.trim();
        let (schemes, rest) = match value.split_once("://") {
            Some((scheme, rest)) => (vec![scheme.to_ascii_lowercase()], rest),
            None => (Vec::new(), value),
        };
        let (host, path) = match rest.find('/') {
            Some(pos) => (&rest[..pos], &rest[pos..]),
            None => (rest, ""),
        };
        let path = path.trim_end_matches('/');

        Self {
            host: (!host.is_empty()).then(|| host.to_string()),
            base_path: (!path.is_empty()).then(|| path.to_string()),
            schemes,
        }
    }
}
