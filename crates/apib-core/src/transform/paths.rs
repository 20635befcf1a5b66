use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::ast::{Blueprint, Resource};
use crate::error::TransformError;
use crate::swagger::{PathItem, Tag};

use super::operation::build_operation;
use super::parameters::{merge_params, path_params};
use super::security::SecurityRegistry;

/// Query expansions (`{?a,b}` and `{&c}`) of a URI template.
static QUERY_EXPRESSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[?&][^}]*\}").expect("valid query expression regex"));

/// Tags and paths gathered from the resource groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceGroups {
    pub tags: Vec<Tag>,
    pub paths: IndexMap<String, PathItem>,
}

/// Path key of a URI template: the template without its query expansions.
pub fn clean_path(uri_template: &str) -> String {
    QUERY_EXPRESSION_RE.replace_all(uri_template, "").into_owned()
}

/// Walk every resource group and resource, building tags and path items.
///
/// Resources whose templates share a path key are merged into one path
/// item; a method declared by both keeps the later resource's operation.
pub fn process_resource_groups(
    blueprint: &Blueprint,
    registry: &mut SecurityRegistry,
) -> Result<ResourceGroups, TransformError> {
    let mut result = ResourceGroups::default();

    for group in &blueprint.resource_groups {
        let tag_name = if group.name.is_empty() {
            blueprint.name.clone()
        } else {
            group.name.clone()
        };

        if !result.tags.iter().any(|t| t.name == tag_name) {
            result.tags.push(Tag {
                name: tag_name.clone(),
                description: group.description.clone(),
            });
        }

        for resource in &group.resources {
            let path = clean_path(&resource.uri_template);
            log::debug!("resource {} -> {}", resource.uri_template, path);

            let operations = build_path_item(resource, &tag_name, registry)?;
            let item = result.paths.entry(path).or_default();
            for (method, operation) in operations {
                item.insert(method, operation);
            }
        }
    }

    Ok(result)
}

fn build_path_item(
    resource: &Resource,
    tag_name: &str,
    registry: &mut SecurityRegistry,
) -> Result<PathItem, TransformError> {
    let resource_params = path_params(&resource.uri_template, &resource.parameters);
    let mut item = PathItem::new();

    for action in &resource.actions {
        let mut operation = build_operation(action, &resource.uri_template, registry)?;
        operation.tags = vec![tag_name.to_string()];
        let action_params = std::mem::take(&mut operation.parameters);
        operation.parameters = merge_params(&resource_params, action_params);
        item.insert(action.method.to_lowercase(), operation);
    }

    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swagger::ParameterLocation;

    fn blueprint(json: &str) -> Blueprint {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path("/widgets/{id}{?page,limit}"), "/widgets/{id}");
        assert_eq!(clean_path("/widgets{?q}{&sort}"), "/widgets");
        assert_eq!(clean_path("/widgets/{id}"), "/widgets/{id}");
    }

    #[test]
    fn test_group_without_name_uses_title() {
        let bp = blueprint(
            r#"{
                "name": "Widget API",
                "resourceGroups": [
                    {"name": "", "description": "Misc", "resources": [
                        {"uriTemplate": "/ping", "actions": [{"name": "Ping", "method": "GET", "examples": []}]}
                    ]}
                ]
            }"#,
        );
        let groups = process_resource_groups(&bp, &mut SecurityRegistry::new()).unwrap();

        assert_eq!(groups.tags.len(), 1);
        assert_eq!(groups.tags[0].name, "Widget API");
        assert_eq!(groups.paths["/ping"]["get"].tags, vec!["Widget API"]);
    }

    #[test]
    fn test_resources_sharing_a_path_are_merged() {
        let bp = blueprint(
            r#"{
                "name": "Widget API",
                "resourceGroups": [{"name": "Widgets", "resources": [
                    {"uriTemplate": "/widgets{?page}", "actions": [
                        {"name": "List", "description": "first", "method": "GET", "examples": []}
                    ]},
                    {"uriTemplate": "/widgets", "actions": [
                        {"name": "List again", "description": "second", "method": "GET", "examples": []},
                        {"name": "Create", "method": "POST", "examples": []}
                    ]}
                ]}]
            }"#,
        );
        let groups = process_resource_groups(&bp, &mut SecurityRegistry::new()).unwrap();

        assert_eq!(groups.paths.len(), 1);
        let item = &groups.paths["/widgets"];
        let methods: Vec<&str> = item.keys().map(String::as_str).collect();
        assert_eq!(methods, vec!["get", "post"]);
        assert_eq!(item["get"].description, "second");
        assert_eq!(item["get"].operation_id, "listAgain");
    }

    #[test]
    fn test_resource_parameters_are_used_without_action_parameters() {
        let bp = blueprint(
            r#"{
                "name": "Widget API",
                "resourceGroups": [{"name": "Widgets", "resources": [
                    {
                        "uriTemplate": "/widgets/{id}{?fields}",
                        "parameters": [{"name": "id", "type": "number", "required": true, "description": "Widget id"}],
                        "actions": [{"name": "Get", "method": "GET", "examples": []}]
                    }
                ]}]
            }"#,
        );
        let groups = process_resource_groups(&bp, &mut SecurityRegistry::new()).unwrap();

        let params = &groups.paths["/widgets/{id}"]["get"].parameters;
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "id");
        assert_eq!(params[0].location, ParameterLocation::Path);
        assert_eq!(params[0].param_type.as_deref(), Some("number"));
        assert_eq!(params[1].name, "fields");
        assert_eq!(params[1].location, ParameterLocation::Query);
    }

    #[test]
    fn test_duplicate_group_names_share_a_tag() {
        let bp = blueprint(
            r#"{
                "name": "Widget API",
                "resourceGroups": [
                    {"name": "Widgets", "description": "one", "resources": []},
                    {"name": "Widgets", "description": "two", "resources": []}
                ]
            }"#,
        );
        let groups = process_resource_groups(&bp, &mut SecurityRegistry::new()).unwrap();
        assert_eq!(groups.tags.len(), 1);
        assert_eq!(groups.tags[0].description, "one");
    }
}
