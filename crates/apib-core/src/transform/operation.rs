use crate::ast::{Action, Payload};
use crate::error::TransformError;
use crate::swagger::{Operation, Response, SchemaOrRef, SchemaType};

use super::body_schema::derive_schema;
use super::naming::{operation_id, route_operation_id};
use super::parameters::action_params;
use super::security::{SecurityRegistry, extract_security};

/// Responses of this content type are always plain strings.
pub const TEXT_PLAIN: &str = "text/plain";

/// Response key used when a response carries no status.
const DEFAULT_RESPONSE: &str = "default";

/// Build the operation for one action.
///
/// `parameters` holds the action's own parameters; the caller merges them
/// with the resource's. Security schemes found in the first request are
/// registered in `registry`.
pub fn build_operation(
    action: &Action,
    uri_template: &str,
    registry: &mut SecurityRegistry,
) -> Result<Operation, TransformError> {
    let mut op = Operation {
        description: action.description.clone(),
        summary: action.description.clone(),
        operation_id: action_operation_id(action, uri_template),
        ..Default::default()
    };

    for example in &action.examples {
        for request in &example.requests {
            if let Some(content_type) = request.content_type() {
                push_unique(&mut op.consumes, content_type);
            }
        }

        for response in &example.responses {
            if let Some(content_type) = response.content_type() {
                push_unique(&mut op.produces, content_type);
            }
            let key = if response.name.is_empty() {
                DEFAULT_RESPONSE.to_string()
            } else {
                response.name.clone()
            };
            op.responses.insert(key, build_response(response)?);
        }
    }

    op.parameters = action_params(action)?;

    if let Some(request) = action.first_request() {
        op.security = extract_security(&request.headers, registry);
    }

    Ok(op)
}

fn build_response(response: &Payload) -> Result<Response, TransformError> {
    let schema = if response.content_type() == Some(TEXT_PLAIN) {
        SchemaOrRef::of_type(SchemaType::String)
    } else {
        derive_schema(&response.content)?
    };

    Ok(Response {
        description: response.description.clone(),
        schema,
    })
}

fn action_operation_id(action: &Action, uri_template: &str) -> String {
    let id = operation_id(&action.name);
    if id.is_empty() {
        route_operation_id(&action.method, uri_template)
    } else {
        id
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swagger::ParameterLocation;

    fn action(json: &str) -> Action {
        serde_json::from_str(json).unwrap()
    }

    const RETRIEVE: &str = r#"{
        "name": "Retrieve a Widget",
        "description": "Fetch one widget.",
        "method": "GET",
        "examples": [
            {
                "requests": [{"headers": [{"name": "Accept", "value": "application/json"}]}],
                "responses": [
                    {
                        "name": "200",
                        "description": "The widget",
                        "headers": [{"name": "Content-Type", "value": "application/json"}],
                        "content": [{"element": "dataStructure", "content": [{"element": "Widget"}]}]
                    },
                    {
                        "name": "404",
                        "headers": [{"name": "content-type", "value": "text/plain"}],
                        "content": [{"element": "dataStructure", "content": [{"element": "Error"}]}]
                    }
                ]
            },
            {
                "requests": [],
                "responses": [
                    {"name": "200", "headers": [{"name": "Content-Type", "value": "application/json"}]}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_basic_operation() {
        let mut registry = SecurityRegistry::new();
        let op = build_operation(&action(RETRIEVE), "/widgets/{id}", &mut registry).unwrap();

        assert_eq!(op.description, "Fetch one widget.");
        assert_eq!(op.summary, op.description);
        assert_eq!(op.operation_id, "retrieveAWidget");
        assert!(op.consumes.is_empty());
        assert_eq!(op.produces, vec!["application/json", "text/plain"]);
        assert!(op.security.is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_text_plain_response_is_string() {
        let mut registry = SecurityRegistry::new();
        let op = build_operation(&action(RETRIEVE), "/widgets/{id}", &mut registry).unwrap();

        let not_found = &op.responses["404"];
        assert_eq!(not_found.schema, SchemaOrRef::of_type(SchemaType::String));
    }

    #[test]
    fn test_later_example_overwrites_response() {
        let mut registry = SecurityRegistry::new();
        let op = build_operation(&action(RETRIEVE), "/widgets/{id}", &mut registry).unwrap();

        let keys: Vec<&str> = op.responses.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["200", "404"]);
        assert_eq!(op.responses["200"].schema, SchemaOrRef::empty());
    }

    #[test]
    fn test_consumes_are_deduplicated() {
        let op = build_operation(
            &action(
                r#"{
                    "name": "Create",
                    "method": "POST",
                    "examples": [
                        {"requests": [
                            {"headers": [{"name": "Content-Type", "value": "application/json"}]},
                            {"headers": [{"name": "Content-Type", "value": "application/xml"}]}
                        ], "responses": []},
                        {"requests": [
                            {"headers": [{"name": "Content-Type", "value": "application/json"}]}
                        ], "responses": []}
                    ]
                }"#,
            ),
            "/widgets",
            &mut SecurityRegistry::new(),
        )
        .unwrap();

        assert_eq!(op.consumes, vec!["application/json", "application/xml"]);
        assert!(op.responses.is_empty());
    }

    #[test]
    fn test_security_and_header_parameter() {
        let mut registry = SecurityRegistry::new();
        let op = build_operation(
            &action(
                r#"{
                    "name": "Delete",
                    "method": "DELETE",
                    "examples": [{
                        "requests": [{"headers": [{"name": "Authorization", "value": "token {security:apiKey}"}]}],
                        "responses": [{"name": "204"}]
                    }]
                }"#,
            ),
            "/widgets/{id}",
            &mut registry,
        )
        .unwrap();

        assert_eq!(op.security.len(), 1);
        assert!(op.security[0].contains_key("token"));
        assert_eq!(registry.get("token").unwrap().scheme_type, "apiKey");

        let header = op
            .parameters
            .iter()
            .find(|p| p.location == ParameterLocation::Header)
            .expect("templated header becomes a parameter");
        assert_eq!(header.name, "Authorization");
    }

    #[test]
    fn test_unnamed_action_uses_route() {
        let op = build_operation(
            &action(r#"{"method": "GET", "examples": []}"#),
            "/widgets/{id}",
            &mut SecurityRegistry::new(),
        )
        .unwrap();
        assert_eq!(op.operation_id, "getWidgets");
    }

    #[test]
    fn test_action_name_without_letters_uses_route() {
        let op = build_operation(
            &action(r#"{"name": "!!!", "method": "POST", "examples": []}"#),
            "/notes",
            &mut SecurityRegistry::new(),
        )
        .unwrap();
        assert_eq!(op.operation_id, "postNotes");
    }

    #[test]
    fn test_unnamed_response_uses_default_key() {
        let op = build_operation(
            &action(r#"{"name": "Ping", "method": "GET", "examples": [{"responses": [{"description": "pong"}]}]}"#),
            "/ping",
            &mut SecurityRegistry::new(),
        )
        .unwrap();
        assert_eq!(op.responses["default"].description, "pong");
    }
}
