use std::sync::LazyLock;

use regex::Regex;

use crate::ast::{self, Action};
use crate::error::TransformError;
use crate::swagger::{Parameter, ParameterLocation};

use super::body_schema::derive_schema;

/// A single `{...}` expression of a URI template.
static EXPRESSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]*)\}").expect("valid URI template regex"));

/// Name given to the synthetic body parameter.
pub const BODY_PARAMETER: &str = "body";

/// Extract the path and query parameters of a URI template, enriched with
/// the resource's declared parameters. Names are unique; the first
/// occurrence keeps its position.
pub fn path_params(uri_template: &str, declared: &[ast::Parameter]) -> Vec<Parameter> {
    let mut params: Vec<Parameter> = Vec::new();

    for captures in EXPRESSION_RE.captures_iter(uri_template) {
        let expression = &captures[1];

        let (location, names) = match expression.chars().next() {
            Some('?') | Some('&') => (ParameterLocation::Query, &expression[1..]),
            Some('+') | Some('#') => (ParameterLocation::Path, &expression[1..]),
            _ => (ParameterLocation::Path, expression),
        };

        let names: Vec<&str> = match location {
            ParameterLocation::Query => names.split(',').collect(),
            _ => vec![names],
        };

        for raw in names {
            let name = variable_name(raw);
            if name.is_empty() || params.iter().any(|p| p.name == name) {
                continue;
            }
            let mut param = Parameter::new(name, location, location == ParameterLocation::Path);
            if let Some(decl) = declared.iter().find(|d| d.name == name) {
                apply_declared(&mut param, decl);
            }
            params.push(param);
        }
    }

    params
}

/// Strip explode (`*`) and prefix (`:N`) modifiers from a template variable.
fn variable_name(raw: &str) -> &str {
    let name = raw.trim();
    let name = name.split(':').next().unwrap_or(name);
    name.trim_end_matches('*')
}

/// Copy declared metadata onto an extracted or action parameter.
fn apply_declared(param: &mut Parameter, declared: &ast::Parameter) {
    param.required = declared.required;
    if !declared.param_type.is_empty() {
        param.param_type = Some(declared.param_type.clone());
    }
    param.description = non_empty(&declared.description);
    param.default = if declared.required || declared.default.is_empty() {
        None
    } else {
        Some(serde_json::Value::String(declared.default.clone()))
    };
    param.enum_values = declared
        .values
        .iter()
        .map(|v| serde_json::Value::String(v.value.clone()))
        .collect();
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Parameters declared on an action, followed by the synthetic `body`
/// parameter (when the first request has content) and one `header`
/// parameter per templated request header.
///
/// Declared parameters are provisionally placed in the query; [`merge_params`]
/// assigns their final location from the resource.
pub fn action_params(action: &Action) -> Result<Vec<Parameter>, TransformError> {
    let mut params: Vec<Parameter> = action
        .parameters
        .iter()
        .map(|decl| {
            let mut param = Parameter::new(decl.name.clone(), ParameterLocation::Query, false);
            apply_declared(&mut param, decl);
            param
        })
        .collect();

    let Some(request) = action.first_request() else {
        return Ok(params);
    };

    if !request.content.is_empty() {
        params.push(Parameter {
            param_type: None,
            schema: Some(derive_schema(&request.content)?),
            ..Parameter::new(BODY_PARAMETER, ParameterLocation::Body, true)
        });
    }

    for header in &request.headers {
        if EXPRESSION_RE.is_match(&header.value) {
            params.push(Parameter::new(
                header.name.clone(),
                ParameterLocation::Header,
                true,
            ));
        }
    }

    Ok(params)
}

/// Combine resource-level and action-level parameters.
///
/// Body and header parameters pass through. Other action parameters take
/// the location of the same-named resource parameter and are dropped when
/// the resource has none. Without action parameters the resource's
/// parameters are used as they are.
pub fn merge_params(
    resource_params: &[Parameter],
    action_params: Vec<Parameter>,
) -> Vec<Parameter> {
    if action_params.is_empty() {
        return resource_params.to_vec();
    }

    action_params
        .into_iter()
        .filter_map(|mut param| {
            if param.is_passthrough() {
                return Some(param);
            }
            let matched = resource_params.iter().find(|r| r.name == param.name)?;
            param.location = matched.location;
            Some(param)
        })
        .collect()
}
