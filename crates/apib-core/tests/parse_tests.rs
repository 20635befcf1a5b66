use apib_core::ast;
use apib_core::error::ParseError;

const WIDGETS: &str = include_str!("fixtures/widgets.json");
const MINIMAL: &str = include_str!("fixtures/minimal.yaml");
const PARSER_ERROR: &str = include_str!("fixtures/parser-error.json");
const MISSING_ACTIONS: &str = include_str!("fixtures/missing-actions.json");

#[test]
fn parse_result_envelope() {
    let blueprint = ast::from_json(WIDGETS).expect("should parse widgets fixture");
    assert_eq!(blueprint.name, "Widget API");
    assert_eq!(blueprint.resource_groups.len(), 1);
    assert_eq!(blueprint.resource_groups[0].resources.len(), 3);
    assert_eq!(blueprint.metadata_value("host"), Some("https://api.example.com/v1"));

    let resource = &blueprint.resource_groups[0].resources[0];
    assert_eq!(resource.uri_template, "/widgets/{id}");
    assert_eq!(resource.parameters[0].param_type, "number");
    assert_eq!(resource.actions.len(), 2);
}

#[test]
fn parse_data_structure_block() {
    let blueprint = ast::from_json(WIDGETS).unwrap();
    let block = blueprint
        .data_structures()
        .expect("fixture has a trailing data-structure block");

    let structures = block.children();
    assert_eq!(structures.len(), 2);

    let widget = structures[0].first_child().unwrap();
    assert_eq!(widget.element, "object");
    assert_eq!(widget.id(), Some("Widget"));
    assert_eq!(widget.children().len(), 2);
    assert!(widget.children()[0].has_type_attribute("required"));

    let gadget = structures[1].first_child().unwrap();
    assert_eq!(gadget.element, "Widget");
    assert_eq!(
        gadget.children()[0].description(),
        Some("When the gadget was built")
    );
}

#[test]
fn parse_bare_yaml_ast() {
    let blueprint = ast::from_yaml(MINIMAL).expect("should parse minimal yaml");
    assert_eq!(blueprint.name, "Notes API");
    assert_eq!(blueprint.metadata_value("VERSION"), Some("1.2.0"));
    assert!(blueprint.data_structures().is_none());

    let action = &blueprint.resource_groups[0].resources[0].actions[0];
    assert!(action.name.is_empty());
    assert!(action.first_request().is_none());
}

#[test]
fn parse_upstream_error() {
    match ast::from_json(PARSER_ERROR) {
        Err(ParseError::Upstream { code, message }) => {
            assert_eq!(code, 2);
            assert_eq!(message, "unexpected header block");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[test]
fn parse_missing_required_field() {
    let err = ast::from_json(MISSING_ACTIONS).unwrap_err();
    assert!(matches!(err, ParseError::Json(_)));
    assert!(err.to_string().contains("actions"));
}

#[test]
fn parse_invalid_json() {
    assert!(matches!(ast::from_json("{not json"), Err(ParseError::Json(_))));
}
