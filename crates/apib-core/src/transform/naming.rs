use any_ascii::any_ascii;
use heck::{ToLowerCamelCase, ToPascalCase};

/// Reduce free text to a lower-case, dash-separated token.
///
/// Non-ASCII letters are transliterated first. Remaining characters other
/// than ASCII alphanumerics, whitespace, `-` and `_` are dropped; runs of
/// separators collapse into a single `-`.
pub fn slug(identifier: &str) -> String {
    let ascii = any_ascii(identifier);
    let mut result = String::with_capacity(ascii.len());
    let mut pending_separator = false;

    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !result.is_empty() {
                result.push('-');
            }
            result.push(ch.to_ascii_lowercase());
            pending_separator = false;
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_separator = true;
        }
    }

    result
}

/// Join separated words, upper-casing every word after the first. The case
/// of the first character is preserved.
pub fn camelize(token: &str) -> String {
    let starts_upper = token.chars().next().is_some_and(char::is_uppercase);
    if starts_upper {
        token.to_pascal_case()
    } else {
        token.to_lower_camel_case()
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Name of the definition generated for a data-structure identifier.
pub fn definition_name(identifier: &str) -> String {
    camelize(&capitalize(identifier))
}

/// Operation identifier derived from an action name.
pub fn operation_id(action_name: &str) -> String {
    camelize(&slug(action_name))
}

/// Operation identifier for unnamed actions: method plus the URI template
/// up to its first expression, with path separators read as word breaks.
pub fn route_operation_id(method: &str, uri_template: &str) -> String {
    let static_part = match uri_template.find('{') {
        Some(pos) => &uri_template[..pos],
        None => uri_template,
    };
    let words = format!("{} {}", method, static_part.replace('/', " "));
    operation_id(&words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        assert_eq!(slug("Retrieve a Widget"), "retrieve-a-widget");
        assert_eq!(slug("  List all -- Widgets!  "), "list-all-widgets");
        assert_eq!(slug("snake_case name"), "snake-case-name");
        assert_eq!(slug(""), "");
    }

    #[test]
    fn test_slug_transliterates() {
        assert_eq!(slug("Créer un widget"), "creer-un-widget");
        assert_eq!(slug("Übersicht"), "ubersicht");
    }

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("retrieve-a-widget"), "retrieveAWidget");
        assert_eq!(camelize("Widget item"), "WidgetItem");
        assert_eq!(camelize("get-v2-items"), "getV2Items");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("widget"), "Widget");
        assert_eq!(capitalize("WIDGET"), "Widget");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_definition_name() {
        assert_eq!(definition_name("Widget"), "Widget");
        assert_eq!(definition_name("widget item"), "WidgetItem");
        assert_eq!(definition_name("Widget Item"), "WidgetItem");
    }

    #[test]
    fn test_definition_name_is_stable() {
        let first = definition_name("Order line");
        let second = definition_name("Order line");
        assert_eq!(first, second);
    }

    #[test]
    fn test_operation_id() {
        assert_eq!(operation_id("Retrieve a Widget"), "retrieveAWidget");
        assert_eq!(operation_id("Create New Note!"), "createNewNote");
        assert_eq!(operation_id("Créer un widget"), "creerUnWidget");
    }

    #[test]
    fn test_route_operation_id() {
        assert_eq!(route_operation_id("GET", "/widgets/{id}"), "getWidgets");
        assert_eq!(route_operation_id("POST", "/notes"), "postNotes");
    }
}
