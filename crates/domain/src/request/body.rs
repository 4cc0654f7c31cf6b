//! Default body synthesis from loosely-typed body schemas
//!
//! Body schemas are not formal schemas: leaves are human-readable hints such
//! as `"number (optional)"` or `"MongoId (required)"`. Synthesis walks the
//! schema depth-first and guesses a plausible starting value for each leaf.

use serde_json::{Map, Value};

/// Guesses a default JSON value for one type-hint leaf.
///
/// The hint is lower-cased and checked in this order:
/// 1. contains `number` or `position` → `0`
/// 2. contains `boolean` → `false`
/// 3. anything else → `""`
#[must_use]
pub fn default_for_hint(hint: &str) -> Value {
    let hint = hint.to_lowercase();
    if hint.contains("number") || hint.contains("position") {
        Value::from(0)
    } else if hint.contains("boolean") {
        Value::Bool(false)
    } else {
        Value::String(String::new())
    }
}

/// Synthesizes a default value tree from a schema node.
///
/// Arrays and objects keep their shape and key order; every other node is
/// treated as a type hint. Non-string leaves are rendered to text first, so
/// they never fail and usually fall through to `""`.
#[must_use]
pub fn synthesize_default(schema: &Value) -> Value {
    match schema {
        Value::Array(items) => Value::Array(items.iter().map(synthesize_default).collect()),
        Value::Object(fields) => Value::Object(synthesize_fields(fields)),
        Value::String(hint) => default_for_hint(hint),
        other => default_for_hint(&other.to_string()),
    }
}

fn synthesize_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), synthesize_default(value)))
        .collect()
}

/// Renders the initial editable body text for a body schema.
///
/// The output is pretty-printed JSON with 2-space indentation and the
/// schema's key order.
#[must_use]
pub fn default_body_text(schema: &Map<String, Value>) -> String {
    let body = Value::Object(synthesize_fields(schema));
    // Serializing a `Value` cannot fail: keys are always strings.
    serde_json::to_string_pretty(&body).unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn schema(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_name_and_position_scenario() {
        let text = default_body_text(&schema(json!({
            "name": "string (required)",
            "position": "number (optional)"
        })));
        assert_eq!(text, "{\n  \"name\": \"\",\n  \"position\": 0\n}");
    }

    #[test]
    fn test_hint_classification_is_case_insensitive() {
        assert_eq!(default_for_hint("Number"), json!(0));
        assert_eq!(default_for_hint("a NUMBER of things"), json!(0));
        assert_eq!(default_for_hint("targetPosition"), json!(0));
        assert_eq!(default_for_hint("Boolean (optional)"), json!(false));
        assert_eq!(default_for_hint("MongoId (required)"), json!(""));
        assert_eq!(default_for_hint(""), json!(""));
    }

    #[test]
    fn test_number_wins_over_boolean() {
        assert_eq!(default_for_hint("boolean or number"), json!(0));
    }

    #[test]
    fn test_nested_shapes_are_preserved() {
        let value = synthesize_default(&json!({
            "items": ["MongoId", {"done": "boolean", "order": "number"}],
            "meta": {"note": "string"}
        }));
        assert_eq!(
            value,
            json!({
                "items": ["", {"done": false, "order": 0}],
                "meta": {"note": ""}
            })
        );
    }

    #[test]
    fn test_key_order_follows_schema() {
        let text = default_body_text(&schema(json!({
            "zeta": "string",
            "alpha": "boolean",
            "mid": "number"
        })));
        let zeta = text.find("zeta").unwrap();
        let alpha = text.find("alpha").unwrap();
        let mid = text.find("mid").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn test_non_string_leaves_do_not_fail() {
        assert_eq!(synthesize_default(&json!(null)), json!(""));
        assert_eq!(synthesize_default(&json!(42)), json!(""));
        assert_eq!(synthesize_default(&json!(true)), json!(""));
    }

    #[test]
    fn test_empty_schema() {
        assert_eq!(default_body_text(&Map::new()), "{}");
    }
}
