//! Lenient field projection over schema-less webhook records.
//!
//! Field names from the upstream API are not stable, so each field is read
//! through an alias list. The first alias holding a non-null value wins.

use serde_json::{Map, Value};

pub(crate) fn lookup<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !value.is_null())
}

/// Non-empty trimmed text for the first present alias. Numbers and booleans
/// are rendered with their JSON text.
pub(crate) fn optional_text(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    let rendered = match lookup(record, keys)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!rendered.is_empty()).then_some(rendered)
}

pub(crate) fn text(record: &Map<String, Value>, keys: &[&str]) -> String {
    optional_text(record, keys).unwrap_or_default()
}

/// Numeric value for the first present alias; numeric strings are accepted,
/// including a decimal comma.
pub(crate) fn number(record: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    match lookup(record, keys)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse().ok(),
        _ => None,
    }
    .filter(|n: &f64| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_first_non_null_alias_wins() {
        let r = record(json!({ "a": null, "b": "two", "c": "three" }));
        assert_eq!(optional_text(&r, &["a", "b", "c"]).as_deref(), Some("two"));
    }

    #[test]
    fn test_blank_text_is_absent() {
        let r = record(json!({ "a": "   " }));
        assert_eq!(optional_text(&r, &["a"]), None);
        assert_eq!(text(&r, &["a"]), "");
    }

    #[test]
    fn test_number_accepts_numeric_strings() {
        let r = record(json!({ "x": "7,5", "y": 3, "z": "n/a" }));
        assert_eq!(number(&r, &["x"]), Some(7.5));
        assert_eq!(number(&r, &["y"]), Some(3.0));
        assert_eq!(number(&r, &["z"]), None);
    }
}
