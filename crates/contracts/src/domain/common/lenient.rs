//! Deserializers for identifiers the backend sends either as numbers or strings.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn normalize(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // nested objects carry their own id
        Value::Object(map) => map.get("id").cloned().and_then(normalize),
        Value::Array(_) => None,
    }
}

pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(normalize(Value::deserialize(deserializer)?).unwrap_or_default())
}

pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(normalize(Value::deserialize(deserializer)?).filter(|s| !s.is_empty()))
}

/// Normalizes an arbitrary JSON value into the string a `<select>` uses as its key.
pub fn value_to_key(value: &Value) -> Option<String> {
    normalize(value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "opt_string_or_number")]
        fk: Option<String>,
        #[serde(default, deserialize_with = "string_or_number")]
        id: String,
    }

    #[test]
    fn test_numbers_and_strings_normalize() {
        let h: Holder = serde_json::from_str(r#"{"fk": 12, "id": "7"}"#).unwrap();
        assert_eq!(h.fk.as_deref(), Some("12"));
        assert_eq!(h.id, "7");
    }

    #[test]
    fn test_nested_object_uses_its_id() {
        let h: Holder = serde_json::from_str(r#"{"fk": {"id": 3, "name": "Plumbing"}}"#).unwrap();
        assert_eq!(h.fk.as_deref(), Some("3"));
    }

    #[test]
    fn test_null_and_empty_become_none() {
        let h: Holder = serde_json::from_str(r#"{"fk": null}"#).unwrap();
        assert_eq!(h.fk, None);
        let h: Holder = serde_json::from_str(r#"{"fk": ""}"#).unwrap();
        assert_eq!(h.fk, None);
    }
}
