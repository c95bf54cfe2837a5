//! Lenient deserializers for loosely-typed backend fields
//!
//! Some numeric fields arrive as numbers, some as strings, some as `null`.
//! The dashboard only ever shows or re-submits them as text.

use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Number, string or null -> `Option<String>`; empty strings become `None`
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| value_to_string(&v)))
}

/// A single string or an array of strings -> `Vec<String>`
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.iter().filter_map(value_to_string).collect(),
        Some(other) => value_to_string(&other).into_iter().collect(),
        None => Vec::new(),
    })
}

/// Counterpart of [`opt_string`]: numeric text goes out as a JSON number
pub fn number_or_string<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value.as_deref() {
        None => serializer.serialize_none(),
        Some(text) => {
            if let Ok(n) = text.parse::<i64>() {
                serializer.serialize_i64(n)
            } else if let Some(n) = text.parse::<f64>().ok().filter(|n| n.is_finite()) {
                serializer.serialize_f64(n)
            } else {
                serializer.serialize_str(text)
            }
        }
    }
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "opt_string")]
        qty: Option<String>,
        #[serde(default, deserialize_with = "string_list")]
        colors: Vec<String>,
    }

    #[test]
    fn numbers_and_strings_are_accepted() {
        let p: Sample = serde_json::from_str(r#"{"qty": 12, "colors": ["red", "blue"]}"#).unwrap();
        assert_eq!(p.qty.as_deref(), Some("12"));
        assert_eq!(p.colors, vec!["red", "blue"]);

        let p: Sample = serde_json::from_str(r#"{"qty": "7", "colors": "green"}"#).unwrap();
        assert_eq!(p.qty.as_deref(), Some("7"));
        assert_eq!(p.colors, vec!["green"]);
    }

    #[derive(serde::Serialize)]
    struct Out {
        #[serde(serialize_with = "number_or_string")]
        v: Option<String>,
    }

    #[test]
    fn numeric_text_is_written_as_number() {
        let json = |v: Option<&str>| serde_json::to_string(&Out { v: v.map(str::to_string) }).unwrap();
        assert_eq!(json(Some("12")), r#"{"v":12}"#);
        assert_eq!(json(Some("9.5")), r#"{"v":9.5}"#);
        assert_eq!(json(Some("n/a")), r#"{"v":"n/a"}"#);
        assert_eq!(json(None), r#"{"v":null}"#);
    }

    #[test]
    fn null_and_missing_are_empty() {
        let p: Sample = serde_json::from_str(r#"{"qty": null, "colors": null}"#).unwrap();
        assert_eq!(p.qty, None);
        assert!(p.colors.is_empty());

        let p: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(p.qty, None);
        assert!(p.colors.is_empty());
    }
}
