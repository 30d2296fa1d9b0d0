//! Serde helpers for loosely typed third-party payloads.
//!
//! Payment processors return amounts and ids either as JSON strings or as
//! JSON numbers depending on the endpoint; these helpers normalize both to
//! `String`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Convert a scalar JSON value to its textual form, `None` for null
#[must_use]
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Deserialize an optional field that may be a string or a number
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_to_string))
}

/// Deserialize a required field that may be a string or a number
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(&value).ok_or_else(|| serde::de::Error::custom("expected a string or a number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "string_or_number")]
        id: String,
        #[serde(default, deserialize_with = "opt_string_or_number")]
        amount: Option<String>,
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        let sample: Sample = serde_json::from_str(r#"{"id": 42, "amount": "10.5"}"#).unwrap();
        assert_eq!(sample.id, "42");
        assert_eq!(sample.amount.as_deref(), Some("10.5"));

        let sample: Sample = serde_json::from_str(r#"{"id": "abc", "amount": 0.25}"#).unwrap();
        assert_eq!(sample.id, "abc");
        assert_eq!(sample.amount.as_deref(), Some("0.25"));
    }

    #[test]
    fn test_null_and_missing_become_none() {
        let sample: Sample = serde_json::from_str(r#"{"id": 1, "amount": null}"#).unwrap();
        assert!(sample.amount.is_none());

        let sample: Sample = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(sample.amount.is_none());
    }

    #[test]
    fn test_required_field_rejects_null() {
        assert!(serde_json::from_str::<Sample>(r#"{"id": null}"#).is_err());
    }
}
