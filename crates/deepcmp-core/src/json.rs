//! Comparison support for parsed JSON and YAML documents.
//!
//! [`serde_json::Value`] doubles as the document model for both formats:
//! YAML input is deserialized straight into it, so two documents compare the
//! same way regardless of the syntax they arrived in.

use serde_json::Value;

use crate::error::ParseError;
use crate::value::{Comparable, Member, Scalar, Shape};

impl Comparable for Value {
    fn classify(&self) -> Shape<'_> {
        match self {
            Value::Null => Shape::Void,
            Value::Bool(value) => Shape::Scalar(Scalar::Bool(*value)),
            Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    Shape::Scalar(Scalar::Int(value))
                } else if let Some(value) = number.as_u64() {
                    Shape::Scalar(Scalar::Uint(value))
                } else {
                    Shape::Scalar(Scalar::Float(number.as_f64().unwrap_or(f64::NAN)))
                }
            }
            Value::String(text) => Shape::Text(text),
            Value::Array(items) => {
                Shape::Collection(items.iter().map(|item| item as &dyn Comparable).collect())
            }
            Value::Object(entries) => Shape::Composite(
                entries
                    .iter()
                    .map(|(name, value)| Member::new(name, value as &dyn Comparable))
                    .collect(),
            ),
        }
    }

    // One Rust type covers every document kind; the label has to come from
    // the runtime value.
    fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

/// Parses a JSON document into a comparable [`Value`].
///
/// Blank input parses as `null`, so an empty file compares equal to an
/// explicit `null` document.
///
/// ```
/// use deepcmp_core::{compare, from_json_str};
///
/// let expected = from_json_str(r#"{"version": 1}"#)?;
/// let actual = from_json_str(r#"{"version": 2}"#)?;
/// let report = compare(&expected, &actual)?;
/// assert_eq!(
///     report.render(),
///     "Differences found: 1. The details are as follows:\n\
///      Property 'version' mismatch: Expected '1', but was '2'.\n"
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn from_json_str(input: &str) -> Result<Value, ParseError> {
    if input.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(input)?)
}

/// Parses a YAML document into a comparable [`Value`].
///
/// The document is deserialized into the same value model JSON uses, which
/// restricts mapping keys to strings.
///
/// ```
/// use deepcmp_core::{compare, from_yaml_str};
///
/// let expected = from_yaml_str("version: 1")?;
/// let actual = from_yaml_str("version: 1")?;
/// assert!(compare(&expected, &actual)?.is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn from_yaml_str(input: &str) -> Result<Value, ParseError> {
    if input.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_yaml::from_str(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_input_parses_as_null() {
        assert_eq!(from_json_str("").unwrap(), Value::Null);
        assert_eq!(from_json_str("  \n").unwrap(), Value::Null);
        assert_eq!(from_yaml_str("").unwrap(), Value::Null);
    }

    #[test]
    fn values_report_their_document_kind() {
        assert_eq!(json!(null).type_name(), "null");
        assert_eq!(json!(true).type_name(), "bool");
        assert_eq!(json!(1.5).type_name(), "number");
        assert_eq!(json!("x").type_name(), "string");
        assert_eq!(json!([1]).type_name(), "array");
        assert_eq!(json!({"a": 1}).type_name(), "object");
    }

    #[test]
    fn numbers_classify_by_representation() {
        assert_eq!(json!(-3).classify().kind_name(), "scalar");
        assert!(matches!(json!(-3).classify(), Shape::Scalar(Scalar::Int(-3))));
        assert!(matches!(json!(u64::MAX).classify(), Shape::Scalar(Scalar::Uint(u64::MAX))));
        assert!(matches!(json!(0.5).classify(), Shape::Scalar(Scalar::Float(_))));
    }

    #[test]
    fn yaml_maps_with_non_string_keys_are_rejected() {
        let result = from_yaml_str("1: one\n2: two\n");
        assert!(result.is_err());
    }

    #[test]
    fn yaml_and_json_share_one_value_model() {
        let yaml = from_yaml_str("numbers:\n  - 1\n  - 2\n").unwrap();
        let json = from_json_str(r#"{"numbers": [1, 2]}"#).unwrap();
        assert_eq!(yaml, json);
    }
}
