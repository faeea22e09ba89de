//! # Request Argument Parser
//!
//! Pulls declared arguments out of a JSON request body.
//!
//! A required argument must have its key present; a present key holding
//! `null` parses to `None` and is left for the handler to judge. Arguments
//! are read one at a time, so the first failing argument in declaration
//! order is the one reported.

use serde_json::{Map, Value};

use super::errors::{ApiError, ApiResult};

/// Help text reported for required arguments that declare none.
pub const MISSING_ARGUMENT_HELP: &str =
    "Missing required parameter in the JSON body or the post body or the query string";

/// Parsed request body
#[derive(Debug, Clone, Default)]
pub struct RequestArgs {
    fields: Map<String, Value>,
}

impl RequestArgs {
    /// Parse a raw body. An empty body carries no arguments.
    pub fn from_body(body: &[u8]) -> ApiResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice(body) {
            Ok(Value::Object(fields)) => Ok(Self { fields }),
            _ => Err(ApiError::MalformedBody),
        }
    }

    pub fn from_value(value: Value) -> ApiResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(ApiError::MalformedBody),
        }
    }

    /// Text argument whose key must be present.
    pub fn required_str(
        &self,
        field: &'static str,
        help: Option<&'static str>,
    ) -> ApiResult<Option<String>> {
        let value = self.require(field, help)?;
        as_text(field, value)
    }

    /// Text argument that may be omitted.
    pub fn optional_str(&self, field: &'static str) -> ApiResult<Option<String>> {
        match self.fields.get(field) {
            Some(value) => as_text(field, value),
            None => Ok(None),
        }
    }

    /// Integer argument whose key must be present.
    pub fn required_int(
        &self,
        field: &'static str,
        help: Option<&'static str>,
    ) -> ApiResult<Option<i64>> {
        let value = self.require(field, help)?;
        as_int(field, value)
    }

    fn require(&self, field: &'static str, help: Option<&'static str>) -> ApiResult<&Value> {
        self.fields.get(field).ok_or_else(|| ApiError::Argument {
            field,
            help: help.unwrap_or(MISSING_ARGUMENT_HELP).to_string(),
        })
    }
}

/// Booleans render as `True` / `False`.
fn as_text(field: &'static str, value: &Value) -> ApiResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(true) => Ok(Some("True".to_string())),
        Value::Bool(false) => Ok(Some("False".to_string())),
        Value::Array(_) | Value::Object(_) => Err(ApiError::Argument {
            field,
            help: format!("{} must be a string", field),
        }),
    }
}

/// Floats truncate toward zero and booleans count as 1 / 0; strings must
/// hold a whole integer.
fn as_int(field: &'static str, value: &Value) -> ApiResult<Option<i64>> {
    let parsed = match value {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Array(_) | Value::Object(_) => None,
    };

    parsed.map(Some).ok_or_else(|| ApiError::Argument {
        field,
        help: format!("invalid literal for int(): {}", value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> RequestArgs {
        RequestArgs::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_body_has_no_arguments() {
        let parsed = RequestArgs::from_body(b"").unwrap();
        assert_eq!(parsed.optional_str("anything").unwrap(), None);
    }

    #[test]
    fn test_non_object_body_rejected() {
        assert!(matches!(
            RequestArgs::from_body(b"[1, 2]"),
            Err(ApiError::MalformedBody)
        ));
        assert!(matches!(
            RequestArgs::from_body(b"{not json"),
            Err(ApiError::MalformedBody)
        ));
    }

    #[test]
    fn test_missing_required_uses_declared_help() {
        let err = args(json!({})).required_str("course_name", Some("Course Name is required"));
        match err {
            Err(ApiError::Argument { field, help }) => {
                assert_eq!(field, "course_name");
                assert_eq!(help, "Course Name is required");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_missing_required_default_help() {
        let err = args(json!({})).required_str("last_name", None).unwrap_err();
        assert_eq!(
            err.body(),
            json!({"message": {"last_name": MISSING_ARGUMENT_HELP}})
        );
    }

    #[test]
    fn test_null_is_present_but_empty() {
        let parsed = args(json!({"course_code": null}));
        assert_eq!(parsed.required_str("course_code", None).unwrap(), None);
    }

    #[test]
    fn test_scalars_become_text() {
        let parsed = args(json!({"a": 12, "b": true, "c": "x", "e": false}));
        assert_eq!(parsed.optional_str("a").unwrap().as_deref(), Some("12"));
        assert_eq!(parsed.optional_str("b").unwrap().as_deref(), Some("True"));
        assert_eq!(parsed.optional_str("c").unwrap().as_deref(), Some("x"));
        assert_eq!(parsed.optional_str("e").unwrap().as_deref(), Some("False"));
        assert!(args(json!({"d": [1]})).optional_str("d").is_err());
    }

    #[test]
    fn test_integer_arguments() {
        let parsed = args(json!({"a": 7, "b": "8", "c": "eight", "d": "1.5", "e": null}));
        assert_eq!(parsed.required_int("a", None).unwrap(), Some(7));
        assert_eq!(parsed.required_int("b", None).unwrap(), Some(8));
        assert!(parsed.required_int("c", None).is_err());
        assert!(parsed.required_int("d", None).is_err());
        assert_eq!(parsed.required_int("e", None).unwrap(), None);
        assert!(args(json!({"f": [1]})).required_int("f", None).is_err());
    }

    #[test]
    fn test_floats_and_booleans_as_integers() {
        let parsed = args(json!({"a": 1.5, "b": -2.9, "c": true, "d": false}));
        assert_eq!(parsed.required_int("a", None).unwrap(), Some(1));
        assert_eq!(parsed.required_int("b", None).unwrap(), Some(-2));
        assert_eq!(parsed.required_int("c", None).unwrap(), Some(1));
        assert_eq!(parsed.required_int("d", None).unwrap(), Some(0));
    }
}
