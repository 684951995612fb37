//! Type coercion from JSON values.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{Error, Result};

/// Where a value came from, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Node type being built
    pub type_name: &'static str,
    /// Field on that type
    pub field: &'static str,
}

impl Location {
    /// Create a location.
    pub fn new(type_name: &'static str, field: &'static str) -> Self {
        Self { type_name, field }
    }

    /// Build a coercion error for a value of the wrong shape.
    pub fn mismatch(self, expected: &'static str, found: &Value) -> Error {
        Error::Coercion {
            type_name: self.type_name,
            field: self.field,
            expected,
            found: json_kind(found),
        }
    }
}

/// Short name of a JSON value's shape.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Conversion from a raw JSON value into a declared field type.
pub trait FromValue: Sized {
    /// Coerce `value`, reporting failures against `at`.
    fn from_value(value: &Value, at: Location) -> Result<Self>;
}

impl FromValue for Value {
    fn from_value(value: &Value, _at: Location) -> Result<Self> {
        Ok(value.clone())
    }
}

impl FromValue for String {
    fn from_value(value: &Value, at: Location) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(at.mismatch("string", other)),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value, at: Location) -> Result<Self> {
        value.as_bool().ok_or_else(|| at.mismatch("boolean", value))
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value, at: Location) -> Result<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(integral_f64))
                .ok_or_else(|| at.mismatch("integer", value)),
            Value::String(s) => s.trim().parse().map_err(|_| at.mismatch("integer", value)),
            other => Err(at.mismatch("integer", other)),
        }
    }
}

/// An integral float that fits in `i64` without saturating.
fn integral_f64(f: f64) -> Option<i64> {
    // 2^63 is exactly representable; `i64::MAX as f64` rounds up to it.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    (f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f)).then_some(f as i64)
}

impl FromValue for u32 {
    fn from_value(value: &Value, at: Location) -> Result<Self> {
        let n = i64::from_value(value, at)?;
        u32::try_from(n).map_err(|_| at.mismatch("non-negative integer", value))
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value, at: Location) -> Result<Self> {
        match value {
            Value::Number(n) => n.as_f64().ok_or_else(|| at.mismatch("number", value)),
            Value::String(s) => s.trim().parse().map_err(|_| at.mismatch("number", value)),
            other => Err(at.mismatch("number", other)),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value, at: Location) -> Result<Self> {
        let items = value.as_array().ok_or_else(|| at.mismatch("array", value))?;
        items.iter().map(|item| T::from_value(item, at)).collect()
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: &Value, at: Location) -> Result<Self> {
        let entries = value
            .as_object()
            .ok_or_else(|| at.mismatch("object", value))?;
        entries
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| Ok((k.clone(), T::from_value(v, at)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const AT: Location = Location {
        type_name: "Test",
        field: "value",
    };

    #[test]
    fn test_scalar_coercion() {
        assert_eq!(String::from_value(&json!("abc"), AT).unwrap(), "abc");
        assert_eq!(i64::from_value(&json!(12), AT).unwrap(), 12);
        assert_eq!(i64::from_value(&json!(12.0), AT).unwrap(), 12);
        assert_eq!(i64::from_value(&json!("7"), AT).unwrap(), 7);
        assert_eq!(f64::from_value(&json!(0.5), AT).unwrap(), 0.5);
        assert!(bool::from_value(&json!(true), AT).unwrap());
    }

    #[test]
    fn test_coercion_mismatch() {
        let err = i64::from_value(&json!({"a": 1}), AT).unwrap_err();
        assert!(matches!(
            err,
            Error::Coercion {
                expected: "integer",
                found: "object",
                ..
            }
        ));

        let err = u32::from_value(&json!(-1), AT).unwrap_err();
        assert!(matches!(err, Error::Coercion { .. }));

        let err = i64::from_value(&json!(1e19), AT).unwrap_err();
        assert!(matches!(
            err,
            Error::Coercion {
                expected: "integer",
                found: "number",
                ..
            }
        ));
        assert!(i64::from_value(&json!(-1e300), AT).is_err());
        assert!(i64::from_value(&json!(2.5), AT).is_err());
        assert_eq!(i64::from_value(&json!(-4.0e3), AT).unwrap(), -4000);
    }

    #[test]
    fn test_collections() {
        let list: Vec<i64> = Vec::from_value(&json!([1, 2, 3]), AT).unwrap();
        assert_eq!(list, vec![1, 2, 3]);

        let map: BTreeMap<String, String> =
            BTreeMap::from_value(&json!({"b": "2", "a": "1", "c": null}), AT).unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
