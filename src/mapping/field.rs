//! Field descriptors and dot-path lookup.

use serde_json::{Map, Value};

/// Value used when a field is absent at every path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fallback {
    /// Integer fallback
    Int(i64),
    /// Boolean fallback
    Bool(bool),
    /// String fallback
    Str(&'static str),
}

impl Fallback {
    /// Materialize the fallback as a JSON value.
    pub fn to_value(self) -> Value {
        match self {
            Fallback::Int(v) => Value::from(v),
            Fallback::Bool(v) => Value::Bool(v),
            Fallback::Str(v) => Value::from(v),
        }
    }
}

/// Describes where a field lives in the raw JSON and how absence is handled.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Name reported in errors
    pub name: &'static str,

    /// Primary dot-separated path
    pub path: &'static str,

    /// Alternate paths, tried in order when the primary path is absent
    pub alternates: &'static [&'static str],

    /// Value used when every path is absent
    pub fallback: Option<Fallback>,

    /// Whether absence at every path (with no fallback) is an error
    pub strict: bool,
}

impl Field {
    /// Create a field read from a single dot-path.
    pub const fn at(path: &'static str) -> Self {
        Self {
            name: path,
            path,
            alternates: &[],
            fallback: None,
            strict: false,
        }
    }

    /// Override the name reported in errors.
    pub const fn named(self, name: &'static str) -> Self {
        Self { name, ..self }
    }

    /// Set alternate paths.
    pub const fn alt(self, alternates: &'static [&'static str]) -> Self {
        Self { alternates, ..self }
    }

    /// Mark the field as strict.
    pub const fn strict(self) -> Self {
        Self {
            strict: true,
            ..self
        }
    }

    /// Use an integer fallback.
    pub const fn or_int(self, value: i64) -> Self {
        Self {
            fallback: Some(Fallback::Int(value)),
            ..self
        }
    }

    /// Use a boolean fallback.
    pub const fn or_bool(self, value: bool) -> Self {
        Self {
            fallback: Some(Fallback::Bool(value)),
            ..self
        }
    }

    /// Use a string fallback.
    pub const fn or_str(self, value: &'static str) -> Self {
        Self {
            fallback: Some(Fallback::Str(value)),
            ..self
        }
    }

    /// All paths in resolution order.
    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.path).chain(self.alternates.iter().copied())
    }
}

/// Follow a dot-separated path through nested objects.
///
/// Returns `None` when any intermediate key is missing, when an intermediate
/// value is not an object, or when the final value is `null`.
pub fn lookup_path<'a>(raw: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut keys = path.split('.');
    let mut current = raw.get(keys.next()?)?;
    for key in keys {
        current = current.as_object()?.get(key)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_lookup_nested_path() {
        let raw = object(json!({"body": {"content": [1, 2]}}));
        assert_eq!(lookup_path(&raw, "body.content"), Some(&json!([1, 2])));
    }

    #[test]
    fn test_lookup_missing_intermediate_is_absent() {
        let raw = object(json!({"body": {}}));
        assert_eq!(lookup_path(&raw, "body.content"), None);
        assert_eq!(lookup_path(&raw, "head.content"), None);
    }

    #[test]
    fn test_lookup_through_scalar_is_absent() {
        let raw = object(json!({"body": 3}));
        assert_eq!(lookup_path(&raw, "body.content"), None);
    }

    #[test]
    fn test_lookup_null_is_absent() {
        let raw = object(json!({"title": null}));
        assert_eq!(lookup_path(&raw, "title"), None);
    }

    #[test]
    fn test_field_builder() {
        const FIELD: Field = Field::at("marginTop")
            .alt(&["paddingTop", "topOffset"])
            .named("top")
            .or_int(0);

        assert_eq!(FIELD.name, "top");
        assert_eq!(
            FIELD.paths().collect::<Vec<_>>(),
            vec!["marginTop", "paddingTop", "topOffset"]
        );
        assert_eq!(FIELD.fallback, Some(Fallback::Int(0)));
        assert!(!FIELD.strict);
    }
}
