//! Borrowed object view used by model constructors.

use std::borrow::Cow;

use serde_json::{Map, Value};

use super::{lookup_path, Field, FromValue, Location};
use crate::error::{Error, Result};

/// A model type built from one JSON object.
pub trait FromNode: Sized {
    /// Type name reported in mapping errors.
    const TYPE_NAME: &'static str;

    /// Build the type from its object view.
    fn from_node(node: &Node<'_>) -> Result<Self>;
}

/// A JSON object tagged with the model type being built from it.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    type_name: &'static str,
    raw: &'a Map<String, Value>,
}

impl<'a> Node<'a> {
    /// Wrap an object for the given type.
    pub fn new(type_name: &'static str, raw: &'a Map<String, Value>) -> Self {
        Self { type_name, raw }
    }

    /// Build a root node from a JSON value.
    pub fn build<T: FromNode>(value: &Value) -> Result<T> {
        Self::nested(value, Location::new(T::TYPE_NAME, "<root>"))
    }

    /// Build a nested node found at `at`.
    pub fn nested<T: FromNode>(value: &Value, at: Location) -> Result<T> {
        let raw = value.as_object().ok_or_else(|| at.mismatch("object", value))?;
        T::from_node(&Node::new(T::TYPE_NAME, raw))
    }

    /// Build another node type from this same object.
    ///
    /// Used for field packs whose members sit side by side with the
    /// owner's own fields.
    pub fn pack<T: FromNode>(&self) -> Result<T> {
        T::from_node(&Node::new(T::TYPE_NAME, self.raw))
    }

    /// Name of the type being built.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Underlying object.
    pub fn raw(&self) -> &'a Map<String, Value> {
        self.raw
    }

    /// Whether a top-level key holds a non-null value.
    pub fn has(&self, key: &str) -> bool {
        self.raw.get(key).is_some_and(|v| !v.is_null())
    }

    /// Resolve a field to its raw value.
    pub fn lookup(&self, field: &Field) -> Result<Option<Cow<'a, Value>>> {
        if let Some(value) = field.paths().find_map(|path| lookup_path(self.raw, path)) {
            return Ok(Some(Cow::Borrowed(value)));
        }
        if let Some(fallback) = field.fallback {
            return Ok(Some(Cow::Owned(fallback.to_value())));
        }
        if field.strict {
            return Err(self.missing(field));
        }
        Ok(None)
    }

    /// Resolve and coerce a field; absent fields yield `None`.
    pub fn get<T: FromValue>(&self, field: &Field) -> Result<Option<T>> {
        match self.lookup(field)? {
            Some(value) => T::from_value(&value, self.location(field)).map(Some),
            None => Ok(None),
        }
    }

    /// Resolve and coerce a field, using `T::default()` when absent.
    pub fn get_or_default<T: FromValue + Default>(&self, field: &Field) -> Result<T> {
        Ok(self.get(field)?.unwrap_or_default())
    }

    /// Resolve and coerce a field that must be present.
    pub fn require<T: FromValue>(&self, field: &Field) -> Result<T> {
        self.get(field)?.ok_or_else(|| self.missing(field))
    }

    fn location(&self, field: &Field) -> Location {
        Location::new(self.type_name, field.name)
    }

    fn missing(&self, field: &Field) -> Error {
        Error::Mapping {
            type_name: self.type_name,
            field: field.name,
            paths: field.paths().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct Sample {
        name: String,
        size: i64,
        tags: Vec<String>,
    }

    impl Sample {
        const NAME: Field = Field::at("name")
            .alt(&["title", "meta.label"])
            .strict();
        const SIZE: Field = Field::at("size.magnitude").or_int(10);
        const TAGS: Field = Field::at("tags");
    }

    impl FromNode for Sample {
        const TYPE_NAME: &'static str = "Sample";

        fn from_node(node: &Node<'_>) -> Result<Self> {
            Ok(Self {
                name: node.require(&Self::NAME)?,
                size: node.require(&Self::SIZE)?,
                tags: node.get_or_default(&Self::TAGS)?,
            })
        }
    }

    #[test]
    fn test_primary_path_wins() {
        let sample: Sample = Node::build(&json!({"name": "a", "title": "b"})).unwrap();
        assert_eq!(sample.name, "a");
    }

    #[test]
    fn test_alternates_in_declared_order() {
        let sample: Sample =
            Node::build(&json!({"meta": {"label": "c"}, "title": "b"})).unwrap();
        assert_eq!(sample.name, "b");

        let sample: Sample = Node::build(&json!({"meta": {"label": "c"}})).unwrap();
        assert_eq!(sample.name, "c");
    }

    #[test]
    fn test_fallback_and_optional() {
        let sample: Sample = Node::build(&json!({"name": "a"})).unwrap();
        assert_eq!(sample.size, 10);
        assert!(sample.tags.is_empty());

        let sample: Sample =
            Node::build(&json!({"name": "a", "size": {"magnitude": 3}})).unwrap();
        assert_eq!(sample.size, 3);
    }

    #[test]
    fn test_strict_field_lists_attempted_paths() {
        let err = Node::build::<Sample>(&json!({"size": {}})).unwrap_err();
        match err {
            Error::Mapping {
                type_name,
                field,
                paths,
            } => {
                assert_eq!(type_name, "Sample");
                assert_eq!(field, "name");
                assert_eq!(paths, vec!["name", "title", "meta.label"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_root_must_be_object() {
        let err = Node::build::<Sample>(&json!([1, 2])).unwrap_err();
        assert!(matches!(
            err,
            Error::Coercion {
                expected: "object",
                found: "array",
                ..
            }
        ));
    }
}
