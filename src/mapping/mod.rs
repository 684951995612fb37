//! Declarative mapping from raw document JSON to typed nodes.
//!
//! Every model type declares its fields as `const` [`Field`] descriptors
//! (primary dot-path, alternate paths, fallback, strictness) and builds itself
//! through a [`Node`] view in its [`FromNode`] implementation. Resolution
//! rules are the same for every type:
//!
//! 1. the primary path, where a missing intermediate key means "absent";
//! 2. the alternate paths, in declared order;
//! 3. the fallback value, if one is declared;
//! 4. an [`Error::Mapping`](crate::Error::Mapping) when the field is strict,
//!    otherwise absent.
//!
//! A value that is found is coerced through [`FromValue`]; nested nodes and
//! polymorphic content go through their own [`FromNode`] constructors.
//!
//! # Example
//!
//! ```
//! use gdoc_html::mapping::{Field, FromNode, Node};
//! use serde_json::json;
//!
//! struct Range {
//!     start: i64,
//!     end: Option<i64>,
//! }
//!
//! impl Range {
//!     const START: Field = Field::at("startIndex").or_int(0);
//!     const END: Field = Field::at("endIndex");
//! }
//!
//! impl FromNode for Range {
//!     const TYPE_NAME: &'static str = "Range";
//!
//!     fn from_node(node: &Node<'_>) -> gdoc_html::Result<Self> {
//!         Ok(Self {
//!             start: node.require(&Self::START)?,
//!             end: node.get(&Self::END)?,
//!         })
//!     }
//! }
//!
//! let range: Range = Node::build(&json!({"endIndex": 12})).unwrap();
//! assert_eq!(range.start, 0);
//! assert_eq!(range.end, Some(12));
//! ```

mod field;
mod node;
mod value;

pub use field::{lookup_path, Fallback, Field};
pub use node::{FromNode, Node};
pub use value::{json_kind, FromValue, Location};

/// Implement [`FromValue`] for model nodes by delegating to [`FromNode`].
macro_rules! node_values {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::mapping::FromValue for $ty {
                fn from_value(
                    value: &serde_json::Value,
                    at: $crate::mapping::Location,
                ) -> $crate::error::Result<Self> {
                    $crate::mapping::Node::nested(value, at)
                }
            }
        )*
    };
}

pub(crate) use node_values;
