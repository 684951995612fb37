//! Error types for gdoc-html library.

use std::io;
use thiserror::Error;

/// Result type alias for gdoc-html operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or rendering a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading documents from disk.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input bytes are not valid JSON.
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A strict field had no value at any of its paths.
    #[error("{type_name}.{field}: no value found at any of [{}]", .paths.join(", "))]
    Mapping {
        /// Node type being built
        type_name: &'static str,
        /// Field name on that type
        field: &'static str,
        /// Every path that was tried, in order
        paths: Vec<&'static str>,
    },

    /// A field was present but held a value of the wrong JSON type.
    #[error("{type_name}.{field}: expected {expected}, found {found}")]
    Coercion {
        /// Node type being built
        type_name: &'static str,
        /// Field name on that type
        field: &'static str,
        /// Expected JSON shape
        expected: &'static str,
        /// JSON shape actually found
        found: &'static str,
    },

    /// A structural element matched no content shape, or more than one.
    #[error("Unknown structural element content: {0}")]
    UnknownContentType(String),

    /// The document source could not provide the requested document.
    #[error("Document source error for '{id}': {message}")]
    Source {
        /// Requested document id
        id: String,
        /// Failure description
        message: String,
    },

    /// Error during rendering (JSON export).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Check whether this error came from malformed document structure
    /// rather than from I/O or the input encoding.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::Mapping { .. } | Error::Coercion { .. } | Error::UnknownContentType(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Mapping {
            type_name: "StructuralElement",
            field: "content",
            paths: vec!["paragraph", "sectionBreak"],
        };
        assert_eq!(
            err.to_string(),
            "StructuralElement.content: no value found at any of [paragraph, sectionBreak]"
        );

        let err = Error::UnknownContentType("paragraph, table".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown structural element content: paragraph, table"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_structural());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
