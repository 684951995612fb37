//! Sources of raw document bytes.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Collaborator that provides the raw JSON export of a document by id.
///
/// Implementations own authentication, caching and retries; conversion
/// only asks for bytes.
pub trait DocumentSource: Send + Sync {
    /// Fetch the raw bytes of a document.
    fn fetch(&self, id: &str) -> Result<Vec<u8>>;
}

/// Reads documents from `<root>/<id>` on the local filesystem.
///
/// Useful for tests and for exports saved ahead of time.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extension: Option<String>,
}

impl DirectorySource {
    /// Create a source reading from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: None,
        }
    }

    /// Append an extension to every id (e.g. `json` reads `<id>.json`).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Directory documents are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a document id maps to.
    ///
    /// Ids that would escape the root directory are rejected.
    pub fn path_for(&self, id: &str) -> Result<PathBuf> {
        if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\']) {
            return Err(Error::Source {
                id: id.to_string(),
                message: "invalid document id".to_string(),
            });
        }

        let file_name = match &self.extension {
            Some(ext) => format!("{}.{}", id, ext),
            None => id.to_string(),
        };
        Ok(self.root.join(file_name))
    }
}

impl DocumentSource for DirectorySource {
    fn fetch(&self, id: &str) -> Result<Vec<u8>> {
        let path = self.path_for(id)?;
        log::debug!("Reading document {} from {}", id, path.display());

        std::fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::Source {
                id: id.to_string(),
                message: format!("not found in {}", self.root.display()),
            },
            _ => Error::Io(e),
        })
    }
}
