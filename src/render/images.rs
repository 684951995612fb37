//! Image resolution for embedded objects.
//!
//! Storing images is delegated to an [`ImageSink`]. Storing is best-effort:
//! when no sink or directory is configured, or the sink fails, the `<img>`
//! points at the remote URI instead.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::ImageProperties;

/// Collaborator that persists a remote image locally.
///
/// Implementations own retries and timeouts; the renderer calls `store`
/// once per image and never retries.
pub trait ImageSink: Send + Sync {
    /// Store the image at `uri` under `target`, returning the stored path.
    fn store(&self, uri: &str, target: &Path) -> Result<PathBuf>;
}

/// Decides the `src` of each image for one render.
pub(crate) struct ImageResolver<'a> {
    sink: Option<&'a dyn ImageSink>,
    dir: Option<&'a Path>,
    prefix: &'a str,
}

impl<'a> ImageResolver<'a> {
    pub(crate) fn new(
        sink: Option<&'a dyn ImageSink>,
        dir: Option<&'a Path>,
        prefix: &'a str,
    ) -> Self {
        Self { sink, dir, prefix }
    }

    /// `src` for an image, or `None` when it has no URI at all.
    pub(crate) fn resolve(
        &self,
        document_id: Option<&str>,
        object_id: &str,
        image: &ImageProperties,
    ) -> Option<String> {
        let remote = image.remote_uri()?;

        let (Some(sink), Some(dir)) = (self.sink, self.dir) else {
            return Some(remote.to_string());
        };

        let file_name = local_file_name(document_id, object_id);
        let target = dir.join(&file_name);
        match sink.store(remote, &target) {
            Ok(stored) => {
                let name = stored
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or(file_name);
                Some(format!("{}{}", self.prefix, name))
            }
            Err(e) => {
                log::warn!("Failed to store image {}: {}", object_id, e);
                Some(remote.to_string())
            }
        }
    }
}

/// File name an image is stored under: document id plus object id.
fn local_file_name(document_id: Option<&str>, object_id: &str) -> String {
    let raw = match document_id {
        Some(doc) => format!("{}_{}", doc, object_id),
        None => object_id.to_string(),
    };
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::sync::Mutex;

    struct Recording {
        calls: Mutex<Vec<(String, PathBuf)>>,
        fail: bool,
    }

    impl ImageSink for Recording {
        fn store(&self, uri: &str, target: &Path) -> Result<PathBuf> {
            self.calls
                .lock()
                .unwrap()
                .push((uri.to_string(), target.to_path_buf()));
            if self.fail {
                Err(Error::Render("offline".to_string()))
            } else {
                Ok(target.to_path_buf())
            }
        }
    }

    fn image() -> ImageProperties {
        ImageProperties {
            content_uri: Some("https://img.example/a".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_without_sink_uses_remote() {
        let resolver = ImageResolver::new(None, Some(Path::new("imgs")), "");
        assert_eq!(
            resolver.resolve(Some("doc"), "kix.1", &image()).as_deref(),
            Some("https://img.example/a")
        );
        assert_eq!(resolver.resolve(None, "kix.1", &ImageProperties::default()), None);
    }

    #[test]
    fn test_stored_image_uses_prefix() {
        let sink = Recording {
            calls: Mutex::new(Vec::new()),
            fail: false,
        };
        let resolver = ImageResolver::new(Some(&sink), Some(Path::new("imgs")), "/static/");

        let src = resolver.resolve(Some("doc"), "kix.1", &image());
        assert_eq!(src.as_deref(), Some("/static/doc_kix.1"));

        let calls = sink.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "https://img.example/a");
        assert_eq!(calls[0].1, Path::new("imgs").join("doc_kix.1"));
    }

    #[test]
    fn test_sink_failure_degrades_to_remote() {
        let sink = Recording {
            calls: Mutex::new(Vec::new()),
            fail: true,
        };
        let resolver = ImageResolver::new(Some(&sink), Some(Path::new("imgs")), "");
        assert_eq!(
            resolver.resolve(Some("doc"), "kix.1", &image()).as_deref(),
            Some("https://img.example/a")
        );
    }

    #[test]
    fn test_file_name_sanitized() {
        assert_eq!(local_file_name(Some("a/b"), "kix:1"), "a_b_kix_1");
    }
}
