//! Rendering options and configuration.

use std::path::PathBuf;

/// Options for rendering a document to HTML.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Directory images are stored into through the image sink
    pub image_dir: Option<PathBuf>,

    /// Prefix for stored image paths in `src` attributes (e.g. "./images/")
    pub image_path_prefix: String,

    /// Emit the document title as `<h1 class="doc-title">`
    pub include_title: bool,

    /// Render the default header before and the default footer after the body
    pub include_headers_footers: bool,

    /// Collect statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image directory.
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = Some(dir.into());
        self
    }

    /// Set the image path prefix.
    pub fn with_image_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.image_path_prefix = prefix.into();
        self
    }

    /// Enable or disable the title heading.
    pub fn with_title(mut self, include: bool) -> Self {
        self.include_title = include;
        self
    }

    /// Enable or disable headers and footers.
    pub fn with_headers_footers(mut self, include: bool) -> Self {
        self.include_headers_footers = include;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_image_dir("./images")
            .with_image_prefix("img/")
            .with_title(true)
            .with_headers_footers(true)
            .with_stats(true);

        assert_eq!(options.image_dir, Some(PathBuf::from("./images")));
        assert_eq!(options.image_path_prefix, "img/");
        assert!(options.include_title);
        assert!(options.include_headers_footers);
        assert!(options.collect_stats);
    }

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert!(options.image_dir.is_none());
        assert!(!options.include_title);
        assert!(!options.include_headers_footers);
        assert!(!options.collect_stats);
    }
}
