//! # gdoc-html
//!
//! Typed model and HTML renderer for Google Docs JSON exports.
//!
//! The export (`documents.get` schema) is turned into a typed [`Document`]
//! once; the renderer then walks it and produces semantic HTML that keeps
//! the layout: section columns, borders, shading, fonts, images and nested
//! lists.
//!
//! ## Quick Start
//!
//! ```
//! use gdoc_html::render;
//!
//! fn main() -> gdoc_html::Result<()> {
//!     let raw = br#"{"body": {"content": [
//!         {"paragraph": {"elements": [{"textRun": {"content": "Hello\n"}}]}}
//!     ]}}"#;
//!
//!     let html = render(raw)?;
//!     assert!(html.contains("<p>Hello</p>"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Declarative mapping**: per-type field tables with alternate paths,
//!   fallbacks and strict fields
//! - **Style resolution**: explicit styles layered over named styles
//! - **Layout preservation**: columns, borders, shading, fonts, nested lists
//! - **Images**: optional storage through an [`ImageSink`]
//! - **Parallel processing**: uses Rayon for batch conversion

pub mod error;
pub mod mapping;
pub mod model;
pub mod render;
pub mod source;
pub mod style;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Content, Document, List, NamedStyle, Paragraph, ParagraphStyle, StructuralElement, Table,
    TableCell, TableRow, TextRun, TextStyle,
};
pub use render::{
    HtmlRenderer, ImageSink, JsonFormat, RenderOptions, RenderResult, RenderStats,
    UnsupportedConstruct,
};
pub use source::{DirectorySource, DocumentSource};

use std::path::PathBuf;
use std::sync::Arc;

use rayon::prelude::*;

/// Parse raw JSON bytes into a typed document.
///
/// # Example
///
/// ```
/// use gdoc_html::parse;
///
/// let doc = parse(br#"{"title": "Notes", "body": {"content": []}}"#).unwrap();
/// assert_eq!(doc.title.as_deref(), Some("Notes"));
/// ```
pub fn parse(data: &[u8]) -> Result<Document> {
    Document::from_slice(data)
}

/// Parse a JSON value into a typed document.
pub fn parse_value(value: &serde_json::Value) -> Result<Document> {
    Document::from_value(value)
}

/// Convert raw JSON bytes to HTML with default options.
pub fn render(data: &[u8]) -> Result<String> {
    render_with_options(data, &RenderOptions::default())
}

/// Convert raw JSON bytes to HTML with custom options.
///
/// # Example
///
/// ```
/// use gdoc_html::{render_with_options, RenderOptions};
///
/// let raw = br#"{"title": "Notes", "body": {"content": []}}"#;
/// let options = RenderOptions::new().with_title(true);
/// let html = render_with_options(raw, &options).unwrap();
/// assert!(html.contains("<h1 class=\"doc-title\">Notes</h1>"));
/// ```
pub fn render_with_options(data: &[u8], options: &RenderOptions) -> Result<String> {
    let doc = parse(data)?;
    render::to_html(&doc, options)
}

/// Convert raw JSON bytes to HTML, collecting statistics and warnings.
pub fn render_with_stats(data: &[u8], options: &RenderOptions) -> Result<RenderResult> {
    let doc = parse(data)?;
    render::to_html_with_stats(&doc, options)
}

/// Fetch a document from a source and convert it to HTML.
pub fn render_from_source(
    source: &dyn DocumentSource,
    id: &str,
    options: &RenderOptions,
) -> Result<String> {
    let data = source.fetch(id)?;
    render_with_options(&data, options)
}

/// Convert many raw documents in parallel.
///
/// Each document is converted independently; results keep input order and
/// one failing document does not affect the others.
pub fn render_batch<D>(documents: &[D], options: &RenderOptions) -> Vec<Result<String>>
where
    D: AsRef<[u8]> + Sync,
{
    documents
        .par_iter()
        .map(|data| render_with_options(data.as_ref(), options))
        .collect()
}

/// Convert raw JSON bytes to the typed-tree JSON export.
pub fn to_json(data: &[u8], format: JsonFormat) -> Result<String> {
    let doc = parse(data)?;
    render::to_json(&doc, format)
}

/// Builder for parsing and converting documents.
///
/// # Example
///
/// ```
/// use gdoc_html::GdocHtml;
///
/// let raw = br#"{"title": "Notes", "body": {"content": []}}"#;
/// let html = GdocHtml::new()
///     .with_title()
///     .with_headers_footers()
///     .parse(raw)?
///     .to_html()?;
/// assert!(html.starts_with("<div class=\"document\">"));
/// # Ok::<(), gdoc_html::Error>(())
/// ```
#[derive(Default)]
pub struct GdocHtml {
    render_options: RenderOptions,
    image_sink: Option<Arc<dyn ImageSink>>,
}

impl GdocHtml {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit the document title.
    pub fn with_title(mut self) -> Self {
        self.render_options = self.render_options.with_title(true);
        self
    }

    /// Render the default header and footer.
    pub fn with_headers_footers(mut self) -> Self {
        self.render_options = self.render_options.with_headers_footers(true);
        self
    }

    /// Set image output directory.
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.render_options = self.render_options.with_image_dir(dir);
        self
    }

    /// Set the prefix used for stored image paths.
    pub fn with_image_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_image_prefix(prefix);
        self
    }

    /// Store images through a sink.
    pub fn with_image_sink(mut self, sink: Arc<dyn ImageSink>) -> Self {
        self.image_sink = Some(sink);
        self
    }

    /// Parse raw JSON bytes.
    pub fn parse(self, data: &[u8]) -> Result<GdocResult> {
        let document = parse(data)?;
        Ok(GdocResult {
            document,
            render_options: self.render_options,
            image_sink: self.image_sink,
        })
    }

    /// Fetch and parse a document from a source.
    pub fn fetch(self, source: &dyn DocumentSource, id: &str) -> Result<GdocResult> {
        let data = source.fetch(id)?;
        self.parse(&data)
    }
}

/// A parsed document together with its render settings.
pub struct GdocResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
    image_sink: Option<Arc<dyn ImageSink>>,
}

impl GdocResult {
    fn renderer(&self, collect_stats: bool) -> HtmlRenderer<'_> {
        let options = self.render_options.clone().with_stats(collect_stats);
        let renderer = HtmlRenderer::new(options);
        match &self.image_sink {
            Some(sink) => renderer.with_image_sink(sink.as_ref()),
            None => renderer,
        }
    }

    /// Convert to HTML.
    pub fn to_html(&self) -> Result<String> {
        self.renderer(self.render_options.collect_stats)
            .render(&self.document)
    }

    /// Convert to HTML with statistics and warnings.
    pub fn to_html_with_stats(&self) -> Result<RenderResult> {
        self.renderer(true).render_with_stats(&self.document)
    }

    /// Convert to the typed-tree JSON export.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Plain text of the body.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
