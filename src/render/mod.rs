//! Rendering module for converting parsed documents to HTML and JSON.

mod html;
mod images;
mod json;
pub mod lists;
mod options;
mod result;

pub use html::{escape_html, to_html, to_html_with_stats, HtmlRenderer};
pub use images::ImageSink;
pub use json::{to_json, JsonFormat};
pub use lists::{ListMarker, ListStack, ListStep, ListTag};
pub use options::RenderOptions;
pub use result::{RenderResult, RenderStats, UnsupportedConstruct};
