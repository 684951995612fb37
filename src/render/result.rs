//! Rendering result with statistics and warnings.

use std::fmt;

use serde::Serialize;

/// Result of rendering a document: HTML plus what was met on the way.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderResult {
    /// The rendered HTML
    pub content: String,

    /// Rendering statistics (zero unless collection was enabled)
    pub stats: RenderStats,

    /// Constructs that have no HTML equivalent and were left out
    pub warnings: Vec<UnsupportedConstruct>,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: RenderStats, warnings: Vec<UnsupportedConstruct>) -> Self {
        Self {
            content,
            stats,
            warnings,
        }
    }

    /// Whether anything was left out.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A paragraph element rendered as nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnsupportedConstruct {
    /// What was met, e.g. "footnote reference"
    pub kind: String,

    /// Document offset of the element, if known
    pub start_index: Option<i64>,
}

impl UnsupportedConstruct {
    /// Create a warning.
    pub fn new(kind: impl Into<String>, start_index: Option<i64>) -> Self {
        Self {
            kind: kind.into(),
            start_index,
        }
    }
}

impl fmt::Display for UnsupportedConstruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start_index {
            Some(index) => write!(f, "unsupported {} at index {}", self.kind, index),
            None => write!(f, "unsupported {}", self.kind),
        }
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderStats {
    /// Number of sections rendered
    pub section_count: u32,

    /// Number of paragraphs rendered (headings and list items included)
    pub paragraph_count: u32,

    /// Number of headings rendered
    pub heading_count: u32,

    /// Number of tables rendered
    pub table_count: u32,

    /// Number of lists opened (each nesting level counts)
    pub list_count: u32,

    /// Number of list items rendered
    pub list_item_count: u32,

    /// Number of images rendered
    pub image_count: u32,

    /// Number of horizontal rules rendered
    pub horizontal_rule_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment section count.
    pub fn add_section(&mut self) {
        self.section_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Increment list count.
    pub fn add_list(&mut self) {
        self.list_count += 1;
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Increment image count.
    pub fn add_image(&mut self) {
        self.image_count += 1;
    }

    /// Increment horizontal rule count.
    pub fn add_horizontal_rule(&mut self) {
        self.horizontal_rule_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}
