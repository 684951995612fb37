//! Structural elements and their polymorphic content.

use serde::Serialize;

use super::{Dimension, DimensionPack, HeaderFooterIds, Paragraph, Suggestions, Table};
use crate::error::{Error, Result};
use crate::mapping::{node_values, Field, FromNode, Node};

/// The four mutually exclusive wrapper keys of a structural element.
const CONTENT_TAGS: [&str; 4] = ["paragraph", "sectionBreak", "table", "tableOfContents"];

/// A top-level unit of a body, cell, segment or table of contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuralElement {
    /// Start offset in the document
    pub start_index: i64,
    /// End offset in the document
    pub end_index: Option<i64>,
    /// What the element holds
    pub content: Content,
}

impl StructuralElement {
    const START_INDEX: Field = Field::at("startIndex").or_int(0);
    const END_INDEX: Field = Field::at("endIndex");
    const CONTENT: Field = Field::at("paragraph")
        .alt(&["sectionBreak", "table", "tableOfContents"])
        .named("content")
        .strict();

    /// Wrap content without offsets.
    pub fn new(content: Content) -> Self {
        Self {
            start_index: 0,
            end_index: None,
            content,
        }
    }

    /// The paragraph, if this element is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match &self.content {
            Content::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// Whether this element starts a new section.
    pub fn is_section_break(&self) -> bool {
        matches!(self.content, Content::SectionBreak(_))
    }
}

impl FromNode for StructuralElement {
    const TYPE_NAME: &'static str = "StructuralElement";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        let present: Vec<&str> = CONTENT_TAGS
            .iter()
            .copied()
            .filter(|tag| node.has(tag))
            .collect();
        if present.len() > 1 {
            return Err(Error::UnknownContentType(format!(
                "element carries several content keys: {}",
                present.join(", ")
            )));
        }

        Ok(Self {
            start_index: node.require(&Self::START_INDEX)?,
            end_index: node.get(&Self::END_INDEX)?,
            content: node.require(&Self::CONTENT)?,
        })
    }
}

/// Content of a structural element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Content {
    /// A paragraph
    Paragraph(Paragraph),
    /// Start of a new section
    SectionBreak(SectionBreak),
    /// A table
    Table(Table),
    /// A table of contents
    TableOfContents(TableOfContents),
}

impl Content {
    /// Decide the content shape from the keys of the inner object.
    fn classify(node: &Node<'_>) -> Result<Self> {
        if node.has("elements") {
            return Ok(Self::Paragraph(node.pack()?));
        }
        if node.has("sectionStyle") {
            return Ok(Self::SectionBreak(node.pack()?));
        }
        if node.has("tableRows") {
            return Ok(Self::Table(node.pack()?));
        }
        if node.raw().get("content").is_some_and(|v| v.is_array()) {
            return Ok(Self::TableOfContents(node.pack()?));
        }

        let keys: Vec<&str> = node.raw().keys().map(String::as_str).collect();
        Err(Error::UnknownContentType(format!(
            "no known shape for keys [{}]",
            keys.join(", ")
        )))
    }

    /// Short name used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Paragraph(_) => "paragraph",
            Self::SectionBreak(_) => "section break",
            Self::Table(_) => "table",
            Self::TableOfContents(_) => "table of contents",
        }
    }
}

impl FromNode for Content {
    const TYPE_NAME: &'static str = "Content";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Self::classify(node)
    }
}

/// Start of a section, carrying the section's layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionBreak {
    /// Layout of the section that starts here
    pub section_style: SectionStyle,
    /// Suggested edits
    pub suggestions: Suggestions,
}

impl SectionBreak {
    const SECTION_STYLE: Field = Field::at("sectionStyle");
}

impl FromNode for SectionBreak {
    const TYPE_NAME: &'static str = "SectionBreak";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            section_style: node.get_or_default(&Self::SECTION_STYLE)?,
            suggestions: node.pack()?,
        })
    }
}

/// One column of a multi-column section.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionColumnProperties {
    /// Column width
    pub width: Option<Dimension>,
    /// Gap after the column
    pub padding_end: Option<Dimension>,
}

impl SectionColumnProperties {
    const WIDTH: Field = Field::at("width");
    const PADDING_END: Field = Field::at("paddingEnd");
}

impl FromNode for SectionColumnProperties {
    const TYPE_NAME: &'static str = "SectionColumnProperties";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            width: node.get(&Self::WIDTH)?,
            padding_end: node.get(&Self::PADDING_END)?,
        })
    }
}

/// Layout of a section.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionStyle {
    /// Columns; empty means a single column
    pub column_properties: Vec<SectionColumnProperties>,
    /// `NONE` or `BETWEEN_EACH_COLUMN`
    pub column_separator_style: Option<String>,
    /// Text direction
    pub content_direction: Option<String>,
    /// `CONTINUOUS` or `NEXT_PAGE`
    pub section_type: Option<String>,
    /// Page margins of the section
    pub margins: DimensionPack,
    /// Header margin
    pub margin_header: Option<Dimension>,
    /// Footer margin
    pub margin_footer: Option<Dimension>,
    /// Header and footer ids
    pub header_footer: HeaderFooterIds,
    /// First page number
    pub page_number_start: Option<i64>,
}

impl SectionStyle {
    const COLUMN_PROPERTIES: Field = Field::at("columnProperties");
    const COLUMN_SEPARATOR: Field = Field::at("columnSeparatorStyle");
    const CONTENT_DIRECTION: Field = Field::at("contentDirection");
    const SECTION_TYPE: Field = Field::at("sectionType");
    const MARGIN_HEADER: Field = Field::at("marginHeader");
    const MARGIN_FOOTER: Field = Field::at("marginFooter");
    const PAGE_NUMBER_START: Field = Field::at("pageNumberStart");

    /// Number of columns, at least one.
    pub fn column_count(&self) -> usize {
        self.column_properties.len().max(1)
    }

    /// Whether a rule is drawn between columns.
    pub fn has_column_separator(&self) -> bool {
        self.column_separator_style.as_deref() == Some("BETWEEN_EACH_COLUMN")
    }
}

impl FromNode for SectionStyle {
    const TYPE_NAME: &'static str = "SectionStyle";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            column_properties: node.get_or_default(&Self::COLUMN_PROPERTIES)?,
            column_separator_style: node.get(&Self::COLUMN_SEPARATOR)?,
            content_direction: node.get(&Self::CONTENT_DIRECTION)?,
            section_type: node.get(&Self::SECTION_TYPE)?,
            margins: node.pack()?,
            margin_header: node.get(&Self::MARGIN_HEADER)?,
            margin_footer: node.get(&Self::MARGIN_FOOTER)?,
            header_footer: node.pack()?,
            page_number_start: node.get(&Self::PAGE_NUMBER_START)?,
        })
    }
}

/// A generated table of contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableOfContents {
    /// Entries, usually linked paragraphs
    pub content: Vec<StructuralElement>,
    /// Suggested edits
    pub suggestions: Suggestions,
}

impl TableOfContents {
    const CONTENT: Field = Field::at("content").strict();
}

impl FromNode for TableOfContents {
    const TYPE_NAME: &'static str = "TableOfContents";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            content: node.require(&Self::CONTENT)?,
            suggestions: node.pack()?,
        })
    }
}

node_values!(
    StructuralElement,
    Content,
    SectionBreak,
    SectionColumnProperties,
    SectionStyle,
    TableOfContents,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_dispatch() {
        let para: StructuralElement = Node::build(&json!({
            "startIndex": 1,
            "endIndex": 7,
            "paragraph": {"elements": [{"textRun": {"content": "Hello\n"}}]},
        }))
        .unwrap();
        assert_eq!(para.content.kind_name(), "paragraph");
        assert_eq!(para.end_index, Some(7));

        let section: StructuralElement = Node::build(&json!({
            "endIndex": 1,
            "sectionBreak": {"sectionStyle": {"columnSeparatorStyle": "NONE"}},
        }))
        .unwrap();
        assert!(section.is_section_break());
        assert_eq!(section.start_index, 0);

        let toc: StructuralElement =
            Node::build(&json!({"tableOfContents": {"content": []}})).unwrap();
        assert_eq!(toc.content.kind_name(), "table of contents");
    }

    #[test]
    fn test_multiple_tags_rejected() {
        let err = Node::build::<StructuralElement>(&json!({
            "paragraph": {"elements": []},
            "table": {"tableRows": []},
        }))
        .unwrap_err();
        assert!(matches!(err, Error::UnknownContentType(_)));
        assert!(err.is_structural());
    }

    #[test]
    fn test_unrecognised_shape_rejected() {
        let err =
            Node::build::<StructuralElement>(&json!({"paragraph": {"foo": 1}})).unwrap_err();
        assert!(matches!(err, Error::UnknownContentType(_)));
    }

    #[test]
    fn test_missing_content_is_mapping_error() {
        let err = Node::build::<StructuralElement>(&json!({"startIndex": 3})).unwrap_err();
        match err {
            Error::Mapping { field, paths, .. } => {
                assert_eq!(field, "content");
                assert_eq!(
                    paths,
                    vec!["paragraph", "sectionBreak", "table", "tableOfContents"]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_section_column_count() {
        let style: SectionStyle = Node::build(&json!({
            "columnProperties": [
                {"paddingEnd": {"magnitude": 36, "unit": "PT"}},
                {},
            ],
            "columnSeparatorStyle": "BETWEEN_EACH_COLUMN",
        }))
        .unwrap();
        assert_eq!(style.column_count(), 2);
        assert!(style.has_column_separator());
        assert_eq!(SectionStyle::default().column_count(), 1);
    }
}
