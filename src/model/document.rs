//! Root document node.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::{
    DocumentStyle, InlineOrPositionedObject, List, NamedStyle, Paragraph, StructuralElement,
};
use crate::error::Result;
use crate::mapping::{node_values, Field, FromNode, Node};

/// A header, footer or footnote body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Segment {
    /// Segment id
    pub segment_id: Option<String>,
    /// Segment content
    pub content: Vec<StructuralElement>,
}

impl Segment {
    const SEGMENT_ID: Field = Field::at("headerId")
        .alt(&["footerId", "footnoteId"])
        .named("segmentId");
    const CONTENT: Field = Field::at("content");
}

impl FromNode for Segment {
    const TYPE_NAME: &'static str = "Segment";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            segment_id: node.get(&Self::SEGMENT_ID)?,
            content: node.get_or_default(&Self::CONTENT)?,
        })
    }
}

/// A span of the document addressed by a named range.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Range {
    /// Segment the range lives in; unset means the body
    pub segment_id: Option<String>,
    /// Start offset
    pub start_index: Option<i64>,
    /// End offset
    pub end_index: i64,
}

impl Range {
    const SEGMENT_ID: Field = Field::at("segmentId");
    const START_INDEX: Field = Field::at("startIndex");
    const END_INDEX: Field = Field::at("endIndex").or_int(0);
}

impl FromNode for Range {
    const TYPE_NAME: &'static str = "Range";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            segment_id: node.get(&Self::SEGMENT_ID)?,
            start_index: node.get(&Self::START_INDEX)?,
            end_index: node.require(&Self::END_INDEX)?,
        })
    }
}

/// One named range.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NamedRange {
    /// Range id
    pub named_range_id: Option<String>,
    /// Range name
    pub name: Option<String>,
    /// Spans covered by the range
    pub ranges: Vec<Range>,
}

impl NamedRange {
    const NAMED_RANGE_ID: Field = Field::at("namedRangeId");
    const NAME: Field = Field::at("name");
    const RANGES: Field = Field::at("ranges");
}

impl FromNode for NamedRange {
    const TYPE_NAME: &'static str = "NamedRange";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            named_range_id: node.get(&Self::NAMED_RANGE_ID)?,
            name: node.get(&Self::NAME)?,
            ranges: node.get_or_default(&Self::RANGES)?,
        })
    }
}

/// All named ranges sharing one name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NamedRanges {
    /// Shared name
    pub name: Option<String>,
    /// Ranges with that name
    pub named_ranges: Vec<NamedRange>,
}

impl NamedRanges {
    const NAME: Field = Field::at("name");
    const NAMED_RANGES: Field = Field::at("namedRanges");
}

impl FromNode for NamedRanges {
    const TYPE_NAME: &'static str = "NamedRanges";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            name: node.get(&Self::NAME)?,
            named_ranges: node.get_or_default(&Self::NAMED_RANGES)?,
        })
    }
}

/// A parsed document: the root of the model.
///
/// Built once from a JSON snapshot and read-only afterwards. All id-keyed
/// maps are ordered so that anything derived from them is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    /// Document id
    pub document_id: Option<String>,
    /// Title
    pub title: Option<String>,
    /// Revision id
    pub revision_id: Option<String>,
    /// Suggestions view mode the export was made with
    pub suggestions_view_mode: Option<String>,
    /// Page-level style
    pub document_style: DocumentStyle,
    /// Body content in order
    pub body: Vec<StructuralElement>,
    /// Headers by id
    pub headers: BTreeMap<String, Segment>,
    /// Footers by id
    pub footers: BTreeMap<String, Segment>,
    /// Footnotes by id
    pub footnotes: BTreeMap<String, Segment>,
    /// Named styles
    pub named_styles: Vec<NamedStyle>,
    /// Lists by id
    pub lists: BTreeMap<String, List>,
    /// Named ranges by name
    pub named_ranges: BTreeMap<String, NamedRanges>,
    /// Inline objects by id
    pub inline_objects: BTreeMap<String, InlineOrPositionedObject>,
    /// Positioned objects by id
    pub positioned_objects: BTreeMap<String, InlineOrPositionedObject>,
}

impl Document {
    const DOCUMENT_ID: Field = Field::at("documentId").alt(&["document_id"]);
    const TITLE: Field = Field::at("title");
    const REVISION_ID: Field = Field::at("revisionId");
    const SUGGESTIONS_VIEW_MODE: Field = Field::at("suggestionsViewMode");
    const DOCUMENT_STYLE: Field = Field::at("documentStyle");
    const BODY: Field = Field::at("body.content").named("body").strict();
    const HEADERS: Field = Field::at("headers");
    const FOOTERS: Field = Field::at("footers");
    const FOOTNOTES: Field = Field::at("footnotes");
    const NAMED_STYLES: Field = Field::at("namedStyles.styles").named("namedStyles");
    const LISTS: Field = Field::at("lists");
    const NAMED_RANGES: Field = Field::at("namedRanges");
    const INLINE_OBJECTS: Field = Field::at("inlineObjects");
    const POSITIONED_OBJECTS: Field = Field::at("positionedObjects");

    /// Build a document from a JSON value.
    pub fn from_value(value: &Value) -> Result<Self> {
        Node::build(value)
    }

    /// Build a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Build a document from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(&value)
    }

    /// Look up a named style by type.
    pub fn named_style(&self, style_type: &str) -> Option<&NamedStyle> {
        self.named_styles
            .iter()
            .find(|s| s.named_style_type == style_type)
    }

    /// Look up a list by id.
    pub fn list(&self, list_id: &str) -> Option<&List> {
        self.lists.get(list_id)
    }

    /// Look up an inline object by id.
    pub fn inline_object(&self, object_id: &str) -> Option<&InlineOrPositionedObject> {
        self.inline_objects.get(object_id)
    }

    /// Look up a positioned object by id.
    pub fn positioned_object(&self, object_id: &str) -> Option<&InlineOrPositionedObject> {
        self.positioned_objects.get(object_id)
    }

    /// The default header, if the document declares one.
    pub fn default_header(&self) -> Option<&Segment> {
        let id = self.document_style.header_footer.default_header_id.as_ref()?;
        self.headers.get(id)
    }

    /// The default footer, if the document declares one.
    pub fn default_footer(&self) -> Option<&Segment> {
        let id = self.document_style.header_footer.default_footer_id.as_ref()?;
        self.footers.get(id)
    }

    /// Body paragraphs in order, including those inside tables and tables
    /// of contents.
    pub fn paragraphs(&self) -> Vec<&Paragraph> {
        fn collect<'a>(elements: &'a [StructuralElement], out: &mut Vec<&'a Paragraph>) {
            use super::Content;

            for element in elements {
                match &element.content {
                    Content::Paragraph(p) => out.push(p),
                    Content::Table(table) => {
                        for row in &table.table_rows {
                            for cell in &row.cells {
                                collect(&cell.content, out);
                            }
                        }
                    }
                    Content::TableOfContents(toc) => collect(&toc.content, out),
                    Content::SectionBreak(_) => {}
                }
            }
        }

        let mut out = Vec::new();
        collect(&self.body, &mut out);
        out
    }

    /// Plain text of the body, one line per paragraph.
    pub fn plain_text(&self) -> String {
        self.paragraphs()
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Objects backed by an image, inline first, as `(id, object)` pairs.
    pub fn image_objects(&self) -> impl Iterator<Item = (&str, &InlineOrPositionedObject)> {
        self.inline_objects
            .iter()
            .chain(self.positioned_objects.iter())
            .filter(|(_, obj)| obj.image().is_some())
            .map(|(id, obj)| (id.as_str(), obj))
    }
}

impl FromNode for Document {
    const TYPE_NAME: &'static str = "Document";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            document_id: node.get(&Self::DOCUMENT_ID)?,
            title: node.get(&Self::TITLE)?,
            revision_id: node.get(&Self::REVISION_ID)?,
            suggestions_view_mode: node.get(&Self::SUGGESTIONS_VIEW_MODE)?,
            document_style: node.get_or_default(&Self::DOCUMENT_STYLE)?,
            body: node.require(&Self::BODY)?,
            headers: node.get_or_default(&Self::HEADERS)?,
            footers: node.get_or_default(&Self::FOOTERS)?,
            footnotes: node.get_or_default(&Self::FOOTNOTES)?,
            named_styles: node.get_or_default(&Self::NAMED_STYLES)?,
            lists: node.get_or_default(&Self::LISTS)?,
            named_ranges: node.get_or_default(&Self::NAMED_RANGES)?,
            inline_objects: node.get_or_default(&Self::INLINE_OBJECTS)?,
            positioned_objects: node.get_or_default(&Self::POSITIONED_OBJECTS)?,
        })
    }
}

node_values!(Segment, Range, NamedRange, NamedRanges, Document);
