//! Paragraphs and their inline elements.

use serde::Serialize;

use super::{ParagraphStyle, Suggestions, TextStyle};
use crate::error::Result;
use crate::mapping::{node_values, Field, FromNode, Node};

/// List membership of a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bullet {
    /// Id of the list in [`Document::lists`](super::Document::lists)
    pub list_id: String,
    /// Nesting level, zero-based
    pub nesting_level: u32,
    /// Style of the bullet glyph (model only, not rendered)
    pub text_style: TextStyle,
}

impl Bullet {
    const LIST_ID: Field = Field::at("listId").strict();
    const NESTING_LEVEL: Field = Field::at("nestingLevel").or_int(0);
    const TEXT_STYLE: Field = Field::at("textStyle");

    /// Create a bullet.
    pub fn new(list_id: impl Into<String>, nesting_level: u32) -> Self {
        Self {
            list_id: list_id.into(),
            nesting_level,
            text_style: TextStyle::default(),
        }
    }
}

impl FromNode for Bullet {
    const TYPE_NAME: &'static str = "Bullet";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            list_id: node.require(&Self::LIST_ID)?,
            nesting_level: node.require(&Self::NESTING_LEVEL)?,
            text_style: node.get_or_default(&Self::TEXT_STYLE)?,
        })
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextRun {
    /// Text, possibly ending with the paragraph's terminating newline
    pub content: String,
    /// Explicit style of the run
    pub text_style: TextStyle,
    /// Suggested edits
    pub suggestions: Suggestions,
}

impl TextRun {
    const CONTENT: Field = Field::at("content").or_str("");
    const TEXT_STYLE: Field = Field::at("textStyle");

    /// Create an unstyled run.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Create a styled run.
    pub fn styled(content: impl Into<String>, text_style: TextStyle) -> Self {
        Self {
            content: content.into(),
            text_style,
            ..Default::default()
        }
    }
}

impl FromNode for TextRun {
    const TYPE_NAME: &'static str = "TextRun";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            content: node.require(&Self::CONTENT)?,
            text_style: node.get_or_default(&Self::TEXT_STYLE)?,
            suggestions: node.pack()?,
        })
    }
}

/// Page break, column break or horizontal rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Break {
    /// Style of the break character
    pub text_style: TextStyle,
    /// Suggested edits
    pub suggestions: Suggestions,
}

impl Break {
    const TEXT_STYLE: Field = Field::at("textStyle");
}

impl FromNode for Break {
    const TYPE_NAME: &'static str = "Break";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            text_style: node.get_or_default(&Self::TEXT_STYLE)?,
            suggestions: node.pack()?,
        })
    }
}

/// Reference to an entry of [`Document::inline_objects`](super::Document::inline_objects).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineObjectElement {
    /// Object id
    pub inline_object_id: String,
    /// Style of the anchor character
    pub text_style: TextStyle,
}

impl InlineObjectElement {
    const OBJECT_ID: Field = Field::at("inlineObjectId").strict();
    const TEXT_STYLE: Field = Field::at("textStyle");
}

impl FromNode for InlineObjectElement {
    const TYPE_NAME: &'static str = "InlineObjectElement";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            inline_object_id: node.require(&Self::OBJECT_ID)?,
            text_style: node.get_or_default(&Self::TEXT_STYLE)?,
        })
    }
}

/// Reference to a footnote segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FootnoteReference {
    /// Footnote segment id
    pub footnote_id: Option<String>,
    /// Rendered footnote number
    pub footnote_number: Option<String>,
}

impl FootnoteReference {
    const FOOTNOTE_ID: Field = Field::at("footnoteId");
    const FOOTNOTE_NUMBER: Field = Field::at("footnoteNumber");
}

impl FromNode for FootnoteReference {
    const TYPE_NAME: &'static str = "FootnoteReference";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            footnote_id: node.get(&Self::FOOTNOTE_ID)?,
            footnote_number: node.get(&Self::FOOTNOTE_NUMBER)?,
        })
    }
}

/// Text filled in by the editor (page number, page count).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AutoText {
    /// `PAGE_NUMBER` or `PAGE_COUNT`
    pub kind: Option<String>,
}

impl AutoText {
    const KIND: Field = Field::at("type").named("kind");
}

impl FromNode for AutoText {
    const TYPE_NAME: &'static str = "AutoText";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            kind: node.get(&Self::KIND)?,
        })
    }
}

/// A person mention.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Person {
    /// Mention id
    pub person_id: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Style of the mention chip
    pub text_style: TextStyle,
}

impl Person {
    const PERSON_ID: Field = Field::at("personId");
    const NAME: Field = Field::at("personProperties.name").named("name");
    const EMAIL: Field = Field::at("personProperties.email").named("email");
    const TEXT_STYLE: Field = Field::at("textStyle");
}

impl FromNode for Person {
    const TYPE_NAME: &'static str = "Person";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            person_id: node.get(&Self::PERSON_ID)?,
            name: node.get(&Self::NAME)?,
            email: node.get(&Self::EMAIL)?,
            text_style: node.get_or_default(&Self::TEXT_STYLE)?,
        })
    }
}

/// A link chip to another Google resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RichLink {
    /// Link id
    pub rich_link_id: Option<String>,
    /// Title shown in the chip
    pub title: Option<String>,
    /// Target URI
    pub uri: Option<String>,
    /// MIME type of the target
    pub mime_type: Option<String>,
    /// Style of the chip
    pub text_style: TextStyle,
}

impl RichLink {
    const RICH_LINK_ID: Field = Field::at("richLinkId");
    const TITLE: Field = Field::at("richLinkProperties.title").named("title");
    const URI: Field = Field::at("richLinkProperties.uri").named("uri");
    const MIME_TYPE: Field = Field::at("richLinkProperties.mimeType").named("mimeType");
    const TEXT_STYLE: Field = Field::at("textStyle");
}

impl FromNode for RichLink {
    const TYPE_NAME: &'static str = "RichLink";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            rich_link_id: node.get(&Self::RICH_LINK_ID)?,
            title: node.get(&Self::TITLE)?,
            uri: node.get(&Self::URI)?,
            mime_type: node.get(&Self::MIME_TYPE)?,
            text_style: node.get_or_default(&Self::TEXT_STYLE)?,
        })
    }
}

/// What a paragraph element holds, decided by which key is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineElement {
    /// Styled text
    TextRun(TextRun),
    /// Inline image or drawing
    InlineObject(InlineObjectElement),
    /// Page break
    PageBreak(Break),
    /// Column break
    ColumnBreak(Break),
    /// Horizontal rule
    HorizontalRule(Break),
    /// Footnote reference
    FootnoteReference(FootnoteReference),
    /// Equation (content is not exported)
    Equation,
    /// Page number or page count
    AutoText(AutoText),
    /// Person mention
    Person(Person),
    /// Link chip
    RichLink(RichLink),
    /// None of the known keys were present
    Unsupported {
        /// Keys found on the element
        keys: Vec<String>,
    },
}

impl InlineElement {
    const TEXT_RUN: Field = Field::at("textRun");
    const INLINE_OBJECT: Field = Field::at("inlineObjectElement");
    const PAGE_BREAK: Field = Field::at("pageBreak");
    const COLUMN_BREAK: Field = Field::at("columnBreak");
    const HORIZONTAL_RULE: Field = Field::at("horizontalRule");
    const FOOTNOTE_REFERENCE: Field = Field::at("footnoteReference");
    const AUTO_TEXT: Field = Field::at("autoText");
    const PERSON: Field = Field::at("person");
    const RICH_LINK: Field = Field::at("richLink");

    /// Classify an element object by the first known key it carries.
    fn classify(node: &Node<'_>) -> Result<Self> {
        if node.has("textRun") {
            return Ok(Self::TextRun(node.require(&Self::TEXT_RUN)?));
        }
        if node.has("inlineObjectElement") {
            return Ok(Self::InlineObject(node.require(&Self::INLINE_OBJECT)?));
        }
        if node.has("pageBreak") {
            return Ok(Self::PageBreak(node.require(&Self::PAGE_BREAK)?));
        }
        if node.has("columnBreak") {
            return Ok(Self::ColumnBreak(node.require(&Self::COLUMN_BREAK)?));
        }
        if node.has("horizontalRule") {
            return Ok(Self::HorizontalRule(node.require(&Self::HORIZONTAL_RULE)?));
        }
        if node.has("footnoteReference") {
            return Ok(Self::FootnoteReference(
                node.require(&Self::FOOTNOTE_REFERENCE)?,
            ));
        }
        if node.has("equation") {
            return Ok(Self::Equation);
        }
        if node.has("autoText") {
            return Ok(Self::AutoText(node.require(&Self::AUTO_TEXT)?));
        }
        if node.has("person") {
            return Ok(Self::Person(node.require(&Self::PERSON)?));
        }
        if node.has("richLink") {
            return Ok(Self::RichLink(node.require(&Self::RICH_LINK)?));
        }

        let keys = node
            .raw()
            .keys()
            .filter(|k| !matches!(k.as_str(), "startIndex" | "endIndex"))
            .cloned()
            .collect();
        Ok(Self::Unsupported { keys })
    }

    /// Name used in logs and warnings.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::TextRun(_) => "text run",
            Self::InlineObject(_) => "inline object",
            Self::PageBreak(_) => "page break",
            Self::ColumnBreak(_) => "column break",
            Self::HorizontalRule(_) => "horizontal rule",
            Self::FootnoteReference(_) => "footnote reference",
            Self::Equation => "equation",
            Self::AutoText(_) => "auto text",
            Self::Person(_) => "person",
            Self::RichLink(_) => "rich link",
            Self::Unsupported { .. } => "unknown element",
        }
    }
}

/// One element of a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParagraphElement {
    /// Start offset in the document
    pub start_index: Option<i64>,
    /// End offset in the document
    pub end_index: Option<i64>,
    /// Element content
    pub kind: InlineElement,
}

impl ParagraphElement {
    const START_INDEX: Field = Field::at("startIndex");
    const END_INDEX: Field = Field::at("endIndex");

    /// Wrap inline content without offsets.
    pub fn new(kind: InlineElement) -> Self {
        Self {
            start_index: None,
            end_index: None,
            kind,
        }
    }

    /// The text run, if this element is one.
    pub fn as_text_run(&self) -> Option<&TextRun> {
        match &self.kind {
            InlineElement::TextRun(run) => Some(run),
            _ => None,
        }
    }
}

impl FromNode for ParagraphElement {
    const TYPE_NAME: &'static str = "ParagraphElement";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            start_index: node.get(&Self::START_INDEX)?,
            end_index: node.get(&Self::END_INDEX)?,
            kind: InlineElement::classify(node)?,
        })
    }
}

/// A paragraph: newline-terminated inline content with a style.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Paragraph {
    /// Inline elements in document order
    pub elements: Vec<ParagraphElement>,
    /// Explicit paragraph style
    pub paragraph_style: ParagraphStyle,
    /// List membership
    pub bullet: Option<Bullet>,
    /// Ids of objects positioned relative to this paragraph
    pub positioned_object_ids: Vec<String>,
    /// Suggested edits
    pub suggestions: Suggestions,
}

impl Paragraph {
    const ELEMENTS: Field = Field::at("elements").strict();
    const PARAGRAPH_STYLE: Field = Field::at("paragraphStyle");
    const BULLET: Field = Field::at("bullet");
    const POSITIONED_OBJECT_IDS: Field = Field::at("positionedObjectIds");

    /// Create an empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph holding one unstyled run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_run(TextRun::new(text));
        p
    }

    /// Append a text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.elements
            .push(ParagraphElement::new(InlineElement::TextRun(run)));
    }

    /// Text runs in order.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.elements.iter().filter_map(ParagraphElement::as_text_run)
    }

    /// Plain text of all runs, without the terminating newline.
    pub fn plain_text(&self) -> String {
        let text: String = self.text_runs().map(|run| run.content.as_str()).collect();
        text.strip_suffix('\n').unwrap_or(&text).to_string()
    }

    /// Named style type of the paragraph, if any.
    pub fn named_style_type(&self) -> Option<&str> {
        self.paragraph_style.named_style_type.as_deref()
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        self.bullet.is_some()
    }
}

impl FromNode for Paragraph {
    const TYPE_NAME: &'static str = "Paragraph";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            elements: node.require(&Self::ELEMENTS)?,
            paragraph_style: node.get_or_default(&Self::PARAGRAPH_STYLE)?,
            bullet: node.get(&Self::BULLET)?,
            positioned_object_ids: node.get_or_default(&Self::POSITIONED_OBJECT_IDS)?,
            suggestions: node.pack()?,
        })
    }
}

node_values!(
    Bullet,
    TextRun,
    Break,
    InlineObjectElement,
    FootnoteReference,
    AutoText,
    Person,
    RichLink,
    ParagraphElement,
    Paragraph,
);
