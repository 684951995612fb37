//! Text, paragraph, named and document styles.

use serde::Serialize;

use super::{Border, Color, Dimension, DimensionPack, Size};
use crate::error::Result;
use crate::mapping::{node_values, Field, FromNode, Node};

/// Hyperlink target of a text run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Link {
    /// External URL
    pub url: Option<String>,
    /// Bookmark inside the document
    pub bookmark_id: Option<String>,
    /// Heading inside the document
    pub heading_id: Option<String>,
}

impl Link {
    const URL: Field = Field::at("url");
    const BOOKMARK_ID: Field = Field::at("bookmarkId");
    const HEADING_ID: Field = Field::at("headingId");

    /// Create an external link.
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// The `href` this link points to, if it can be expressed.
    pub fn href(&self) -> Option<String> {
        if let Some(url) = &self.url {
            return Some(url.clone());
        }
        self.heading_id
            .as_ref()
            .or(self.bookmark_id.as_ref())
            .map(|id| format!("#{}", id))
    }
}

impl FromNode for Link {
    const TYPE_NAME: &'static str = "Link";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            url: node.get(&Self::URL)?,
            bookmark_id: node.get(&Self::BOOKMARK_ID)?,
            heading_id: node.get(&Self::HEADING_ID)?,
        })
    }
}

/// Font family with an explicit weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeightedFontFamily {
    /// Family name
    pub font_family: Option<String>,
    /// CSS-style weight (100-900)
    pub weight: Option<i64>,
}

impl WeightedFontFamily {
    const FONT_FAMILY: Field = Field::at("fontFamily");
    const WEIGHT: Field = Field::at("weight");
}

impl FromNode for WeightedFontFamily {
    const TYPE_NAME: &'static str = "WeightedFontFamily";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            font_family: node.get(&Self::FONT_FAMILY)?,
            weight: node.get(&Self::WEIGHT)?,
        })
    }
}

/// Character-level styling. Every property is optional so that styles can
/// be layered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextStyle {
    /// Bold
    pub bold: Option<bool>,
    /// Italic
    pub italic: Option<bool>,
    /// Underline
    pub underline: Option<bool>,
    /// Strikethrough
    pub strikethrough: Option<bool>,
    /// Small capitals
    pub small_caps: Option<bool>,
    /// Background (highlight) color
    pub background_color: Option<Color>,
    /// Foreground (text) color
    pub foreground_color: Option<Color>,
    /// Font size
    pub font_size: Option<Dimension>,
    /// Font family and weight
    pub weighted_font_family: Option<WeightedFontFamily>,
    /// `SUPERSCRIPT`, `SUBSCRIPT` or `NONE`
    pub baseline_offset: Option<String>,
    /// Hyperlink
    pub link: Option<Link>,
}

impl TextStyle {
    const BOLD: Field = Field::at("bold");
    const ITALIC: Field = Field::at("italic");
    const UNDERLINE: Field = Field::at("underline");
    const STRIKETHROUGH: Field = Field::at("strikethrough");
    const SMALL_CAPS: Field = Field::at("smallCaps");
    const BACKGROUND: Field = Field::at("backgroundColor");
    const FOREGROUND: Field = Field::at("foregroundColor");
    const FONT_SIZE: Field = Field::at("fontSize");
    const FONT_FAMILY: Field = Field::at("weightedFontFamily");
    const BASELINE_OFFSET: Field = Field::at("baselineOffset");
    const LINK: Field = Field::at("link");

    /// Whether no property is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layer `self` over `base`: properties set here win.
    pub fn merged_over(&self, base: &TextStyle) -> TextStyle {
        TextStyle {
            bold: self.bold.or(base.bold),
            italic: self.italic.or(base.italic),
            underline: self.underline.or(base.underline),
            strikethrough: self.strikethrough.or(base.strikethrough),
            small_caps: self.small_caps.or(base.small_caps),
            background_color: self
                .background_color
                .clone()
                .or_else(|| base.background_color.clone()),
            foreground_color: self
                .foreground_color
                .clone()
                .or_else(|| base.foreground_color.clone()),
            font_size: self.font_size.clone().or_else(|| base.font_size.clone()),
            weighted_font_family: self
                .weighted_font_family
                .clone()
                .or_else(|| base.weighted_font_family.clone()),
            baseline_offset: self
                .baseline_offset
                .clone()
                .or_else(|| base.baseline_offset.clone()),
            link: self.link.clone().or_else(|| base.link.clone()),
        }
    }

    /// Copy of this style with the link removed.
    pub fn without_link(&self) -> TextStyle {
        TextStyle {
            link: None,
            ..self.clone()
        }
    }
}

impl FromNode for TextStyle {
    const TYPE_NAME: &'static str = "TextStyle";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            bold: node.get(&Self::BOLD)?,
            italic: node.get(&Self::ITALIC)?,
            underline: node.get(&Self::UNDERLINE)?,
            strikethrough: node.get(&Self::STRIKETHROUGH)?,
            small_caps: node.get(&Self::SMALL_CAPS)?,
            background_color: node.get(&Self::BACKGROUND)?,
            foreground_color: node.get(&Self::FOREGROUND)?,
            font_size: node.get(&Self::FONT_SIZE)?,
            weighted_font_family: node.get(&Self::FONT_FAMILY)?,
            baseline_offset: node.get(&Self::BASELINE_OFFSET)?,
            link: node.get(&Self::LINK)?,
        })
    }
}

/// Paragraph-level styling.
///
/// A paragraph's style inherits from its named style type, which in turn
/// inherits from `NORMAL_TEXT`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParagraphStyle {
    /// Heading id (anchor target for links)
    pub heading_id: Option<String>,
    /// Named style type, e.g. `HEADING_1`
    pub named_style_type: Option<String>,
    /// `START`, `CENTER`, `END`, `JUSTIFIED`
    pub alignment: Option<String>,
    /// Line spacing as a percentage (100 = single)
    pub line_spacing: Option<f64>,
    /// `LEFT_TO_RIGHT` or `RIGHT_TO_LEFT`
    pub direction: Option<String>,
    /// Spacing mode
    pub spacing_mode: Option<String>,
    /// Space above the paragraph
    pub space_above: Option<Dimension>,
    /// Space below the paragraph
    pub space_below: Option<Dimension>,
    /// Border between adjacent bordered paragraphs
    pub border_between: Option<Border>,
    /// Top border
    pub border_top: Option<Border>,
    /// Bottom border
    pub border_bottom: Option<Border>,
    /// Left border
    pub border_left: Option<Border>,
    /// Right border
    pub border_right: Option<Border>,
    /// First line indent
    pub indent_first_line: Option<Dimension>,
    /// Start indent
    pub indent_start: Option<Dimension>,
    /// End indent
    pub indent_end: Option<Dimension>,
    /// Keep all lines on one page
    pub keep_lines_together: Option<bool>,
    /// Keep with the next paragraph
    pub keep_with_next: Option<bool>,
    /// Avoid widows and orphans
    pub avoid_widow_and_orphan: Option<bool>,
    /// Shading (background) color
    pub shading: Option<Color>,
    /// Page break before the paragraph
    pub page_break_before: Option<bool>,
}

impl ParagraphStyle {
    const HEADING_ID: Field = Field::at("headingId");
    const NAMED_STYLE_TYPE: Field = Field::at("namedStyleType");
    const ALIGNMENT: Field = Field::at("alignment");
    const LINE_SPACING: Field = Field::at("lineSpacing");
    const DIRECTION: Field = Field::at("direction");
    const SPACING_MODE: Field = Field::at("spacingMode");
    const SPACE_ABOVE: Field = Field::at("spaceAbove");
    const SPACE_BELOW: Field = Field::at("spaceBelow");
    const BORDER_BETWEEN: Field = Field::at("borderBetween");
    const BORDER_TOP: Field = Field::at("borderTop");
    const BORDER_BOTTOM: Field = Field::at("borderBottom");
    const BORDER_LEFT: Field = Field::at("borderLeft");
    const BORDER_RIGHT: Field = Field::at("borderRight");
    const INDENT_FIRST_LINE: Field = Field::at("indentFirstLine");
    const INDENT_START: Field = Field::at("indentStart");
    const INDENT_END: Field = Field::at("indentEnd");
    const KEEP_LINES_TOGETHER: Field = Field::at("keepLinesTogether");
    const KEEP_WITH_NEXT: Field = Field::at("keepWithNext");
    const AVOID_WIDOW: Field = Field::at("avoidWidowAndOrphan");
    const SHADING: Field = Field::at("shading.backgroundColor").named("shading");
    const PAGE_BREAK_BEFORE: Field = Field::at("pageBreakBefore");

    /// Layer `self` over `base`: properties set here win.
    pub fn merged_over(&self, base: &ParagraphStyle) -> ParagraphStyle {
        fn pick<T: Clone>(own: &Option<T>, base: &Option<T>) -> Option<T> {
            own.clone().or_else(|| base.clone())
        }

        ParagraphStyle {
            heading_id: pick(&self.heading_id, &base.heading_id),
            named_style_type: pick(&self.named_style_type, &base.named_style_type),
            alignment: pick(&self.alignment, &base.alignment),
            line_spacing: self.line_spacing.or(base.line_spacing),
            direction: pick(&self.direction, &base.direction),
            spacing_mode: pick(&self.spacing_mode, &base.spacing_mode),
            space_above: pick(&self.space_above, &base.space_above),
            space_below: pick(&self.space_below, &base.space_below),
            border_between: pick(&self.border_between, &base.border_between),
            border_top: pick(&self.border_top, &base.border_top),
            border_bottom: pick(&self.border_bottom, &base.border_bottom),
            border_left: pick(&self.border_left, &base.border_left),
            border_right: pick(&self.border_right, &base.border_right),
            indent_first_line: pick(&self.indent_first_line, &base.indent_first_line),
            indent_start: pick(&self.indent_start, &base.indent_start),
            indent_end: pick(&self.indent_end, &base.indent_end),
            keep_lines_together: self.keep_lines_together.or(base.keep_lines_together),
            keep_with_next: self.keep_with_next.or(base.keep_with_next),
            avoid_widow_and_orphan: self.avoid_widow_and_orphan.or(base.avoid_widow_and_orphan),
            shading: pick(&self.shading, &base.shading),
            page_break_before: self.page_break_before.or(base.page_break_before),
        }
    }
}

impl FromNode for ParagraphStyle {
    const TYPE_NAME: &'static str = "ParagraphStyle";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            heading_id: node.get(&Self::HEADING_ID)?,
            named_style_type: node.get(&Self::NAMED_STYLE_TYPE)?,
            alignment: node.get(&Self::ALIGNMENT)?,
            line_spacing: node.get(&Self::LINE_SPACING)?,
            direction: node.get(&Self::DIRECTION)?,
            spacing_mode: node.get(&Self::SPACING_MODE)?,
            space_above: node.get(&Self::SPACE_ABOVE)?,
            space_below: node.get(&Self::SPACE_BELOW)?,
            border_between: node.get(&Self::BORDER_BETWEEN)?,
            border_top: node.get(&Self::BORDER_TOP)?,
            border_bottom: node.get(&Self::BORDER_BOTTOM)?,
            border_left: node.get(&Self::BORDER_LEFT)?,
            border_right: node.get(&Self::BORDER_RIGHT)?,
            indent_first_line: node.get(&Self::INDENT_FIRST_LINE)?,
            indent_start: node.get(&Self::INDENT_START)?,
            indent_end: node.get(&Self::INDENT_END)?,
            keep_lines_together: node.get(&Self::KEEP_LINES_TOGETHER)?,
            keep_with_next: node.get(&Self::KEEP_WITH_NEXT)?,
            avoid_widow_and_orphan: node.get(&Self::AVOID_WIDOW)?,
            shading: node.get(&Self::SHADING)?,
            page_break_before: node.get(&Self::PAGE_BREAK_BEFORE)?,
        })
    }
}

/// A reusable style preset, referenced by its type name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NamedStyle {
    /// Style type, e.g. `NORMAL_TEXT`, `HEADING_2`
    pub named_style_type: String,
    /// Text style of the preset
    pub text_style: TextStyle,
    /// Paragraph style of the preset
    pub paragraph_style: ParagraphStyle,
}

impl NamedStyle {
    const NAMED_STYLE_TYPE: Field = Field::at("namedStyleType").strict();
    const TEXT_STYLE: Field = Field::at("textStyle");
    const PARAGRAPH_STYLE: Field = Field::at("paragraphStyle");

    /// Style type every other named style inherits from.
    pub const NORMAL_TEXT: &'static str = "NORMAL_TEXT";
}

impl FromNode for NamedStyle {
    const TYPE_NAME: &'static str = "NamedStyle";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            named_style_type: node.require(&Self::NAMED_STYLE_TYPE)?,
            text_style: node.get_or_default(&Self::TEXT_STYLE)?,
            paragraph_style: node.get_or_default(&Self::PARAGRAPH_STYLE)?,
        })
    }
}

/// Header and footer ids shared by the document style and section styles.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeaderFooterIds {
    /// Default header
    pub default_header_id: Option<String>,
    /// Default footer
    pub default_footer_id: Option<String>,
    /// Header for even pages
    pub even_page_header_id: Option<String>,
    /// Footer for even pages
    pub even_page_footer_id: Option<String>,
    /// Header for the first page
    pub first_page_header_id: Option<String>,
    /// Footer for the first page
    pub first_page_footer_id: Option<String>,
    /// Whether the first page uses its own header/footer
    pub use_first_page_header_footer: Option<bool>,
}

impl HeaderFooterIds {
    const DEFAULT_HEADER: Field = Field::at("defaultHeaderId");
    const DEFAULT_FOOTER: Field = Field::at("defaultFooterId");
    const EVEN_HEADER: Field = Field::at("evenPageHeaderId");
    const EVEN_FOOTER: Field = Field::at("evenPageFooterId");
    const FIRST_HEADER: Field = Field::at("firstPageHeaderId");
    const FIRST_FOOTER: Field = Field::at("firstPageFooterId");
    const USE_FIRST: Field = Field::at("useFirstPageHeaderFooter");
}

impl FromNode for HeaderFooterIds {
    const TYPE_NAME: &'static str = "HeaderFooterIds";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            default_header_id: node.get(&Self::DEFAULT_HEADER)?,
            default_footer_id: node.get(&Self::DEFAULT_FOOTER)?,
            even_page_header_id: node.get(&Self::EVEN_HEADER)?,
            even_page_footer_id: node.get(&Self::EVEN_FOOTER)?,
            first_page_header_id: node.get(&Self::FIRST_HEADER)?,
            first_page_footer_id: node.get(&Self::FIRST_FOOTER)?,
            use_first_page_header_footer: node.get(&Self::USE_FIRST)?,
        })
    }
}

/// Page-level style of the whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentStyle {
    /// Page background
    pub background: Option<Color>,
    /// Header and footer ids
    pub header_footer: HeaderFooterIds,
    /// Whether even pages use their own header/footer
    pub use_even_page_header_footer: Option<bool>,
    /// Whether header/footer margins are customized
    pub use_custom_header_footer_margins: Option<bool>,
    /// First page number
    pub page_number_start: Option<i64>,
    /// Page margins
    pub margins: DimensionPack,
    /// Header margin
    pub margin_header: Option<Dimension>,
    /// Footer margin
    pub margin_footer: Option<Dimension>,
    /// Page size
    pub page_size: Option<Size>,
}

impl DocumentStyle {
    const BACKGROUND: Field = Field::at("background");
    const USE_EVEN: Field = Field::at("useEvenPageHeaderFooter");
    const USE_CUSTOM_MARGINS: Field = Field::at("useCustomHeaderFooterMargins");
    const PAGE_NUMBER_START: Field = Field::at("pageNumberStart");
    const MARGIN_HEADER: Field = Field::at("marginHeader");
    const MARGIN_FOOTER: Field = Field::at("marginFooter");
    const PAGE_SIZE: Field = Field::at("pageSize");
}

impl FromNode for DocumentStyle {
    const TYPE_NAME: &'static str = "DocumentStyle";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            background: node.get(&Self::BACKGROUND)?,
            header_footer: node.pack()?,
            use_even_page_header_footer: node.get(&Self::USE_EVEN)?,
            use_custom_header_footer_margins: node.get(&Self::USE_CUSTOM_MARGINS)?,
            page_number_start: node.get(&Self::PAGE_NUMBER_START)?,
            margins: node.pack()?,
            margin_header: node.get(&Self::MARGIN_HEADER)?,
            margin_footer: node.get(&Self::MARGIN_FOOTER)?,
            page_size: node.get(&Self::PAGE_SIZE)?,
        })
    }
}

node_values!(
    Link,
    WeightedFontFamily,
    TextStyle,
    ParagraphStyle,
    NamedStyle,
    HeaderFooterIds,
    DocumentStyle,
);
