//! Style resolution: named-style layering and CSS generation.
//!
//! Resolution for a paragraph runs explicit style, then the paragraph's
//! named style, then `NORMAL_TEXT`; whatever is still unset is left to the
//! browser's defaults. Text styles follow the same chain, except that the
//! named part lands on the paragraph wrapper and runs only carry their own
//! explicit properties.

pub mod css;

use crate::model::{
    Border, Document, EmbeddedObject, NamedStyle, Paragraph, ParagraphStyle, SectionStyle,
    TableCellStyle, TableRowStyle, TextStyle,
};

pub use css::Css;

/// Resolves effective styles against one document's named styles.
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'a> {
    doc: &'a Document,
}

impl<'a> StyleResolver<'a> {
    /// Create a resolver for a document.
    pub fn new(doc: &'a Document) -> Self {
        Self { doc }
    }

    /// Named style of a type, if the document defines it.
    pub fn named(&self, style_type: &str) -> Option<&'a NamedStyle> {
        self.doc.named_style(style_type)
    }

    /// Named style chain for a type: the style itself, then `NORMAL_TEXT`.
    fn chain(&self, style_type: Option<&str>) -> impl Iterator<Item = &'a NamedStyle> {
        let own = style_type
            .filter(|t| *t != NamedStyle::NORMAL_TEXT)
            .and_then(|t| self.named(t));
        own.into_iter().chain(self.named(NamedStyle::NORMAL_TEXT))
    }

    /// Effective paragraph style: explicit over named over `NORMAL_TEXT`.
    pub fn paragraph_style(&self, para: &Paragraph) -> ParagraphStyle {
        self.chain(para.named_style_type())
            .fold(para.paragraph_style.clone(), |style, named| {
                style.merged_over(&named.paragraph_style)
            })
    }

    /// Text style inherited from a named style type and `NORMAL_TEXT`.
    pub fn named_text_style(&self, style_type: Option<&str>) -> TextStyle {
        self.chain(style_type)
            .fold(TextStyle::default(), |style, named| {
                style.merged_over(&named.text_style)
            })
    }

    /// Whether the bottom border of the paragraph before `next` should be
    /// dropped because `next` declares a top border.
    ///
    /// The current paragraph's border may be explicit or inherited from a
    /// named style; only the next sibling's explicit top border decides.
    pub fn collapses_bottom_border(next: Option<&Paragraph>) -> bool {
        next.is_some_and(|n| n.paragraph_style.border_top.is_some())
    }
}

/// CSS for a text style.
pub fn text_css(style: &TextStyle) -> Css {
    let mut out = Css::new();

    match style.italic {
        Some(true) => out.push("font-style", "italic"),
        Some(false) => out.push("font-style", "normal"),
        None => {}
    }

    let mut decorations = Vec::new();
    if style.underline == Some(true) {
        decorations.push("underline");
    }
    if style.strikethrough == Some(true) {
        decorations.push("line-through");
    }
    if !decorations.is_empty() {
        out.push("text-decoration", decorations.join(" "));
    } else if style.underline == Some(false) || style.strikethrough == Some(false) {
        out.push("text-decoration", "none");
    }

    if style.small_caps == Some(true) {
        out.push("font-variant", "small-caps");
    }
    out.push_opt(
        "background-color",
        style.background_color.as_ref().and_then(css::color),
    );
    out.push_opt("color", style.foreground_color.as_ref().and_then(css::color));

    if let Some(family) = &style.weighted_font_family {
        out.push_opt(
            "font-family",
            family.font_family.as_deref().map(css::font_family),
        );
    }
    out.push_opt("font-size", css::dimension_opt(style.font_size.as_ref()));

    let weight = style
        .weighted_font_family
        .as_ref()
        .and_then(|f| f.weight)
        .map(|w| w.to_string());
    match style.bold {
        Some(true) => out.push("font-weight", "bold"),
        Some(false) => out.push("font-weight", "normal"),
        None => out.push_opt("font-weight", weight),
    }

    match style.baseline_offset.as_deref() {
        Some("SUPERSCRIPT") => out.push("vertical-align", "super"),
        Some("SUBSCRIPT") => out.push("vertical-align", "sub"),
        _ => {}
    }

    out
}

/// CSS for a resolved paragraph style.
///
/// `collapse_bottom` drops the bottom border (see
/// [`StyleResolver::collapses_bottom_border`]).
pub fn paragraph_css(style: &ParagraphStyle, collapse_bottom: bool) -> Css {
    let mut out = Css::new();

    out.push_opt("margin-top", css::dimension_opt(style.space_above.as_ref()));
    out.push_opt(
        "margin-bottom",
        css::dimension_opt(style.space_below.as_ref()),
    );

    let borders: [(&str, Option<&Border>); 4] = [
        ("top", style.border_top.as_ref()),
        ("right", style.border_right.as_ref()),
        ("bottom", style.border_bottom.as_ref().filter(|_| !collapse_bottom)),
        ("left", style.border_left.as_ref()),
    ];
    for (side, border) in borders {
        if let Some(border) = border.filter(|b| css::is_visible(b)) {
            out.push(format!("border-{}", side), css::border(border));
            out.push_opt(
                format!("padding-{}", side),
                css::dimension_opt(border.padding.as_ref()),
            );
        }
    }

    out.push_opt(
        "text-align",
        style
            .alignment
            .as_deref()
            .and_then(css::text_align)
            .map(String::from),
    );
    out.push_opt(
        "line-height",
        style.line_spacing.map(|pct| format!("{}", pct / 100.0)),
    );
    out.push_opt(
        "margin-left",
        css::dimension_opt(style.indent_start.as_ref()),
    );
    out.push_opt("margin-right", css::dimension_opt(style.indent_end.as_ref()));
    out.push_opt("text-indent", text_indent(style));
    out.push_opt(
        "background-color",
        style.shading.as_ref().and_then(css::color),
    );
    if style.direction.as_deref() == Some("RIGHT_TO_LEFT") {
        out.push("direction", "rtl");
    }
    if style.page_break_before == Some(true) {
        out.push("break-before", "page");
    }

    out
}

/// First line indent relative to the start indent.
fn text_indent(style: &ParagraphStyle) -> Option<String> {
    let first = style.indent_first_line.as_ref()?;
    let first_mag = first.magnitude?;
    let start_mag = style
        .indent_start
        .as_ref()
        .filter(|s| s.unit == first.unit)
        .and_then(|s| s.magnitude)
        .unwrap_or(0.0);
    let delta = first_mag - start_mag;
    if delta == 0.0 {
        return None;
    }
    Some(css::dimension(&crate::model::Dimension {
        magnitude: Some(delta),
        unit: first.unit.clone(),
    }))
}

/// CSS for a section container; always starts with `column-count`.
pub fn section_css(style: &SectionStyle) -> Css {
    let mut out = Css::new();
    out.push("column-count", style.column_count().to_string());

    out.push_opt(
        "column-gap",
        style
            .column_properties
            .first()
            .and_then(|c| css::dimension_opt(c.padding_end.as_ref())),
    );
    if style.has_column_separator() {
        out.push("column-rule", "1px solid currentColor");
    }
    for (side, dim) in style.margins.sides() {
        out.push_opt(format!("padding-{}", side), css::dimension_opt(dim));
    }
    if style.content_direction.as_deref() == Some("RIGHT_TO_LEFT") {
        out.push("direction", "rtl");
    }

    out
}

/// CSS for a table cell. Sides without a border get the default hairline.
pub fn cell_css(style: &TableCellStyle) -> Css {
    let mut out = Css::new();

    out.push_opt(
        "background-color",
        style.background_color.as_ref().and_then(css::color),
    );
    for (side, border) in style.borders() {
        let value = match border {
            Some(border) => css::border(border),
            None => css::DEFAULT_CELL_BORDER.to_string(),
        };
        out.push(format!("border-{}", side), value);
    }
    for (side, dim) in style.paddings.sides() {
        out.push_opt(format!("padding-{}", side), css::dimension_opt(dim));
    }
    out.push_opt(
        "vertical-align",
        style
            .content_alignment
            .as_deref()
            .and_then(css::vertical_align)
            .map(String::from),
    );

    out
}

/// CSS for a table row.
pub fn row_css(style: &TableRowStyle) -> Css {
    let mut out = Css::new();
    out.push_opt("height", css::dimension_opt(style.min_row_height.as_ref()));
    out
}

/// CSS for an embedded object's box.
pub fn object_css(object: &EmbeddedObject) -> Css {
    let mut out = Css::new();

    if let Some(border) = object.border.as_ref().filter(|b| css::is_visible(b)) {
        out.push("border", css::border(border));
    }
    for (side, dim) in object.margins.sides() {
        out.push_opt(format!("margin-{}", side), css::dimension_opt(dim));
    }
    if let Some(size) = &object.size {
        out.push_opt("width", css::dimension_opt(size.width.as_ref()));
        out.push_opt("height", css::dimension_opt(size.height.as_ref()));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Dimension, Link, WeightedFontFamily};
    use serde_json::json;

    fn styled_doc() -> Document {
        Document::from_value(&json!({
            "body": {"content": []},
            "namedStyles": {"styles": [
                {
                    "namedStyleType": "NORMAL_TEXT",
                    "textStyle": {
                        "fontSize": {"magnitude": 11, "unit": "PT"},
                        "weightedFontFamily": {"fontFamily": "Arial", "weight": 400},
                    },
                    "paragraphStyle": {"alignment": "START", "lineSpacing": 115},
                },
                {
                    "namedStyleType": "HEADING_1",
                    "textStyle": {"fontSize": {"magnitude": 20, "unit": "PT"}},
                    "paragraphStyle": {"spaceAbove": {"magnitude": 20, "unit": "PT"}},
                },
            ]},
        }))
        .unwrap()
    }

    #[test]
    fn test_named_style_inheritance() {
        let doc = styled_doc();
        let resolver = StyleResolver::new(&doc);

        let text = resolver.named_text_style(Some("HEADING_1"));
        assert_eq!(text.font_size, Some(Dimension::points(20.0)));
        assert_eq!(
            text.weighted_font_family
                .as_ref()
                .and_then(|f| f.font_family.as_deref()),
            Some("Arial")
        );

        let mut para = Paragraph::with_text("Title\n");
        para.paragraph_style.named_style_type = Some("HEADING_1".to_string());
        para.paragraph_style.alignment = Some("CENTER".to_string());

        let style = resolver.paragraph_style(&para);
        assert_eq!(style.alignment.as_deref(), Some("CENTER"));
        assert_eq!(style.space_above, Some(Dimension::points(20.0)));
        assert_eq!(style.line_spacing, Some(115.0));
    }

    #[test]
    fn test_missing_named_style_falls_back_to_normal() {
        let doc = styled_doc();
        let resolver = StyleResolver::new(&doc);

        let text = resolver.named_text_style(Some("HEADING_6"));
        assert_eq!(text.font_size, Some(Dimension::points(11.0)));
        assert_eq!(resolver.named_text_style(None), text);
    }

    #[test]
    fn test_text_css() {
        let style = TextStyle {
            bold: Some(true),
            italic: Some(true),
            underline: Some(true),
            strikethrough: Some(true),
            foreground_color: Some(Color::rgb(1.0, 0.0, 0.0)),
            weighted_font_family: Some(WeightedFontFamily {
                font_family: Some("Roboto Mono".to_string()),
                weight: Some(400),
            }),
            baseline_offset: Some("SUPERSCRIPT".to_string()),
            link: Some(Link::url("https://example.com")),
            ..Default::default()
        };

        assert_eq!(
            text_css(&style).to_string(),
            "font-style: italic; text-decoration: underline line-through; color: #FF0000; \
             font-family: 'Roboto Mono'; font-weight: bold; vertical-align: super;"
        );
        assert!(text_css(&TextStyle::default()).is_empty());
    }

    #[test]
    fn test_paragraph_border_collapse() {
        let border = Border::solid(1.0, Color::rgb(0.0, 0.0, 0.0));
        let style = ParagraphStyle {
            border_top: Some(border.clone()),
            border_bottom: Some(border),
            ..Default::default()
        };

        let full = paragraph_css(&style, false);
        assert!(full.contains("border-top"));
        assert!(full.contains("border-bottom"));

        let collapsed = paragraph_css(&style, true);
        assert!(collapsed.contains("border-top"));
        assert!(!collapsed.contains("border-bottom"));

        let mut first = Paragraph::new();
        first.paragraph_style = style.clone();
        let mut second = Paragraph::new();
        second.paragraph_style.border_top = style.border_top.clone();
        let plain = Paragraph::new();
        assert!(StyleResolver::collapses_bottom_border(Some(&second)));
        assert!(StyleResolver::collapses_bottom_border(Some(&first)));
        assert!(!StyleResolver::collapses_bottom_border(None));
        assert!(!StyleResolver::collapses_bottom_border(Some(&plain)));
    }

    #[test]
    fn test_zero_width_paragraph_border_skipped() {
        let style = ParagraphStyle {
            border_left: Some(Border {
                width: Some(Dimension::points(0.0)),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(paragraph_css(&style, false).is_empty());
    }

    #[test]
    fn test_cell_default_borders() {
        let style = TableCellStyle {
            border_left: Some(Border::solid(2.0, Color::rgb(0.0, 0.0, 1.0))),
            ..Default::default()
        };
        let out = cell_css(&style);
        assert_eq!(out.get("border-top"), Some("1pt solid currentColor"));
        assert_eq!(out.get("border-right"), Some("1pt solid currentColor"));
        assert_eq!(out.get("border-bottom"), Some("1pt solid currentColor"));
        assert_eq!(out.get("border-left"), Some("2PT solid #0000FF"));
    }

    #[test]
    fn test_section_css() {
        let style = SectionStyle::default();
        assert_eq!(section_css(&style).to_string(), "column-count: 1;");
    }

    #[test]
    fn test_text_indent_relative_to_start() {
        let style = ParagraphStyle {
            indent_first_line: Some(Dimension::points(54.0)),
            indent_start: Some(Dimension::points(36.0)),
            ..Default::default()
        };
        let out = paragraph_css(&style, false);
        assert_eq!(out.get("margin-left"), Some("36PT"));
        assert_eq!(out.get("text-indent"), Some("18PT"));
    }
}
