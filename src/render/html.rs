//! HTML rendering for parsed documents.

use std::borrow::Cow;

use crate::error::Result;
use crate::model::{
    Content, Document, Glyph, InlineElement, InlineOrPositionedObject, List, Paragraph,
    ParagraphElement, Person, RichLink, SectionStyle, StructuralElement, Table, TableOfContents,
    TextRun, TextStyle,
};
use crate::style::{self, css, StyleResolver};

use super::images::{ImageResolver, ImageSink};
use super::lists::{ListMarker, ListStack, ListTag};
use super::{RenderOptions, RenderResult, RenderStats, UnsupportedConstruct};

/// Convert a document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to HTML with statistics and warnings.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = HtmlRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// HTML renderer.
///
/// Rendering is a single depth-first walk; the renderer holds no state
/// between documents.
pub struct HtmlRenderer<'s> {
    options: RenderOptions,
    sink: Option<&'s dyn ImageSink>,
    stats: RenderStats,
    warnings: Vec<UnsupportedConstruct>,
}

/// A run of body elements sharing one section style.
struct Section<'d> {
    style: Option<&'d SectionStyle>,
    elements: &'d [StructuralElement],
}

impl<'s> HtmlRenderer<'s> {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            sink: None,
            stats: RenderStats::new(),
            warnings: Vec::new(),
        }
    }

    /// Store images through a sink instead of linking the remote URIs.
    pub fn with_image_sink(mut self, sink: &'s dyn ImageSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Render a document to HTML.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render a document to HTML with statistics and warnings.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        let content = self.render_internal(doc)?;
        Ok(RenderResult::new(content, self.stats, self.warnings))
    }

    fn render_internal(&mut self, doc: &Document) -> Result<String> {
        let mut out = String::new();
        out.push_str("<div class=\"document\">");

        if self.options.include_title {
            if let Some(title) = &doc.title {
                out.push_str("<h1 class=\"doc-title\">");
                out.push_str(&escape_html(title));
                out.push_str("</h1>");
            }
        }

        if self.options.include_headers_footers {
            if let Some(header) = doc.default_header() {
                out.push_str("<div class=\"header\">");
                self.render_elements(&mut out, doc, &header.content);
                out.push_str("</div>");
            }
        }

        let sections = split_sections(&doc.body);
        log::debug!("Rendering {} section(s)", sections.len());
        for section in sections {
            self.render_section(&mut out, doc, &section);
        }

        if self.options.include_headers_footers {
            if let Some(footer) = doc.default_footer() {
                out.push_str("<div class=\"footer\">");
                self.render_elements(&mut out, doc, &footer.content);
                out.push_str("</div>");
            }
        }

        out.push_str("</div>");
        Ok(out)
    }

    fn render_section(&mut self, out: &mut String, doc: &Document, section: &Section<'_>) {
        if self.options.collect_stats {
            self.stats.add_section();
        }

        let default_style = SectionStyle::default();
        let css = style::section_css(section.style.unwrap_or(&default_style));
        out.push_str("<div class=\"section\"");
        out.push_str(&css.attr());
        out.push('>');
        self.render_elements(out, doc, section.elements);
        out.push_str("</div>");
    }

    /// Render sibling structural elements, threading the list stack.
    fn render_elements(&mut self, out: &mut String, doc: &Document, elements: &[StructuralElement]) {
        let mut lists = ListStack::new();

        for (i, element) in elements.iter().enumerate() {
            match &element.content {
                Content::Paragraph(para) => {
                    let next = elements.get(i + 1).and_then(StructuralElement::as_paragraph);
                    let collapse = StyleResolver::collapses_bottom_border(next);
                    match &para.bullet {
                        Some(bullet) => {
                            let list = doc.list(&bullet.list_id);
                            let tag = list_tag(list, bullet.nesting_level);
                            let step = lists.step(&bullet.list_id, bullet.nesting_level, tag);
                            self.close_markers(out, &step.closed);
                            match &step.opened {
                                Some(marker) => self.open_marker(out, list, marker),
                                None => out.push_str("</li>"),
                            }
                            out.push_str("<li>");
                            if self.options.collect_stats {
                                self.stats.add_list_item();
                            }
                            self.render_paragraph(out, doc, para, collapse);
                        }
                        None => {
                            self.close_markers(out, &lists.close_all());
                            self.render_paragraph(out, doc, para, collapse);
                        }
                    }
                }
                Content::Table(table) => {
                    self.close_markers(out, &lists.close_all());
                    self.render_table(out, doc, table);
                }
                Content::TableOfContents(toc) => {
                    self.close_markers(out, &lists.close_all());
                    self.render_toc(out, doc, toc);
                }
                Content::SectionBreak(_) => {
                    self.close_markers(out, &lists.close_all());
                    log::debug!("Skipping nested section break at {}", element.start_index);
                }
            }
        }

        self.close_markers(out, &lists.close_all());
    }

    fn open_marker(&mut self, out: &mut String, list: Option<&List>, marker: &ListMarker) {
        if self.options.collect_stats {
            self.stats.add_list();
        }

        let mut css = css::Css::new();
        let mut start = None;
        if let Some(level) = list.and_then(|l| l.level(marker.level)) {
            if let Glyph::Ordered(kind) = &level.glyph {
                css.push("list-style-type", css::list_style_type(kind));
                start = level.start_number.filter(|n| *n != 1);
            }
        }

        out.push('<');
        out.push_str(marker.tag.name());
        if let Some(start) = start {
            out.push_str(&format!(" start=\"{}\"", start));
        }
        out.push_str(&css.attr());
        out.push('>');
    }

    fn close_markers(&self, out: &mut String, closed: &[ListMarker]) {
        for marker in closed {
            out.push_str("</li></");
            out.push_str(marker.tag.name());
            out.push('>');
        }
    }

    fn render_paragraph(&mut self, out: &mut String, doc: &Document, para: &Paragraph, collapse: bool) {
        let resolver = StyleResolver::new(doc);
        let named_type = para.named_style_type();
        let tag = css::tag_for(named_type);

        if self.options.collect_stats {
            self.stats.add_paragraph();
            if tag != "p" {
                self.stats.add_heading();
            }
            self.stats.count_text(&para.plain_text());
        }

        let mut wrapper = style::paragraph_css(&resolver.paragraph_style(para), collapse);
        wrapper.extend(style::text_css(&resolver.named_text_style(named_type)));
        let hoisted = hoisted_style(para);
        if let Some(shared) = hoisted {
            wrapper.extend(style::text_css(&shared.without_link()));
        }

        // `<hr>` cannot sit inside `<p>`/`<hN>`: rules split the wrapper.
        let attr = wrapper.attr();
        let mut heading_id = para.paragraph_style.heading_id.as_deref();
        let mut body = String::new();
        let mut has_rule = false;

        let last = para.elements.len().saturating_sub(1);
        for (i, element) in para.elements.iter().enumerate() {
            match rule_css(doc, element) {
                Some(rule) => {
                    if !body.is_empty() {
                        push_wrapped(out, tag, heading_id.take(), &attr, &body);
                        body.clear();
                    }
                    self.push_rule(out, &rule);
                    has_rule = true;
                }
                None => self.render_inline(&mut body, doc, element, hoisted.is_some(), i == last),
            }
        }
        if !body.is_empty() || !has_rule {
            push_wrapped(out, tag, heading_id, &attr, &body);
        }

        for object_id in &para.positioned_object_ids {
            match doc.positioned_object(object_id) {
                Some(object) => self.render_positioned(out, doc, object_id, object),
                None => log::warn!("Positioned object {} not found", object_id),
            }
        }
    }

    fn render_inline(
        &mut self,
        out: &mut String,
        doc: &Document,
        element: &ParagraphElement,
        hoisted: bool,
        last: bool,
    ) {
        match &element.kind {
            InlineElement::TextRun(run) => render_text_run(out, run, hoisted, last),
            InlineElement::InlineObject(obj) => match doc.inline_object(&obj.inline_object_id) {
                Some(object) => self.render_object(out, doc, &obj.inline_object_id, object),
                None => log::warn!("Inline object {} not found", obj.inline_object_id),
            },
            InlineElement::PageBreak(_) => out.push_str("<br style=\"break-after: page;\">"),
            InlineElement::HorizontalRule(_) => self.push_rule(out, &css::Css::new()),
            InlineElement::Person(person) => render_person(out, person),
            InlineElement::RichLink(link) => render_rich_link(out, link),
            InlineElement::ColumnBreak(_)
            | InlineElement::FootnoteReference(_)
            | InlineElement::Equation
            | InlineElement::AutoText(_)
            | InlineElement::Unsupported { .. } => self.unsupported(element),
        }
    }

    fn push_rule(&mut self, out: &mut String, css: &css::Css) {
        if self.options.collect_stats {
            self.stats.add_horizontal_rule();
        }
        out.push_str("<hr");
        out.push_str(&css.attr());
        out.push('>');
    }

    fn unsupported(&mut self, element: &ParagraphElement) {
        let warning = UnsupportedConstruct::new(element.kind.kind_name(), element.start_index);
        log::warn!("Skipping {}", warning);
        self.warnings.push(warning);
    }

    /// Render an embedded object: `<hr>` for drawn rules, `<img>` for images.
    fn render_object(
        &mut self,
        out: &mut String,
        doc: &Document,
        object_id: &str,
        object: &InlineOrPositionedObject,
    ) {
        let Some(embedded) = object.embedded() else {
            log::debug!("Object {} has no embedded content", object_id);
            return;
        };
        let css = style::object_css(embedded);

        if embedded.is_horizontal_line() {
            self.push_rule(out, &css);
            return;
        }

        let Some(image) = &embedded.image_properties else {
            log::debug!("Object {} is not image-backed", object_id);
            return;
        };
        let resolver = ImageResolver::new(
            self.sink,
            self.options.image_dir.as_deref(),
            &self.options.image_path_prefix,
        );
        let Some(src) = resolver.resolve(doc.document_id.as_deref(), object_id, image) else {
            log::warn!("Image {} has no URI", object_id);
            return;
        };

        if self.options.collect_stats {
            self.stats.add_image();
        }
        out.push_str(&format!("<img src=\"{}\"", escape_attr(&src)));
        let alt = embedded
            .description
            .as_deref()
            .or(embedded.title.as_deref())
            .unwrap_or("");
        out.push_str(&format!(" alt=\"{}\"", escape_attr(alt)));
        out.push_str(&css.attr());
        out.push('>');
    }

    fn render_positioned(
        &mut self,
        out: &mut String,
        doc: &Document,
        object_id: &str,
        object: &InlineOrPositionedObject,
    ) {
        let mut wrapper = css::Css::new();
        wrapper.push("position", "relative");
        if let Some(offset) = &object.properties.offset {
            wrapper.push_opt("left", css::dimension_opt(offset.left.as_ref()));
            wrapper.push_opt("top", css::dimension_opt(offset.top.as_ref()));
        }

        out.push_str("<div class=\"positioned\"");
        out.push_str(&wrapper.attr());
        out.push('>');
        self.render_object(out, doc, object_id, object);
        out.push_str("</div>");
    }

    fn render_table(&mut self, out: &mut String, doc: &Document, table: &Table) {
        if self.options.collect_stats {
            self.stats.add_table();
        }
        let columns = table.column_count();
        log::debug!("Rendering table {}x{}", table.table_rows.len(), columns);

        out.push_str("<table style=\"border-collapse: collapse;\">");

        if !table.column_properties.is_empty() {
            out.push_str("<colgroup>");
            for i in 0..columns {
                let width = table.column_properties.get(i).and_then(|props| {
                    if props.is_evenly_distributed() {
                        Some(format!("{}%", 100 / columns))
                    } else {
                        css::dimension_opt(props.width.as_ref())
                    }
                });
                match width {
                    Some(width) => out.push_str(&format!("<col style=\"width: {};\">", width)),
                    None => out.push_str("<col>"),
                }
            }
            out.push_str("</colgroup>");
        }

        out.push_str("<tbody>");
        for row in &table.table_rows {
            out.push_str("<tr");
            out.push_str(&style::row_css(&row.style).attr());
            out.push('>');

            let cell_tag = if row.is_header() { "th" } else { "td" };
            for cell in &row.cells {
                out.push('<');
                out.push_str(cell_tag);
                if let Some(span) = cell.style.row_span.filter(|s| *s > 1) {
                    out.push_str(&format!(" rowspan=\"{}\"", span));
                }
                if let Some(span) = cell.style.column_span.filter(|s| *s > 1) {
                    out.push_str(&format!(" colspan=\"{}\"", span));
                }
                out.push_str(&style::cell_css(&cell.style).attr());
                out.push('>');
                self.render_elements(out, doc, &cell.content);
                out.push_str("</");
                out.push_str(cell_tag);
                out.push('>');
            }
            out.push_str("</tr>");
        }
        out.push_str("</tbody></table>");
    }

    fn render_toc(&mut self, out: &mut String, doc: &Document, toc: &TableOfContents) {
        out.push_str("<nav class=\"table-of-contents\">");
        self.render_elements(out, doc, &toc.content);
        out.push_str("</nav>");
    }
}

/// Group body elements into sections at each section break.
///
/// Elements before the first break form a section with the default style.
/// Sections without elements are dropped.
fn split_sections(body: &[StructuralElement]) -> Vec<Section<'_>> {
    let mut sections = Vec::new();
    let mut style = None;
    let mut start = 0;

    for (i, element) in body.iter().enumerate() {
        if let Content::SectionBreak(section_break) = &element.content {
            if i > start {
                sections.push(Section {
                    style,
                    elements: &body[start..i],
                });
            }
            style = Some(&section_break.section_style);
            start = i + 1;
        }
    }
    if body.len() > start {
        sections.push(Section {
            style,
            elements: &body[start..],
        });
    }

    sections
}

/// CSS for `element` when it draws a horizontal rule: a rule element or an
/// inline object titled `horizontal line`.
fn rule_css(doc: &Document, element: &ParagraphElement) -> Option<css::Css> {
    match &element.kind {
        InlineElement::HorizontalRule(_) => Some(css::Css::new()),
        InlineElement::InlineObject(obj) => doc
            .inline_object(&obj.inline_object_id)
            .and_then(InlineOrPositionedObject::embedded)
            .filter(|embedded| embedded.is_horizontal_line())
            .map(style::object_css),
        _ => None,
    }
}

fn push_wrapped(out: &mut String, tag: &str, id: Option<&str>, attr: &str, body: &str) {
    out.push('<');
    out.push_str(tag);
    if let Some(id) = id {
        out.push_str(&format!(" id=\"{}\"", escape_attr(id)));
    }
    out.push_str(attr);
    out.push('>');
    out.push_str(body);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Tag for a list level: ordered glyph types open `<ol>`, everything else `<ul>`.
fn list_tag(list: Option<&List>, level: u32) -> ListTag {
    match list.and_then(|l| l.level(level)) {
        Some(nesting) if nesting.glyph.is_ordered() => ListTag::Ordered,
        _ => ListTag::Unordered,
    }
}

/// The text style shared by every text run of a paragraph, if there are at
/// least two runs and they are all identical and non-empty.
fn hoisted_style(para: &Paragraph) -> Option<&TextStyle> {
    let mut runs = para.text_runs();
    let first = runs.next()?;
    if first.text_style.is_empty() {
        return None;
    }

    let mut count = 1;
    for run in runs {
        if run.text_style != first.text_style {
            return None;
        }
        count += 1;
    }

    (count >= 2).then_some(&first.text_style)
}

fn render_text_run(out: &mut String, run: &TextRun, hoisted: bool, last: bool) {
    let text = if last {
        run.content.strip_suffix('\n').unwrap_or(&run.content)
    } else {
        run.content.as_str()
    };
    if text.is_empty() {
        return;
    }
    let body = text_html(text);

    let css = if hoisted {
        css::Css::new()
    } else {
        style::text_css(&run.text_style.without_link())
    };
    let inner = if css.is_empty() {
        body
    } else {
        format!("<span{}>{}</span>", css.attr(), body)
    };

    match run.text_style.link.as_ref().and_then(|l| l.href()) {
        Some(href) => {
            out.push_str(&format!("<a href=\"{}\">{}</a>", escape_attr(&href), inner));
        }
        None => out.push_str(&inner),
    }
}

fn render_person(out: &mut String, person: &Person) {
    let label = person
        .name
        .as_deref()
        .or(person.email.as_deref())
        .unwrap_or("");
    match &person.email {
        Some(email) => out.push_str(&format!(
            "<a href=\"mailto:{}\">{}</a>",
            escape_attr(email),
            escape_html(label)
        )),
        None => out.push_str(&escape_html(label)),
    }
}

fn render_rich_link(out: &mut String, link: &RichLink) {
    let label = link.title.as_deref().or(link.uri.as_deref()).unwrap_or("");
    match &link.uri {
        Some(uri) => out.push_str(&format!(
            "<a href=\"{}\">{}</a>",
            escape_attr(uri),
            escape_html(label)
        )),
        None => out.push_str(&escape_html(label)),
    }
}

/// Escape text content, including both quote characters.
pub fn escape_html(s: &str) -> String {
    html_escape::encode_quoted_attribute(s).into_owned()
}

/// Escape a value placed inside a double-quoted attribute.
fn escape_attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Escape run text and turn line separators into `<br>`.
fn text_html(text: &str) -> String {
    escape_html(text).replace(['\u{b}', '\n'], "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, NestingLevel};
    use serde_json::json;

    fn doc(body: serde_json::Value) -> Document {
        Document::from_value(&json!({"body": {"content": body}})).unwrap()
    }

    fn para(text: &str) -> serde_json::Value {
        json!({"paragraph": {"elements": [{"textRun": {"content": text}}]}})
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
        assert_eq!(escape_attr("a\"b&c"), "a&quot;b&amp;c");
        assert_eq!(text_html("a\u{b}b\nc"), "a<br>b<br>c");
    }

    #[test]
    fn test_hello_paragraph() {
        let html = to_html(&doc(json!([para("Hello\n")])), &RenderOptions::default()).unwrap();
        assert_eq!(
            html,
            "<div class=\"document\"><div class=\"section\" style=\"column-count: 1;\">\
             <p>Hello</p></div></div>"
        );
    }

    #[test]
    fn test_sections_split_and_empty_dropped() {
        let d = doc(json!([
            {"sectionBreak": {"sectionStyle": {}}},
            para("One\n"),
            {"sectionBreak": {"sectionStyle": {"columnProperties": [{}, {}]}}},
            {"sectionBreak": {"sectionStyle": {}}},
        ]));
        let sections = split_sections(&d.body);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].elements.len(), 1);

        let d = doc(json!([
            para("Zero\n"),
            {"sectionBreak": {"sectionStyle": {"columnProperties": [{}, {}]}}},
            para("Two\n"),
        ]));
        let sections = split_sections(&d.body);
        assert_eq!(sections.len(), 2);
        assert!(sections[0].style.is_none());
        assert_eq!(sections[1].style.map(SectionStyle::column_count), Some(2));
    }

    #[test]
    fn test_hoisting_requires_identical_runs() {
        let highlight = TextStyle {
            background_color: Some(Color::rgb(1.0, 1.0, 0.0)),
            ..Default::default()
        };
        let mut p = Paragraph::new();
        p.add_run(TextRun::styled("a", highlight.clone()));
        p.add_run(TextRun::styled("b\n", highlight.clone()));
        assert_eq!(hoisted_style(&p), Some(&highlight));

        let mut single = Paragraph::new();
        single.add_run(TextRun::styled("a\n", highlight.clone()));
        assert_eq!(hoisted_style(&single), None);

        let mut mixed = Paragraph::new();
        mixed.add_run(TextRun::styled("a", highlight));
        mixed.add_run(TextRun::new("b\n"));
        assert_eq!(hoisted_style(&mixed), None);

        let mut plain = Paragraph::new();
        plain.add_run(TextRun::new("a"));
        plain.add_run(TextRun::new("b\n"));
        assert_eq!(hoisted_style(&plain), None);
    }

    #[test]
    fn test_list_tag_from_definition() {
        let list = List::new(vec![NestingLevel::ordered("DECIMAL"), NestingLevel::symbol("●")]);
        assert_eq!(list_tag(Some(&list), 0), ListTag::Ordered);
        assert_eq!(list_tag(Some(&list), 1), ListTag::Unordered);
        assert_eq!(list_tag(Some(&list), 5), ListTag::Unordered);
        assert_eq!(list_tag(None, 0), ListTag::Unordered);
    }

    #[test]
    fn test_unsupported_elements_recorded() {
        let d = doc(json!([{"paragraph": {"elements": [
            {"startIndex": 1, "textRun": {"content": "See"}},
            {"startIndex": 4, "footnoteReference": {"footnoteId": "kix.fn"}},
            {"startIndex": 5, "equation": {}},
            {"startIndex": 6, "textRun": {"content": "\n"}},
        ]}}]));

        let result = to_html_with_stats(&d, &RenderOptions::default()).unwrap();
        assert!(result.content.contains("<p>See</p>"));
        let kinds: Vec<&str> = result.warnings.iter().map(|w| w.kind.as_str()).collect();
        assert_eq!(kinds, vec!["footnote reference", "equation"]);
        assert_eq!(result.warnings[0].start_index, Some(4));
    }

    #[test]
    fn test_rule_object_closes_wrapper() {
        let d = Document::from_value(&json!({
            "body": {"content": [{"paragraph": {"elements": [
                {"textRun": {"content": "Text"}},
                {"inlineObjectElement": {"inlineObjectId": "kix.hr"}},
                {"textRun": {"content": "\n"}},
            ]}}]},
            "inlineObjects": {"kix.hr": {
                "objectId": "kix.hr",
                "inlineObjectProperties": {"embeddedObject": {
                    "title": "horizontal line",
                    "size": {"width": {"magnitude": 468, "unit": "PT"}},
                }},
            }},
        }))
        .unwrap();

        let result = to_html_with_stats(&d, &RenderOptions::default()).unwrap();
        assert!(result
            .content
            .contains("<p>Text</p><hr style=\"width: 468PT;\"></div>"));
        assert_eq!(result.stats.horizontal_rule_count, 1);
        assert_eq!(result.stats.paragraph_count, 1);
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let d = doc(json!([para("a\n"), para("b\n")]));
        let options = RenderOptions::default();
        assert_eq!(to_html(&d, &options).unwrap(), to_html(&d, &options).unwrap());
    }
}
