//! Tests for building the typed model from export JSON.

use gdoc_html::model::{Content, Glyph, InlineElement};
use gdoc_html::{Document, Error};
use serde_json::json;

fn parse(value: serde_json::Value) -> gdoc_html::Result<Document> {
    gdoc_html::parse_value(&value)
}

#[test]
fn test_alternate_path_used_when_primary_missing() {
    let doc = parse(json!({"document_id": "legacy", "body": {"content": []}})).unwrap();
    assert_eq!(doc.document_id.as_deref(), Some("legacy"));
}

#[test]
fn test_primary_path_wins_over_alternate() {
    let doc = parse(json!({
        "documentId": "primary",
        "document_id": "legacy",
        "body": {"content": []},
    }))
    .unwrap();
    assert_eq!(doc.document_id.as_deref(), Some("primary"));
}

#[test]
fn test_null_is_absent() {
    let doc = parse(json!({"title": null, "body": {"content": []}})).unwrap();
    assert!(doc.title.is_none());
}

#[test]
fn test_missing_body_reports_paths() {
    let err = parse(json!({"title": "No body"})).unwrap_err();
    match &err {
        Error::Mapping {
            type_name,
            field,
            paths,
        } => {
            assert_eq!(*type_name, "Document");
            assert_eq!(*field, "body");
            assert_eq!(paths, &vec!["body.content"]);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "Document.body: no value found at any of [body.content]"
    );
}

#[test]
fn test_wrong_shape_is_a_coercion_error() {
    let err = parse(json!({"title": [1, 2], "body": {"content": []}})).unwrap_err();
    assert!(matches!(
        err,
        Error::Coercion {
            type_name: "Document",
            expected: "string",
            found: "array",
            ..
        }
    ));
}

#[test]
fn test_element_without_content_is_rejected() {
    let err = parse(json!({"body": {"content": [{"startIndex": 1, "endIndex": 2}]}})).unwrap_err();
    assert!(err.is_structural());
}

#[test]
fn test_typed_tree() {
    let doc = parse(json!({
        "documentId": "doc1",
        "title": "Report",
        "body": {"content": [
            {"endIndex": 1, "sectionBreak": {"sectionStyle": {"sectionType": "CONTINUOUS"}}},
            {"startIndex": 1, "endIndex": 7, "paragraph": {
                "paragraphStyle": {"namedStyleType": "TITLE"},
                "elements": [{"startIndex": 1, "endIndex": 7, "textRun": {"content": "Title\n"}}],
            }},
            {"startIndex": 7, "table": {
                "rows": 1,
                "columns": 2,
                "tableRows": [{"tableCells": [
                    {"content": [{"paragraph": {"elements": [{"textRun": {"content": "A\n"}}]}}]},
                    {"content": [{"paragraph": {"elements": [{"textRun": {"content": "B\n"}}]}}]},
                ]}],
            }},
            {"tableOfContents": {"content": [
                {"paragraph": {"elements": [{"textRun": {"content": "Entry\n"}}]}},
            ]}},
        ]},
    }))
    .unwrap();

    assert_eq!(doc.body.len(), 4);
    assert!(doc.body[0].is_section_break());
    assert_eq!(doc.body[1].start_index, 1);

    let title = doc.body[1].as_paragraph().unwrap();
    assert_eq!(title.named_style_type(), Some("TITLE"));
    assert!(matches!(
        &title.elements[0].kind,
        InlineElement::TextRun(run) if run.content == "Title\n"
    ));

    match &doc.body[2].content {
        Content::Table(table) => {
            assert_eq!(table.column_count(), 2);
            assert_eq!(table.table_rows[0].cells.len(), 2);
        }
        other => panic!("expected table, got {}", other.kind_name()),
    }

    assert_eq!(doc.paragraphs().len(), 4);
    assert_eq!(doc.plain_text(), "Title\nA\nB\nEntry");
}

#[test]
fn test_lists_and_glyphs() {
    let doc = parse(json!({
        "body": {"content": []},
        "lists": {"kix.a": {"listProperties": {"nestingLevels": [
            {"glyphType": "DECIMAL", "startNumber": 1},
            {"glyphType": "GLYPH_TYPE_UNSPECIFIED", "glyphSymbol": "◦"},
            {"glyphType": "NONE"},
        ]}}},
    }))
    .unwrap();

    let list = doc.list("kix.a").unwrap();
    assert_eq!(list.nesting_levels.len(), 3);
    assert_eq!(list.level(0).unwrap().glyph, Glyph::Ordered("DECIMAL".to_string()));
    assert_eq!(list.level(1).unwrap().glyph, Glyph::Symbol("◦".to_string()));
    assert_eq!(list.level(2).unwrap().glyph, Glyph::None);
    assert!(list.level(3).is_none());
    assert!(doc.list("kix.b").is_none());
}

#[test]
fn test_named_styles_lookup() {
    let doc = parse(json!({
        "body": {"content": []},
        "namedStyles": {"styles": [
            {"namedStyleType": "NORMAL_TEXT", "textStyle": {"fontSize": {"magnitude": 11, "unit": "PT"}}},
            {"namedStyleType": "HEADING_1", "textStyle": {"bold": true}},
        ]},
    }))
    .unwrap();

    assert_eq!(doc.named_styles.len(), 2);
    let heading = doc.named_style("HEADING_1").unwrap();
    assert_eq!(heading.text_style.bold, Some(true));
    assert!(doc.named_style("HEADING_6").is_none());
}

#[test]
fn test_drawing_image_properties_alternate() {
    let doc = parse(json!({
        "body": {"content": []},
        "positionedObjects": {"kix.draw": {
            "objectId": "kix.draw",
            "positionedObjectProperties": {
                "positioning": {"layout": "WRAP_TEXT", "leftOffset": {"magnitude": 10, "unit": "PT"}},
                "embeddedObject": {
                    "embeddedDrawingProperties": {"imageProperties": {
                        "sourceUri": "https://example.com/source.png",
                        "contentUri": "https://example.com/content.png",
                        "cropProperties": {"offsetLeft": 0.1, "offsetTop": 0.2},
                    }},
                },
            },
        }},
    }))
    .unwrap();

    let object = doc.positioned_object("kix.draw").unwrap();
    assert_eq!(object.properties.layout.as_deref(), Some("WRAP_TEXT"));

    let image = object.image().unwrap();
    assert_eq!(image.remote_uri(), Some("https://example.com/source.png"));
    let crop = image.crop.as_ref().unwrap();
    assert_eq!(crop.offset_left, Some(0.1));
    assert_eq!(crop.offset_top, Some(0.2));
    assert!(crop.offset_right.is_none());

    let images: Vec<&str> = doc.image_objects().map(|(id, _)| id).collect();
    assert_eq!(images, vec!["kix.draw"]);
}

#[test]
fn test_segments() {
    let doc = parse(json!({
        "body": {"content": []},
        "documentStyle": {"defaultFooterId": "kix.f"},
        "footers": {"kix.f": {"footerId": "kix.f", "content": [
            {"paragraph": {"elements": [{"textRun": {"content": "Page\n"}}]}},
        ]}},
        "footnotes": {"kix.fn": {"footnoteId": "kix.fn", "content": []}},
    }))
    .unwrap();

    let footer = doc.default_footer().unwrap();
    assert_eq!(footer.segment_id.as_deref(), Some("kix.f"));
    assert_eq!(footer.content.len(), 1);
    assert!(doc.default_header().is_none());
    assert_eq!(
        doc.footnotes["kix.fn"].segment_id.as_deref(),
        Some("kix.fn")
    );
}

#[test]
fn test_json_export_of_typed_tree() {
    let raw = serde_json::to_vec(&json!({"body": {"content": [
        {"paragraph": {"elements": [{"textRun": {"content": "Hi\n"}}]}},
    ]}}))
    .unwrap();

    let compact = gdoc_html::to_json(&raw, gdoc_html::JsonFormat::Compact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&compact).unwrap();
    assert_eq!(value["body"][0]["content"]["type"], "paragraph");
    assert!(compact.contains("\"type\":\"text_run\""));

    let pretty = gdoc_html::to_json(&raw, gdoc_html::JsonFormat::Pretty).unwrap();
    assert!(pretty.contains('\n'));
}
