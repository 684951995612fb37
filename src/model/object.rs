//! Inline and positioned objects (images, drawings, charts).

use serde::Serialize;

use super::{Border, DimensionPack, Size, Suggestions};
use crate::error::Result;
use crate::mapping::{node_values, Field, FromNode, Node};

/// Crop offsets as fractions of the image size.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CropProperties {
    /// Left offset
    pub offset_left: Option<f64>,
    /// Right offset
    pub offset_right: Option<f64>,
    /// Top offset
    pub offset_top: Option<f64>,
    /// Bottom offset
    pub offset_bottom: Option<f64>,
    /// Rotation in radians
    pub angle: Option<f64>,
}

impl CropProperties {
    const OFFSET_LEFT: Field = Field::at("offsetLeft");
    const OFFSET_RIGHT: Field = Field::at("offsetRight");
    const OFFSET_TOP: Field = Field::at("offsetTop");
    const OFFSET_BOTTOM: Field = Field::at("offsetBottom");
    const ANGLE: Field = Field::at("angle");
}

impl FromNode for CropProperties {
    const TYPE_NAME: &'static str = "CropProperties";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            offset_left: node.get(&Self::OFFSET_LEFT)?,
            offset_right: node.get(&Self::OFFSET_RIGHT)?,
            offset_top: node.get(&Self::OFFSET_TOP)?,
            offset_bottom: node.get(&Self::OFFSET_BOTTOM)?,
            angle: node.get(&Self::ANGLE)?,
        })
    }
}

/// Image data of an embedded object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImageProperties {
    /// Short-lived download URI
    pub content_uri: Option<String>,
    /// URI the image was inserted from
    pub source_uri: Option<String>,
    /// Brightness in `[-1, 1]`
    pub brightness: Option<f64>,
    /// Contrast in `[-1, 1]`
    pub contrast: Option<f64>,
    /// Transparency in `[0, 1]`
    pub transparency: Option<f64>,
    /// Crop
    pub crop: Option<CropProperties>,
    /// Rotation in radians
    pub angle: Option<f64>,
}

impl ImageProperties {
    const CONTENT_URI: Field = Field::at("contentUri");
    const SOURCE_URI: Field = Field::at("sourceUri");
    const BRIGHTNESS: Field = Field::at("brightness");
    const CONTRAST: Field = Field::at("contrast");
    const TRANSPARENCY: Field = Field::at("transparency");
    const CROP: Field = Field::at("cropProperties").named("crop");
    const ANGLE: Field = Field::at("angle");

    /// URI to fetch the image from; the source URI is preferred.
    pub fn remote_uri(&self) -> Option<&str> {
        self.source_uri
            .as_deref()
            .or(self.content_uri.as_deref())
    }
}

impl FromNode for ImageProperties {
    const TYPE_NAME: &'static str = "ImageProperties";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            content_uri: node.get(&Self::CONTENT_URI)?,
            source_uri: node.get(&Self::SOURCE_URI)?,
            brightness: node.get(&Self::BRIGHTNESS)?,
            contrast: node.get(&Self::CONTRAST)?,
            transparency: node.get(&Self::TRANSPARENCY)?,
            crop: node.get(&Self::CROP)?,
            angle: node.get(&Self::ANGLE)?,
        })
    }
}

/// Chart linked from a spreadsheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SheetsChartReference {
    /// Spreadsheet id
    pub spreadsheet_id: Option<String>,
    /// Chart id within the spreadsheet
    pub chart_id: Option<i64>,
}

impl SheetsChartReference {
    const SPREADSHEET_ID: Field = Field::at("spreadsheetId");
    const CHART_ID: Field = Field::at("chartId");
}

impl FromNode for SheetsChartReference {
    const TYPE_NAME: &'static str = "SheetsChartReference";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            spreadsheet_id: node.get(&Self::SPREADSHEET_ID)?,
            chart_id: node.get(&Self::CHART_ID)?,
        })
    }
}

/// The object itself: image, drawing or chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmbeddedObject {
    /// Title (`horizontal line` marks a drawn rule)
    pub title: Option<String>,
    /// Alt text
    pub description: Option<String>,
    /// Border around the object
    pub border: Option<Border>,
    /// Display size
    pub size: Option<Size>,
    /// Outer margins
    pub margins: DimensionPack,
    /// Linked chart
    pub linked_chart: Option<SheetsChartReference>,
    /// Image data for images and drawings
    pub image_properties: Option<ImageProperties>,
}

impl EmbeddedObject {
    const TITLE: Field = Field::at("title");
    const DESCRIPTION: Field = Field::at("description");
    const BORDER: Field = Field::at("embeddedObjectBorder").named("border");
    const SIZE: Field = Field::at("size");
    const LINKED_CHART: Field =
        Field::at("linkedContentReference.sheetsChartReference").named("linkedChart");
    const IMAGE_PROPERTIES: Field = Field::at("imageProperties")
        .alt(&["embeddedDrawingProperties.imageProperties"]);

    /// Title marking an object drawn as a horizontal rule.
    pub const HORIZONTAL_LINE: &'static str = "horizontal line";

    /// Whether the object stands for a horizontal rule.
    pub fn is_horizontal_line(&self) -> bool {
        self.title.as_deref() == Some(Self::HORIZONTAL_LINE)
    }
}

impl FromNode for EmbeddedObject {
    const TYPE_NAME: &'static str = "EmbeddedObject";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            title: node.get(&Self::TITLE)?,
            description: node.get(&Self::DESCRIPTION)?,
            border: node.get(&Self::BORDER)?,
            size: node.get(&Self::SIZE)?,
            margins: node.pack()?,
            linked_chart: node.get(&Self::LINKED_CHART)?,
            image_properties: node.get(&Self::IMAGE_PROPERTIES)?,
        })
    }
}

/// Placement of an embedded object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObjectProperties {
    /// The object
    pub embedded_object: Option<EmbeddedObject>,
    /// Positioned layout, e.g. `WRAP_TEXT`; unset for inline objects
    pub layout: Option<String>,
    /// Offset from the anchoring paragraph (top/left only)
    pub offset: Option<DimensionPack>,
}

impl ObjectProperties {
    const EMBEDDED_OBJECT: Field = Field::at("embeddedObject");
    const LAYOUT: Field = Field::at("positioning.layout").named("layout");
    const OFFSET: Field = Field::at("positioning").named("offset");
}

impl FromNode for ObjectProperties {
    const TYPE_NAME: &'static str = "ObjectProperties";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            embedded_object: node.get(&Self::EMBEDDED_OBJECT)?,
            layout: node.get(&Self::LAYOUT)?,
            offset: node.get(&Self::OFFSET)?,
        })
    }
}

/// An entry of the document's inline or positioned object map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InlineOrPositionedObject {
    /// Object id
    pub object_id: Option<String>,
    /// Object and placement
    pub properties: ObjectProperties,
    /// Suggested edits
    pub suggestions: Suggestions,
}

impl InlineOrPositionedObject {
    const OBJECT_ID: Field = Field::at("objectId");
    const PROPERTIES: Field = Field::at("positionedObjectProperties")
        .alt(&["inlineObjectProperties"])
        .named("properties");

    /// The embedded object, if any.
    pub fn embedded(&self) -> Option<&EmbeddedObject> {
        self.properties.embedded_object.as_ref()
    }

    /// Image data, if the object is image-backed.
    pub fn image(&self) -> Option<&ImageProperties> {
        self.embedded().and_then(|e| e.image_properties.as_ref())
    }
}

impl FromNode for InlineOrPositionedObject {
    const TYPE_NAME: &'static str = "InlineOrPositionedObject";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            object_id: node.get(&Self::OBJECT_ID)?,
            properties: node.get_or_default(&Self::PROPERTIES)?,
            suggestions: node.pack()?,
        })
    }
}

node_values!(
    CropProperties,
    ImageProperties,
    SheetsChartReference,
    EmbeddedObject,
    ObjectProperties,
    InlineOrPositionedObject,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dimension;
    use serde_json::json;

    #[test]
    fn test_inline_image_object() {
        let obj: InlineOrPositionedObject = Node::build(&json!({
            "objectId": "kix.img1",
            "inlineObjectProperties": {"embeddedObject": {
                "description": "A cat",
                "imageProperties": {
                    "contentUri": "https://content.example/cat",
                    "cropProperties": {"offsetLeft": 0.1},
                },
                "size": {"width": {"magnitude": 100, "unit": "PT"}},
                "marginTop": {"magnitude": 9, "unit": "PT"},
            }},
        }))
        .unwrap();

        let image = obj.image().unwrap();
        assert_eq!(image.remote_uri(), Some("https://content.example/cat"));
        assert_eq!(image.crop.as_ref().and_then(|c| c.offset_left), Some(0.1));

        let embedded = obj.embedded().unwrap();
        assert_eq!(embedded.margins.top, Some(Dimension::points(9.0)));
        assert!(!embedded.is_horizontal_line());
        assert!(obj.properties.layout.is_none());
    }

    #[test]
    fn test_positioned_drawing_object() {
        let obj: InlineOrPositionedObject = Node::build(&json!({
            "objectId": "kix.pos1",
            "positionedObjectProperties": {
                "positioning": {
                    "layout": "WRAP_TEXT",
                    "leftOffset": {"magnitude": 10, "unit": "PT"},
                    "topOffset": {"magnitude": 20, "unit": "PT"},
                },
                "embeddedObject": {
                    "title": "horizontal line",
                    "embeddedDrawingProperties": {"imageProperties": {
                        "sourceUri": "https://source.example/rule",
                        "contentUri": "https://content.example/rule",
                    }},
                },
            },
        }))
        .unwrap();

        assert_eq!(obj.properties.layout.as_deref(), Some("WRAP_TEXT"));
        let offset = obj.properties.offset.as_ref().unwrap();
        assert_eq!(offset.left, Some(Dimension::points(10.0)));
        assert_eq!(offset.top, Some(Dimension::points(20.0)));
        assert!(obj.embedded().unwrap().is_horizontal_line());
        assert_eq!(
            obj.image().and_then(ImageProperties::remote_uri),
            Some("https://source.example/rule")
        );
    }
}
