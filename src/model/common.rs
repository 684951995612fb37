//! Value types shared across the model: lengths, colors, borders.

use serde::Serialize;

use crate::error::Result;
use crate::mapping::{node_values, Field, FromNode, Node};

/// A length: magnitude plus unit (the export only uses `PT`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dimension {
    /// Numeric magnitude
    pub magnitude: Option<f64>,

    /// Unit name, e.g. `PT`
    pub unit: Option<String>,
}

impl Dimension {
    const MAGNITUDE: Field = Field::at("magnitude");
    const UNIT: Field = Field::at("unit");

    /// Create a dimension.
    pub fn new(magnitude: f64, unit: impl Into<String>) -> Self {
        Self {
            magnitude: Some(magnitude),
            unit: Some(unit.into()),
        }
    }

    /// Create a dimension in points.
    pub fn points(magnitude: f64) -> Self {
        Self::new(magnitude, "PT")
    }
}

impl FromNode for Dimension {
    const TYPE_NAME: &'static str = "Dimension";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            magnitude: node.get(&Self::MAGNITUDE)?,
            unit: node.get(&Self::UNIT)?,
        })
    }
}

/// Four-sided lengths.
///
/// The export spells the same idea three ways (`marginTop`, `paddingTop`,
/// `topOffset`); all of them land here.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DimensionPack {
    /// Top side
    pub top: Option<Dimension>,
    /// Bottom side
    pub bottom: Option<Dimension>,
    /// Left side
    pub left: Option<Dimension>,
    /// Right side
    pub right: Option<Dimension>,
}

impl DimensionPack {
    const TOP: Field = Field::at("marginTop")
        .alt(&["paddingTop", "topOffset"])
        .named("top");
    const BOTTOM: Field = Field::at("marginBottom")
        .alt(&["paddingBottom"])
        .named("bottom");
    const LEFT: Field = Field::at("marginLeft")
        .alt(&["paddingLeft", "leftOffset"])
        .named("left");
    const RIGHT: Field = Field::at("marginRight")
        .alt(&["paddingRight"])
        .named("right");

    /// Whether no side is set.
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.left.is_none() && self.right.is_none()
    }

    /// Sides in CSS order (top, right, bottom, left) with their names.
    pub fn sides(&self) -> [(&'static str, Option<&Dimension>); 4] {
        [
            ("top", self.top.as_ref()),
            ("right", self.right.as_ref()),
            ("bottom", self.bottom.as_ref()),
            ("left", self.left.as_ref()),
        ]
    }
}

impl FromNode for DimensionPack {
    const TYPE_NAME: &'static str = "DimensionPack";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            top: node.get(&Self::TOP)?,
            bottom: node.get(&Self::BOTTOM)?,
            left: node.get(&Self::LEFT)?,
            right: node.get(&Self::RIGHT)?,
        })
    }
}

/// Width and height.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Size {
    /// Height
    pub height: Option<Dimension>,
    /// Width
    pub width: Option<Dimension>,
}

impl Size {
    const HEIGHT: Field = Field::at("height");
    const WIDTH: Field = Field::at("width");
}

impl FromNode for Size {
    const TYPE_NAME: &'static str = "Size";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            height: node.get(&Self::HEIGHT)?,
            width: node.get(&Self::WIDTH)?,
        })
    }
}

/// RGB channels in `[0, 1]`. Missing channels are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RgbColor {
    /// Red channel
    pub red: f64,
    /// Green channel
    pub green: f64,
    /// Blue channel
    pub blue: f64,
}

impl RgbColor {
    const RED: Field = Field::at("red").or_int(0);
    const GREEN: Field = Field::at("green").or_int(0);
    const BLUE: Field = Field::at("blue").or_int(0);

    /// Create a color from channels.
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }
}

impl FromNode for RgbColor {
    const TYPE_NAME: &'static str = "RgbColor";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            red: node.require(&Self::RED)?,
            green: node.require(&Self::GREEN)?,
            blue: node.require(&Self::BLUE)?,
        })
    }
}

/// An optional color.
///
/// Accepts both the bare `{rgbColor}` and the wrapped `{color: {rgbColor}}`
/// spellings. A color without channels means "transparent / unset".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Color {
    /// Channels, if any
    pub rgb: Option<RgbColor>,
}

impl Color {
    const RGB: Field = Field::at("rgbColor").alt(&["color.rgbColor"]).named("rgb");

    /// Create a color from channels.
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            rgb: Some(RgbColor::new(red, green, blue)),
        }
    }
}

impl FromNode for Color {
    const TYPE_NAME: &'static str = "Color";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            rgb: node.get(&Self::RGB)?,
        })
    }
}

/// A border on a paragraph, table cell or embedded object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Border {
    /// Border color
    pub color: Option<Color>,

    /// Border width
    pub width: Option<Dimension>,

    /// Dash style (`SOLID`, `DOT`, `DASH`)
    pub dash_style: Option<String>,

    /// Padding between border and content (paragraph borders only)
    pub padding: Option<Dimension>,

    /// `RENDERED` or `NOT_RENDERED` (embedded object borders only)
    pub property_state: Option<String>,
}

impl Border {
    const COLOR: Field = Field::at("color");
    const WIDTH: Field = Field::at("width");
    const DASH_STYLE: Field = Field::at("dashStyle");
    const PADDING: Field = Field::at("padding");
    const PROPERTY_STATE: Field = Field::at("propertyState");

    /// Create a solid border in points.
    pub fn solid(width: f64, color: Color) -> Self {
        Self {
            color: Some(color),
            width: Some(Dimension::points(width)),
            dash_style: Some("SOLID".to_string()),
            ..Default::default()
        }
    }

    /// Whether the border is explicitly switched off.
    pub fn is_hidden(&self) -> bool {
        self.property_state.as_deref() == Some("NOT_RENDERED")
    }
}

impl FromNode for Border {
    const TYPE_NAME: &'static str = "Border";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            color: node.get(&Self::COLOR)?,
            width: node.get(&Self::WIDTH)?,
            dash_style: node.get(&Self::DASH_STYLE)?,
            padding: node.get(&Self::PADDING)?,
            property_state: node.get(&Self::PROPERTY_STATE)?,
        })
    }
}

/// Suggested-edit markers carried by most nodes.
///
/// Read for completeness; the renderer shows the document as accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Suggestions {
    /// Suggested insertion ids
    pub insertion_ids: Vec<String>,
    /// Suggested deletion ids
    pub deletion_ids: Vec<String>,
}

impl Suggestions {
    const INSERTIONS: Field = Field::at("suggestedInsertionIds");
    const DELETIONS: Field = Field::at("suggestedDeletionIds");

    /// Whether the node carries no suggestions.
    pub fn is_empty(&self) -> bool {
        self.insertion_ids.is_empty() && self.deletion_ids.is_empty()
    }
}

impl FromNode for Suggestions {
    const TYPE_NAME: &'static str = "Suggestions";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            insertion_ids: node.get_or_default(&Self::INSERTIONS)?,
            deletion_ids: node.get_or_default(&Self::DELETIONS)?,
        })
    }
}

node_values!(Dimension, DimensionPack, Size, RgbColor, Color, Border, Suggestions);
