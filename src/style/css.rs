//! CSS declaration lists and value formatting.

use std::fmt;

use crate::model::{Border, Color, Dimension, RgbColor};

/// Unit assumed when a dimension has a magnitude but no unit.
const DEFAULT_UNIT: &str = "PT";

/// Border drawn on table cell sides that declare none.
pub const DEFAULT_CELL_BORDER: &str = "1pt solid currentColor";

/// Ordered list of CSS declarations.
///
/// Declarations keep insertion order and empty values are dropped, so the
/// same style always serializes to the same string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Css {
    declarations: Vec<(String, String)>,
}

impl Css {
    /// Create an empty declaration list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration; empty values are ignored.
    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.declarations.push((property.into(), value));
        }
    }

    /// Append a declaration when a value is present.
    pub fn push_opt(&mut self, property: impl Into<String>, value: Option<String>) {
        if let Some(value) = value {
            self.push(property, value);
        }
    }

    /// Append every declaration of `other`.
    pub fn extend(&mut self, other: Css) {
        self.declarations.extend(other.declarations);
    }

    /// Whether no declaration was added.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Whether a property was declared.
    pub fn contains(&self, property: &str) -> bool {
        self.declarations.iter().any(|(p, _)| p == property)
    }

    /// Value of a property, if declared.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// ` style="..."` attribute, or nothing when empty.
    pub fn attr(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!(" style=\"{}\"", self)
        }
    }
}

impl fmt::Display for Css {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", property, value)?;
        }
        Ok(())
    }
}

/// Format a dimension as `{magnitude}{unit}`; empty without a magnitude.
pub fn dimension(dim: &Dimension) -> String {
    match dim.magnitude {
        Some(magnitude) => format!(
            "{}{}",
            magnitude,
            dim.unit.as_deref().unwrap_or(DEFAULT_UNIT)
        ),
        None => String::new(),
    }
}

/// Format an optional dimension.
pub fn dimension_opt(dim: Option<&Dimension>) -> Option<String> {
    dim.map(dimension).filter(|s| !s.is_empty())
}

/// Convert one `[0, 1]` channel to two upper-case hex digits.
///
/// Scales by 256 and clamps, so `1.0` maps to `FF` and `0.5` to `80`.
pub fn channel_hex(channel: f64) -> String {
    let scaled = (channel * 256.0).round().clamp(0.0, 255.0) as u8;
    format!("{:02X}", scaled)
}

/// `#RRGGBB` for a set of channels.
pub fn rgb_hex(rgb: &RgbColor) -> String {
    format!(
        "#{}{}{}",
        channel_hex(rgb.red),
        channel_hex(rgb.green),
        channel_hex(rgb.blue)
    )
}

/// `#RRGGBB` for a color, or `None` when it carries no channels.
pub fn color(color: &Color) -> Option<String> {
    color.rgb.as_ref().map(rgb_hex)
}

/// CSS border style keyword for a dash style.
pub fn dash_style(dash: Option<&str>) -> &'static str {
    match dash {
        Some("DOT") => "dotted",
        Some("DASH") => "dashed",
        Some("DOUBLE") => "double",
        _ => "solid",
    }
}

/// Shorthand `{width} {style} {color}` for a border.
pub fn border(border: &Border) -> String {
    let width = dimension_opt(border.width.as_ref()).unwrap_or_else(|| "1pt".to_string());
    let stroke = border
        .color
        .as_ref()
        .and_then(|c| c.rgb.as_ref())
        .map(rgb_hex)
        .unwrap_or_else(|| "currentColor".to_string());
    format!(
        "{} {} {}",
        width,
        dash_style(border.dash_style.as_deref()),
        stroke
    )
}

/// Whether a border would draw a visible line.
pub fn is_visible(border: &Border) -> bool {
    !border.is_hidden()
        && border
            .width
            .as_ref()
            .and_then(|w| w.magnitude)
            .is_some_and(|m| m > 0.0)
}

/// Quoted font family name.
pub fn font_family(name: &str) -> String {
    let cleaned: String = name.chars().filter(|c| *c != '\'' && *c != '"').collect();
    format!("'{}'", cleaned)
}

/// HTML tag for a named style type.
pub fn tag_for(named_style_type: Option<&str>) -> &'static str {
    match named_style_type {
        Some("TITLE") | Some("HEADING_1") => "h1",
        Some("SUBTITLE") | Some("HEADING_2") => "h2",
        Some("HEADING_3") => "h3",
        Some("HEADING_4") => "h4",
        Some("HEADING_5") => "h5",
        Some("HEADING_6") => "h6",
        _ => "p",
    }
}

/// `list-style-type` for an ordered glyph type.
pub fn list_style_type(glyph_type: &str) -> &'static str {
    match glyph_type {
        "ALPHA" => "lower-alpha",
        "UPPER_ALPHA" => "upper-alpha",
        "ROMAN" => "lower-roman",
        "UPPER_ROMAN" => "upper-roman",
        "ZERO_DECIMAL" => "decimal-leading-zero",
        _ => "decimal",
    }
}

/// `text-align` value for a paragraph alignment.
pub fn text_align(alignment: &str) -> Option<&'static str> {
    match alignment {
        "START" => Some("start"),
        "CENTER" => Some("center"),
        "END" => Some("end"),
        "JUSTIFIED" => Some("justify"),
        _ => None,
    }
}

/// `vertical-align` value for a cell content alignment.
pub fn vertical_align(alignment: &str) -> Option<&'static str> {
    match alignment {
        "TOP" => Some("top"),
        "MIDDLE" => Some("middle"),
        "BOTTOM" => Some("bottom"),
        _ => None,
    }
}
