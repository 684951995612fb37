//! List definitions referenced by paragraph bullets.

use serde::Serialize;

use super::{Dimension, Suggestions, TextStyle};
use crate::error::Result;
use crate::mapping::{node_values, Field, FromNode, Node};

/// Marker of a nesting level.
///
/// The export stores either an enumeration (`glyphType`) or the literal
/// character (`glyphSymbol`); which one is present decides ordered vs
/// unordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Glyph {
    /// Numbered or lettered, e.g. `DECIMAL`, `UPPER_ROMAN`
    Ordered(String),
    /// Literal bullet character
    Symbol(String),
    /// No glyph
    #[default]
    None,
}

impl Glyph {
    /// Whether the level renders as an ordered list.
    pub fn is_ordered(&self) -> bool {
        matches!(self, Glyph::Ordered(_))
    }
}

/// One level of a list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NestingLevel {
    /// `START`, `CENTER` or `END`
    pub bullet_alignment: Option<String>,
    /// Format string, e.g. `%0.`
    pub glyph_format: Option<String>,
    /// Marker
    pub glyph: Glyph,
    /// First line indent
    pub indent_first_line: Option<Dimension>,
    /// Start indent
    pub indent_start: Option<Dimension>,
    /// Style of the glyph.
    ///
    /// Kept in the model only: inline CSS cannot reach `::marker`, and
    /// putting it on `<li>` would restyle the item text.
    pub text_style: TextStyle,
    /// First number of an ordered level
    pub start_number: Option<i64>,
}

impl NestingLevel {
    const BULLET_ALIGNMENT: Field = Field::at("bulletAlignment");
    const GLYPH_FORMAT: Field = Field::at("glyphFormat");
    const GLYPH_TYPE: Field = Field::at("glyphType");
    const GLYPH_SYMBOL: Field = Field::at("glyphSymbol");
    const INDENT_FIRST_LINE: Field = Field::at("indentFirstLine");
    const INDENT_START: Field = Field::at("indentStart");
    const TEXT_STYLE: Field = Field::at("textStyle");
    const START_NUMBER: Field = Field::at("startNumber");

    /// Create an ordered level.
    pub fn ordered(glyph_type: impl Into<String>) -> Self {
        Self {
            glyph: Glyph::Ordered(glyph_type.into()),
            ..Default::default()
        }
    }

    /// Create an unordered level.
    pub fn symbol(symbol: impl Into<String>) -> Self {
        Self {
            glyph: Glyph::Symbol(symbol.into()),
            ..Default::default()
        }
    }

    fn glyph(node: &Node<'_>) -> Result<Glyph> {
        let glyph_type: Option<String> = node.get(&Self::GLYPH_TYPE)?;
        if let Some(kind) = glyph_type {
            if !matches!(kind.as_str(), "NONE" | "GLYPH_TYPE_UNSPECIFIED") {
                return Ok(Glyph::Ordered(kind));
            }
        }
        Ok(node
            .get::<String>(&Self::GLYPH_SYMBOL)?
            .map(Glyph::Symbol)
            .unwrap_or_default())
    }
}

impl FromNode for NestingLevel {
    const TYPE_NAME: &'static str = "NestingLevel";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            bullet_alignment: node.get(&Self::BULLET_ALIGNMENT)?,
            glyph_format: node.get(&Self::GLYPH_FORMAT)?,
            glyph: Self::glyph(node)?,
            indent_first_line: node.get(&Self::INDENT_FIRST_LINE)?,
            indent_start: node.get(&Self::INDENT_START)?,
            text_style: node.get_or_default(&Self::TEXT_STYLE)?,
            start_number: node.get(&Self::START_NUMBER)?,
        })
    }
}

/// A list: one nesting level definition per depth.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct List {
    /// Levels, index = nesting level
    pub nesting_levels: Vec<NestingLevel>,
    /// Suggested edits
    pub suggestions: Suggestions,
}

impl List {
    const NESTING_LEVELS: Field =
        Field::at("listProperties.nestingLevels").named("nestingLevels");

    /// Create a list from its levels.
    pub fn new(nesting_levels: Vec<NestingLevel>) -> Self {
        Self {
            nesting_levels,
            ..Default::default()
        }
    }

    /// Definition of one level, if declared.
    pub fn level(&self, level: u32) -> Option<&NestingLevel> {
        self.nesting_levels.get(level as usize)
    }
}

impl FromNode for List {
    const TYPE_NAME: &'static str = "List";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            nesting_levels: node.get_or_default(&Self::NESTING_LEVELS)?,
            suggestions: node.pack()?,
        })
    }
}

node_values!(NestingLevel, List);
