//! Tables, rows and cells.

use serde::Serialize;

use super::{Border, Color, Dimension, DimensionPack, StructuralElement, Suggestions};
use crate::error::Result;
use crate::mapping::{node_values, Field, FromNode, Node};

/// Width policy of one table column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColumnProperties {
    /// `EVENLY_DISTRIBUTED` or `FIXED_WIDTH`
    pub width_type: Option<String>,
    /// Explicit width
    pub width: Option<Dimension>,
}

impl ColumnProperties {
    const WIDTH_TYPE: Field = Field::at("widthType");
    const WIDTH: Field = Field::at("width");

    /// Whether the column shares the table width evenly.
    pub fn is_evenly_distributed(&self) -> bool {
        self.width_type.as_deref() == Some("EVENLY_DISTRIBUTED")
    }
}

impl FromNode for ColumnProperties {
    const TYPE_NAME: &'static str = "ColumnProperties";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            width_type: node.get(&Self::WIDTH_TYPE)?,
            width: node.get(&Self::WIDTH)?,
        })
    }
}

/// A table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    /// Number of rows
    pub rows: u32,
    /// Number of columns
    pub columns: u32,
    /// Per-column width policy
    pub column_properties: Vec<ColumnProperties>,
    /// Rows in order
    pub table_rows: Vec<TableRow>,
    /// Suggested edits
    pub suggestions: Suggestions,
}

impl Table {
    const ROWS: Field = Field::at("rows").or_int(0);
    const COLUMNS: Field = Field::at("columns").or_int(0);
    const COLUMN_PROPERTIES: Field =
        Field::at("tableStyle.tableColumnProperties").named("columnProperties");
    const TABLE_ROWS: Field = Field::at("tableRows").strict();

    /// Column count, falling back to the widest row when `columns` is unset.
    pub fn column_count(&self) -> usize {
        if self.columns > 0 {
            return self.columns as usize;
        }
        self.table_rows
            .iter()
            .map(|row| row.cells.len())
            .max()
            .unwrap_or(0)
    }
}

impl FromNode for Table {
    const TYPE_NAME: &'static str = "Table";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            rows: node.require(&Self::ROWS)?,
            columns: node.require(&Self::COLUMNS)?,
            column_properties: node.get_or_default(&Self::COLUMN_PROPERTIES)?,
            table_rows: node.require(&Self::TABLE_ROWS)?,
            suggestions: node.pack()?,
        })
    }
}

/// Row-level style.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableRowStyle {
    /// Minimum row height
    pub min_row_height: Option<Dimension>,
    /// Whether the row repeats as a header
    pub table_header: Option<bool>,
    /// Whether the row may not split across pages
    pub prevent_overflow: Option<bool>,
}

impl TableRowStyle {
    const MIN_ROW_HEIGHT: Field = Field::at("minRowHeight");
    const TABLE_HEADER: Field = Field::at("tableHeader");
    const PREVENT_OVERFLOW: Field = Field::at("preventOverflow");
}

impl FromNode for TableRowStyle {
    const TYPE_NAME: &'static str = "TableRowStyle";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            min_row_height: node.get(&Self::MIN_ROW_HEIGHT)?,
            table_header: node.get(&Self::TABLE_HEADER)?,
            prevent_overflow: node.get(&Self::PREVENT_OVERFLOW)?,
        })
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableRow {
    /// Start offset in the document
    pub start_index: Option<i64>,
    /// End offset in the document
    pub end_index: Option<i64>,
    /// Row style
    pub style: TableRowStyle,
    /// Cells in order
    pub cells: Vec<TableCell>,
}

impl TableRow {
    const START_INDEX: Field = Field::at("startIndex");
    const END_INDEX: Field = Field::at("endIndex");
    const STYLE: Field = Field::at("tableRowStyle").named("style");
    const CELLS: Field = Field::at("tableCells").named("cells").strict();

    /// Whether the row is a repeated header row.
    pub fn is_header(&self) -> bool {
        self.style.table_header.unwrap_or(false)
    }
}

impl FromNode for TableRow {
    const TYPE_NAME: &'static str = "TableRow";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            start_index: node.get(&Self::START_INDEX)?,
            end_index: node.get(&Self::END_INDEX)?,
            style: node.get_or_default(&Self::STYLE)?,
            cells: node.require(&Self::CELLS)?,
        })
    }
}

/// Cell-level style.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableCellStyle {
    /// Rows spanned
    pub row_span: Option<u32>,
    /// Columns spanned
    pub column_span: Option<u32>,
    /// Background color
    pub background_color: Option<Color>,
    /// Top border
    pub border_top: Option<Border>,
    /// Bottom border
    pub border_bottom: Option<Border>,
    /// Left border
    pub border_left: Option<Border>,
    /// Right border
    pub border_right: Option<Border>,
    /// Inner paddings
    pub paddings: DimensionPack,
    /// `TOP`, `MIDDLE` or `BOTTOM`
    pub content_alignment: Option<String>,
}

impl TableCellStyle {
    const ROW_SPAN: Field = Field::at("rowSpan");
    const COLUMN_SPAN: Field = Field::at("columnSpan");
    const BACKGROUND: Field = Field::at("backgroundColor");
    const BORDER_TOP: Field = Field::at("borderTop");
    const BORDER_BOTTOM: Field = Field::at("borderBottom");
    const BORDER_LEFT: Field = Field::at("borderLeft");
    const BORDER_RIGHT: Field = Field::at("borderRight");
    const CONTENT_ALIGNMENT: Field = Field::at("contentAlignment");

    /// Borders in CSS side order with their side names.
    pub fn borders(&self) -> [(&'static str, Option<&Border>); 4] {
        [
            ("top", self.border_top.as_ref()),
            ("right", self.border_right.as_ref()),
            ("bottom", self.border_bottom.as_ref()),
            ("left", self.border_left.as_ref()),
        ]
    }
}

impl FromNode for TableCellStyle {
    const TYPE_NAME: &'static str = "TableCellStyle";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            row_span: node.get(&Self::ROW_SPAN)?,
            column_span: node.get(&Self::COLUMN_SPAN)?,
            background_color: node.get(&Self::BACKGROUND)?,
            border_top: node.get(&Self::BORDER_TOP)?,
            border_bottom: node.get(&Self::BORDER_BOTTOM)?,
            border_left: node.get(&Self::BORDER_LEFT)?,
            border_right: node.get(&Self::BORDER_RIGHT)?,
            paddings: node.pack()?,
            content_alignment: node.get(&Self::CONTENT_ALIGNMENT)?,
        })
    }
}

/// A table cell; owns its own structural elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableCell {
    /// Start offset in the document
    pub start_index: Option<i64>,
    /// End offset in the document
    pub end_index: Option<i64>,
    /// Cell style
    pub style: TableCellStyle,
    /// Cell content
    pub content: Vec<StructuralElement>,
}

impl TableCell {
    const START_INDEX: Field = Field::at("startIndex");
    const END_INDEX: Field = Field::at("endIndex");
    const STYLE: Field = Field::at("tableCellStyle").named("style");
    const CONTENT: Field = Field::at("content");
}

impl FromNode for TableCell {
    const TYPE_NAME: &'static str = "TableCell";

    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            start_index: node.get(&Self::START_INDEX)?,
            end_index: node.get(&Self::END_INDEX)?,
            style: node.get_or_default(&Self::STYLE)?,
            content: node.get_or_default(&Self::CONTENT)?,
        })
    }
}

node_values!(
    ColumnProperties,
    Table,
    TableRowStyle,
    TableRow,
    TableCellStyle,
    TableCell,
);
