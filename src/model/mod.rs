//! Typed document model for Google Docs JSON exports.
//!
//! Every type here is built once by the [`mapping`](crate::mapping) layer
//! from a single JSON snapshot and is read-only afterwards. Ids (lists,
//! objects, headers, named styles) are lookup keys into maps owned by the
//! same [`Document`]; nothing points across documents.

mod common;
mod document;
mod list;
mod object;
mod paragraph;
mod structure;
mod style;
mod table;

pub use common::{Border, Color, Dimension, DimensionPack, RgbColor, Size, Suggestions};
pub use document::{Document, NamedRange, NamedRanges, Range, Segment};
pub use list::{Glyph, List, NestingLevel};
pub use object::{
    CropProperties, EmbeddedObject, ImageProperties, InlineOrPositionedObject, ObjectProperties,
    SheetsChartReference,
};
pub use paragraph::{
    AutoText, Break, Bullet, FootnoteReference, InlineElement, InlineObjectElement, Paragraph,
    ParagraphElement, Person, RichLink, TextRun,
};
pub use structure::{
    Content, SectionBreak, SectionColumnProperties, SectionStyle, StructuralElement,
    TableOfContents,
};
pub use style::{
    DocumentStyle, HeaderFooterIds, Link, NamedStyle, ParagraphStyle, TextStyle,
    WeightedFontFamily,
};
pub use table::{ColumnProperties, Table, TableCell, TableCellStyle, TableRow, TableRowStyle};
