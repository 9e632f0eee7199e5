//! Content-tree types for document generation.
//!
//! This module defines the declarative intermediate representation that
//! bridges report assembly and WordprocessingML rendering: content is
//! plain data with no knowledge of the output markup.

mod document;
mod paragraph;
mod resource;
mod section;
mod table;

pub use document::{DocumentTree, Metadata};
pub use paragraph::{
    Alignment, FieldCode, InlineContent, Paragraph, ParagraphStyle, TextRun, TextStyle,
};
pub use resource::{Resource, ResourceKind};
pub use section::{Block, Section};
pub use table::{Table, TableCell, TableRow};
