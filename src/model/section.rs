//! Section-level types.
//!
//! A section is the word-processor structural unit that can carry its own
//! page decorations. The cover pages sit in bordered sections; everything
//! after them does not. Margins are deliberately NOT stored here — they
//! live once on the document tree and are stamped into every section at
//! render time.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A document section: an ordered run of blocks plus page decorations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Content blocks in document order
    pub blocks: Vec<Block>,

    /// Draw a decorative border around every page of this section
    pub page_border: bool,
}

impl Section {
    /// Create a new plain section.
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            page_border: false,
        }
    }

    /// Create a section with a page border (cover pages).
    pub fn bordered() -> Self {
        Self {
            blocks: Vec::new(),
            page_border: true,
        }
    }

    /// Append a block.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Append a paragraph block.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    /// Append a table block.
    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    /// Check if the section has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks in the section.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Plain text of the section content.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Paragraph(p) => Some(p.plain_text()),
                Block::Table(t) => Some(t.plain_text()),
                Block::PageBreak => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::new()
    }
}

/// A block-level element within a section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of text
    Paragraph(Paragraph),

    /// A table
    Table(Table),

    /// An explicit page break
    PageBreak,
}

impl Block {
    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextRun;

    #[test]
    fn test_section_blocks() {
        let mut section = Section::new();
        section.add_block(Block::PageBreak);
        section.add_paragraph(Paragraph::with_run(TextRun::new("MỞ ĐẦU")));

        assert_eq!(section.block_count(), 2);
        assert_eq!(section.plain_text(), "MỞ ĐẦU");
    }

    #[test]
    fn test_bordered_section() {
        assert!(Section::bordered().page_border);
        assert!(!Section::new().page_border);
    }
}
