//! Document-level types.

use super::{Block, Resource, Section};
use crate::style::Margins;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The declarative content tree of one generated document.
///
/// The tree is built in a single pass, rendered once, and discarded; it is
/// never mutated after serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentTree {
    /// Document metadata (title, author, timestamps)
    pub metadata: Metadata,

    /// Sections in document order; always at least one once content exists
    pub sections: Vec<Section>,

    /// Embedded resources (logo image), keyed by resource ID
    pub resources: HashMap<String, Resource>,

    /// Page margins applied to EVERY section at render time. Stored once,
    /// so repeated margin assignments overwrite rather than accumulate.
    pub margins: Option<Margins>,

    /// Write a centered self-updating page-number field into the header
    /// of every section
    pub page_number_header: bool,
}

impl DocumentTree {
    /// Create a new empty document tree.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            sections: Vec::new(),
            resources: HashMap::new(),
            margins: None,
            page_number_header: false,
        }
    }

    /// Start a new section; subsequent blocks land in it.
    pub fn begin_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// The section currently receiving blocks, creating the first one on
    /// demand.
    pub fn current_section_mut(&mut self) -> &mut Section {
        if self.sections.is_empty() {
            self.sections.push(Section::new());
        }
        self.sections.last_mut().expect("sections is non-empty")
    }

    /// Append a block to the current section.
    pub fn add_block(&mut self, block: Block) {
        self.current_section_mut().add_block(block);
    }

    /// Register an embedded resource.
    pub fn add_resource(&mut self, resource: Resource) {
        self.resources.insert(resource.id.clone(), resource);
    }

    /// Get a resource by ID.
    pub fn get_resource(&self, id: &str) -> Option<&Resource> {
        self.resources.get(id)
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Check if the tree has any content.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.is_empty())
    }

    /// Plain text of the whole document.
    pub fn plain_text(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for DocumentTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Document metadata written into the package core properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Creation timestamp
    pub created: Option<DateTime<Utc>>,

    /// Last modification timestamp
    pub modified: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Metadata with title and author, stamped now.
    pub fn titled(title: impl Into<String>, author: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
            subject: None,
            created: Some(now),
            modified: Some(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, TextRun};

    #[test]
    fn test_document_new() {
        let doc = DocumentTree::new();
        assert!(doc.is_empty());
        assert_eq!(doc.section_count(), 0);
        assert!(!doc.page_number_header);
    }

    #[test]
    fn test_first_section_on_demand() {
        let mut doc = DocumentTree::new();
        doc.add_block(Block::Paragraph(Paragraph::with_run(TextRun::new("a"))));
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.plain_text(), "a");
    }

    #[test]
    fn test_margin_overwrite() {
        let mut doc = DocumentTree::new();
        doc.margins = Some(Margins::new(2.0, 2.0, 2.0, 2.0));
        doc.margins = Some(Margins::new(2.5, 2.5, 3.0, 2.0));
        assert_eq!(doc.margins, Some(Margins::new(2.5, 2.5, 3.0, 2.0)));
    }

    #[test]
    fn test_metadata_titled() {
        let meta = Metadata::titled("Báo cáo thực tập", "Nguyễn Văn A");
        assert_eq!(meta.title.as_deref(), Some("Báo cáo thực tập"));
        assert!(meta.created.is_some());
    }
}
