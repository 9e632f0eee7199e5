//! JSON dump of the content tree, for inspection and golden tests.

use crate::error::Result;
use crate::model::DocumentTree;

/// Output shape for JSON dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Indented, human-readable
    #[default]
    Pretty,
    /// Single line
    Compact,
}

/// Serialize the content tree to JSON. Resource bytes are omitted; only
/// their IDs and pixel dimensions appear.
pub fn to_json(doc: &DocumentTree, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc)?,
        JsonFormat::Compact => serde_json::to_string(doc)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Paragraph, TextRun};

    #[test]
    fn test_json_dump() {
        let mut doc = DocumentTree::new();
        doc.add_block(Block::Paragraph(Paragraph::with_run(TextRun::new(
            "MỞ ĐẦU",
        ))));

        let pretty = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(pretty.contains("MỞ ĐẦU"));
        assert!(pretty.contains('\n'));

        let compact = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!compact.contains('\n'));
    }
}
