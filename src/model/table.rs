//! Table types.

use super::{Alignment, Paragraph, TextRun, TextStyle};
use serde::{Deserialize, Serialize};

/// A table grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,

    /// Per-column widths in cm; equal widths are derived when absent
    pub column_widths_cm: Option<Vec<f32>>,

    /// Center the table between the margins
    pub centered: bool,

    /// Suppress all borders (signature blocks)
    pub borderless: bool,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            column_widths_cm: None,
            centered: true,
            borderless: false,
        }
    }

    /// Create a borderless table.
    pub fn borderless() -> Self {
        Self {
            borderless: true,
            ..Self::new()
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Set per-column widths in cm.
    pub fn set_column_widths(&mut self, widths_cm: Vec<f32>) {
        self.column_widths_cm = Some(widths_cm);
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, based on the first row.
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows flagged as header rows.
    pub fn header_rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(|r| r.is_header)
    }

    /// Plain text representation, one tab-separated line per row.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

/// A table row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,

    /// Whether this is a header row
    pub is_header: bool,
}

impl TableRow {
    /// Create a new body row.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: false,
        }
    }

    /// Create a header row.
    pub fn header(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: true,
        }
    }

    /// Plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content (paragraphs)
    pub content: Vec<Paragraph>,

    /// Background shading fill (RRGGBB), header cells only
    pub shading: Option<String>,
}

impl TableCell {
    /// Create a cell with a single styled run.
    pub fn text(text: impl Into<String>, style: TextStyle, alignment: Alignment) -> Self {
        let mut p = Paragraph::with_run(TextRun::styled(text, style));
        p.style.alignment = alignment;
        Self {
            content: vec![p],
            shading: None,
        }
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            shading: None,
        }
    }

    /// Create a cell with full paragraphs.
    pub fn with_content(content: Vec<Paragraph>) -> Self {
        Self {
            content,
            shading: None,
        }
    }

    /// Set the shading fill and return self.
    pub fn shaded(mut self, fill: impl Into<String>) -> Self {
        self.shading = Some(fill.into());
        self
    }

    /// Plain text content.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        let mut table = Table::new();
        table.add_row(TableRow::header(vec![
            TableCell::text("Tuần", TextStyle::bold(12.0), Alignment::Center),
            TableCell::text("Hoạt động", TextStyle::bold(12.0), Alignment::Center),
        ]));
        table.add_row(TableRow::new(vec![
            TableCell::text("1", TextStyle::sized(12.0), Alignment::Left),
            TableCell::text("Pilot test", TextStyle::sized(12.0), Alignment::Left),
        ]));

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.header_rows().count(), 1);
    }

    #[test]
    fn test_cell_shading() {
        let cell = TableCell::text("Actor", TextStyle::bold(12.0), Alignment::Center)
            .shaded("D9E2F3");
        assert_eq!(cell.shading.as_deref(), Some("D9E2F3"));
    }

    #[test]
    fn test_borderless() {
        let table = Table::borderless();
        assert!(table.borderless);
        assert!(table.centered);
    }

    #[test]
    fn test_plain_text() {
        let mut table = Table::new();
        table.add_row(TableRow::new(vec![
            TableCell::text("a", TextStyle::default(), Alignment::Left),
            TableCell::text("b", TextStyle::default(), Alignment::Left),
        ]));
        assert_eq!(table.plain_text(), "a\tb");
    }
}
