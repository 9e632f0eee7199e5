//! High-level report assembly.
//!
//! [`ReportBuilder`] layers the university formatting rules over the raw
//! content tree: headings, body text, captioned tables and figures come
//! out styled without the caller touching a single measurement. Caption
//! numbering is emitted as self-updating field directives; the builder
//! only tracks which chapter a counter last saw so it can restart the
//! counter when a new chapter begins.

use std::path::Path;

use crate::model::{
    Alignment, Block, DocumentTree, FieldCode, Metadata, Paragraph, ParagraphStyle, Resource,
    Section, Table, TableCell, TableRow, TextRun, TextStyle,
};
use crate::style::{Margins, StyleSheet};

/// Options for a single free-form line.
#[derive(Debug, Clone)]
pub struct LineOptions {
    /// Font size in points
    pub size_pt: f32,
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Underline
    pub underline: bool,
    /// Alignment
    pub alignment: Alignment,
    /// Space before in points
    pub space_before_pt: f32,
    /// Space after in points
    pub space_after_pt: f32,
    /// Text color override (RRGGBB)
    pub color: Option<String>,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            size_pt: 13.0,
            bold: false,
            italic: false,
            underline: false,
            alignment: Alignment::Center,
            space_before_pt: 0.0,
            space_after_pt: 0.0,
            color: None,
        }
    }
}

impl LineOptions {
    /// Set the font size.
    pub fn with_size(mut self, size_pt: f32) -> Self {
        self.size_pt = size_pt;
        self
    }

    /// Set bold.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set underline.
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// Set the text color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the spacing around the line.
    pub fn with_spacing(mut self, before_pt: f32, after_pt: f32) -> Self {
        self.space_before_pt = before_pt;
        self.space_after_pt = after_pt;
        self
    }

    fn text_style(&self) -> TextStyle {
        TextStyle {
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
            size_pt: Some(self.size_pt),
            color: self.color.clone(),
            ..Default::default()
        }
    }
}

/// Builds a formatted report document.
pub struct ReportBuilder {
    styles: StyleSheet,
    doc: DocumentTree,
    table_chapter: Option<u32>,
    figure_chapter: Option<u32>,
}

impl ReportBuilder {
    /// Create a builder over a formatting profile.
    pub fn new(styles: StyleSheet) -> Self {
        Self {
            styles,
            doc: DocumentTree::new(),
            table_chapter: None,
            figure_chapter: None,
        }
    }

    /// Create a builder with the ĐH GTVT profile.
    pub fn utc() -> Self {
        Self::new(StyleSheet::utc())
    }

    /// The formatting profile in use.
    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    /// Set the document metadata.
    pub fn metadata(&mut self, metadata: Metadata) -> &mut Self {
        self.doc.metadata = metadata;
        self
    }

    /// Set page margins for the whole document. Repeated calls replace the
    /// previous values; nothing accumulates per section.
    pub fn set_margins(&mut self, margins: Margins) -> &mut Self {
        self.doc.margins = Some(margins);
        self
    }

    /// Put a centered self-updating page number in the page header.
    pub fn page_number_header(&mut self) -> &mut Self {
        self.doc.page_number_header = true;
        self
    }

    /// Start a new section, optionally with a decorative page border.
    pub fn begin_section(&mut self, page_border: bool) -> &mut Self {
        self.doc.begin_section(if page_border {
            Section::bordered()
        } else {
            Section::new()
        });
        self
    }

    /// Force a page break.
    pub fn page_break(&mut self) -> &mut Self {
        self.doc.add_block(Block::PageBreak);
        self
    }

    /// Insert an empty spacer paragraph.
    pub fn empty_line(&mut self) -> &mut Self {
        self.doc.add_block(Block::Paragraph(Paragraph::new()));
        self
    }

    /// Chapter heading: uppercased, centered, outline level 1. Embedded
    /// newlines become in-paragraph line breaks so multi-line chapter
    /// names stay one outline entry.
    pub fn chapter_title(&mut self, text: &str, starts_new_page: bool) -> &mut Self {
        if starts_new_page {
            self.page_break();
        }
        let mut p = Paragraph::new();
        let style = TextStyle::bold(self.styles.chapter_pt);
        for (index, line) in text.to_uppercase().lines().enumerate() {
            if index > 0 {
                p.add_line_break();
            }
            p.add_run(TextRun::styled(line, style.clone()));
        }
        p.style = ParagraphStyle {
            alignment: Alignment::Center,
            outline_level: Some(1),
            space_before_pt: Some(0.0),
            space_after_pt: Some(12.0),
            ..Default::default()
        };
        self.doc.add_block(Block::Paragraph(p));
        self
    }

    /// Section heading ("1.1 ..."), outline level 2.
    pub fn section_title(&mut self, text: &str) -> &mut Self {
        self.heading(text, self.styles.section_pt, 2, 12.0, 6.0)
    }

    /// Subsection heading ("1.1.1 ..."), outline level 3.
    pub fn subsection_title(&mut self, text: &str) -> &mut Self {
        self.heading(text, self.styles.subsection_pt, 3, 6.0, 6.0)
    }

    fn heading(
        &mut self,
        text: &str,
        size_pt: f32,
        level: u8,
        before_pt: f32,
        after_pt: f32,
    ) -> &mut Self {
        let mut p = Paragraph::with_run(TextRun::styled(text, TextStyle::bold(size_pt)));
        p.style = ParagraphStyle {
            alignment: Alignment::Left,
            outline_level: Some(level),
            space_before_pt: Some(before_pt),
            space_after_pt: Some(after_pt),
            ..Default::default()
        };
        self.doc.add_block(Block::Paragraph(p));
        self
    }

    /// Bold-italic run-in heading below the outline ("a) ..."); not part
    /// of the navigable outline.
    pub fn sub_subsection_title(&mut self, text: &str) -> &mut Self {
        let mut p = Paragraph::with_run(TextRun::styled(
            text,
            TextStyle::bold_italic(self.styles.body_pt),
        ));
        p.style = ParagraphStyle {
            alignment: Alignment::Left,
            space_before_pt: Some(6.0),
            space_after_pt: Some(3.0),
            ..Default::default()
        };
        self.doc.add_block(Block::Paragraph(p));
        self
    }

    /// Justified body paragraph with first-line indent and 1.2 spacing.
    pub fn body_paragraph(&mut self, text: &str) -> &mut Self {
        self.body_text(text, Some(self.styles.first_line_indent_cm))
    }

    /// Body paragraph without the first-line indent (continuation text,
    /// text directly under a caption).
    pub fn body_paragraph_flush(&mut self, text: &str) -> &mut Self {
        self.body_text(text, None)
    }

    fn body_text(&mut self, text: &str, indent_cm: Option<f32>) -> &mut Self {
        let mut p = Paragraph::with_run(TextRun::new(text));
        p.style = ParagraphStyle {
            line_spacing: Some(self.styles.line_spacing),
            first_line_indent_cm: indent_cm,
            space_after_pt: Some(6.0),
            ..Default::default()
        };
        self.doc.add_block(Block::Paragraph(p));
        self
    }

    /// Bulleted list, one item per entry.
    pub fn bullet_list(&mut self, items: &[&str]) -> &mut Self {
        for item in items {
            let mut p = Paragraph::with_run(TextRun::new(*item));
            p.style = ParagraphStyle {
                bullet: true,
                left_indent_cm: Some(self.styles.list_indent_cm),
                first_line_indent_cm: Some(-self.styles.list_hanging_cm),
                line_spacing: Some(self.styles.line_spacing),
                space_after_pt: Some(3.0),
                ..Default::default()
            };
            self.doc.add_block(Block::Paragraph(p));
        }
        self
    }

    /// Numbered list with literal "1.", "2." prefixes. The numbers are
    /// literal text, not a numbering definition, so items can be quoted
    /// verbatim elsewhere (reference lists).
    pub fn numbered_list(&mut self, items: &[&str]) -> &mut Self {
        for (index, item) in items.iter().enumerate() {
            let mut p = Paragraph::new();
            p.add_run(TextRun::new(format!("{}. ", index + 1)));
            p.add_run(TextRun::new(*item));
            p.style = ParagraphStyle {
                left_indent_cm: Some(1.0),
                line_spacing: Some(self.styles.line_spacing),
                space_after_pt: Some(3.0),
                ..Default::default()
            };
            self.doc.add_block(Block::Paragraph(p));
        }
        self
    }

    /// Captioned table: caption paragraph ABOVE the grid, caption number
    /// as a `SEQ` directive scoped to tables. The counter restarts when
    /// `chapter` differs from the previous table's chapter.
    pub fn captioned_table(
        &mut self,
        chapter: u32,
        caption: &str,
        headers: &[&str],
        rows: &[&[&str]],
        widths_cm: Option<&[f32]>,
    ) -> &mut Self {
        let reset = self.table_chapter != Some(chapter);
        self.table_chapter = Some(chapter);
        let label = self.styles.table_label.clone();
        self.caption_paragraph(&label, chapter, "Table", reset, caption, 6.0, 6.0);

        let mut table = Table::new();
        if let Some(widths) = widths_cm {
            table.set_column_widths(widths.to_vec());
        }
        let header_style = TextStyle::bold(self.styles.table_pt);
        table.add_row(TableRow::header(
            headers
                .iter()
                .map(|h| {
                    TableCell::text(*h, header_style.clone(), Alignment::Center)
                        .shaded(self.styles.header_fill.clone())
                })
                .collect(),
        ));
        let cell_style = TextStyle::sized(self.styles.table_pt);
        for row in rows {
            table.add_row(TableRow::new(
                row.iter()
                    .map(|text| TableCell::text(*text, cell_style.clone(), Alignment::Left))
                    .collect(),
            ));
        }
        self.doc.add_block(Block::Table(table));
        self.spacer_after_block();
        self
    }

    /// Shaded-header table without a caption (abbreviation lists, cover
    /// info grids).
    pub fn plain_table(
        &mut self,
        headers: &[&str],
        rows: &[&[&str]],
        widths_cm: Option<&[f32]>,
    ) -> &mut Self {
        let mut table = Table::new();
        if let Some(widths) = widths_cm {
            table.set_column_widths(widths.to_vec());
        }
        let header_style = TextStyle::bold(self.styles.table_pt);
        table.add_row(TableRow::header(
            headers
                .iter()
                .map(|h| {
                    TableCell::text(*h, header_style.clone(), Alignment::Center)
                        .shaded(self.styles.header_fill.clone())
                })
                .collect(),
        ));
        let cell_style = TextStyle::sized(self.styles.table_pt);
        for row in rows {
            table.add_row(TableRow::new(
                row.iter()
                    .map(|text| TableCell::text(*text, cell_style.clone(), Alignment::Left))
                    .collect(),
            ));
        }
        self.doc.add_block(Block::Table(table));
        self.spacer_after_block();
        self
    }

    /// Bordered two-column info grid ("Sinh viên thực hiện : ...") used on
    /// cover pages. Values are prefixed with ": " like the filled-in forms.
    pub fn info_table(&mut self, pairs: &[(&str, &str)], widths_cm: (f32, f32)) -> &mut Self {
        let mut table = Table::new();
        table.set_column_widths(vec![widths_cm.0, widths_cm.1]);
        let style = TextStyle::sized(self.styles.body_pt);
        for (label, value) in pairs {
            table.add_row(TableRow::new(vec![
                TableCell::text(*label, style.clone(), Alignment::Left),
                TableCell::text(format!(": {value}"), style.clone(), Alignment::Left),
            ]));
        }
        self.doc.add_block(Block::Table(table));
        self
    }

    /// Figure placeholder: a gray bracketed insertion mark where the
    /// drawing goes, with the caption BELOW it. The caption number is a
    /// `SEQ` directive scoped to figures.
    pub fn figure_placeholder(&mut self, chapter: u32, caption: &str) -> &mut Self {
        let reset = self.figure_chapter != Some(chapter);
        self.figure_chapter = Some(chapter);

        let mut placeholder = Paragraph::with_run(TextRun::styled(
            self.styles.figure_placeholder.clone(),
            TextStyle::sized(self.styles.body_pt)
                .with_italic(true)
                .with_color(self.styles.placeholder_color.clone()),
        ));
        placeholder.style = ParagraphStyle {
            alignment: Alignment::Center,
            space_before_pt: Some(12.0),
            space_after_pt: Some(6.0),
            ..Default::default()
        };
        self.doc.add_block(Block::Paragraph(placeholder));

        let label = self.styles.figure_label.clone();
        self.caption_paragraph(&label, chapter, "Figure", reset, caption, 6.0, 12.0);
        self
    }

    /// "Bảng 2.<SEQ>. Kế hoạch khảo sát" — the chapter number is literal,
    /// the per-chapter counter is a field the word processor resolves.
    fn caption_paragraph(
        &mut self,
        label: &str,
        chapter: u32,
        scope: &str,
        reset: bool,
        caption: &str,
        before_pt: f32,
        after_pt: f32,
    ) {
        let style = TextStyle::bold_italic(self.styles.caption_pt);
        let mut p = Paragraph::new();
        p.add_run(TextRun::styled(format!("{label} {chapter}."), style.clone()));
        p.add_field(
            FieldCode::Seq {
                scope: scope.to_string(),
                reset,
            },
            style.clone(),
        );
        p.add_run(TextRun::styled(format!(". {caption}"), style));
        p.style = ParagraphStyle {
            alignment: Alignment::Center,
            space_before_pt: Some(before_pt),
            space_after_pt: Some(after_pt),
            ..Default::default()
        };
        self.doc.add_block(Block::Paragraph(p));
    }

    fn spacer_after_block(&mut self) {
        let mut p = Paragraph::new();
        p.style.space_after_pt = Some(6.0);
        self.doc.add_block(Block::Paragraph(p));
    }

    /// Table-of-contents page: heading plus a refresh hint. The outline
    /// itself is built by the word processor from the heading levels.
    pub fn toc_placeholder(&mut self) -> &mut Self {
        self.styled_line(
            "MỤC LỤC",
            LineOptions::default().with_size(14.0).with_bold(true).with_spacing(0.0, 12.0),
        );
        self.refresh_hint();
        self
    }

    /// "DANH MỤC BẢNG BIỂU" page: a caption listing driven by a `TOC \c`
    /// directive over the table scope.
    pub fn list_of_tables(&mut self) -> &mut Self {
        self.caption_listing("DANH MỤC BẢNG BIỂU", "Table")
    }

    /// "DANH MỤC HÌNH VẼ" page over the figure scope.
    pub fn list_of_figures(&mut self) -> &mut Self {
        self.caption_listing("DANH MỤC HÌNH VẼ", "Figure")
    }

    fn caption_listing(&mut self, title: &str, scope: &str) -> &mut Self {
        self.styled_line(
            title,
            LineOptions::default().with_size(14.0).with_bold(true).with_spacing(0.0, 12.0),
        );
        let mut p = Paragraph::new();
        p.add_field(
            FieldCode::TocOf {
                scope: scope.to_string(),
            },
            TextStyle::sized(self.styles.body_pt),
        );
        self.doc.add_block(Block::Paragraph(p));
        self.refresh_hint();
        self
    }

    fn refresh_hint(&mut self) {
        let mut p = Paragraph::with_run(TextRun::styled(
            "(Bấm Ctrl+A rồi F9 trong Word để cập nhật danh mục)",
            TextStyle::sized(11.0)
                .with_italic(true)
                .with_color(self.styles.placeholder_color.clone()),
        ));
        p.style.alignment = Alignment::Center;
        p.style.space_before_pt = Some(6.0);
        self.doc.add_block(Block::Paragraph(p));
    }

    /// One centered line at body size.
    pub fn centered_line(&mut self, text: &str) -> &mut Self {
        self.styled_line(text, LineOptions::default())
    }

    /// One line with explicit options (cover pages are built from these).
    pub fn styled_line(&mut self, text: &str, options: LineOptions) -> &mut Self {
        let mut p = Paragraph::with_run(TextRun::styled(text, options.text_style()));
        p.style = ParagraphStyle {
            alignment: options.alignment,
            space_before_pt: Some(options.space_before_pt),
            space_after_pt: Some(options.space_after_pt),
            ..Default::default()
        };
        self.doc.add_block(Block::Paragraph(p));
        self
    }

    /// "Label<tab>: value" lines (student name, class, supervisor).
    pub fn labeled_value_lines(&mut self, pairs: &[(&str, &str)]) -> &mut Self {
        for (label, value) in pairs {
            let mut p = Paragraph::new();
            p.add_run(TextRun::new(*label));
            p.add_tab();
            p.add_run(TextRun::new(format!(": {value}")));
            p.style = ParagraphStyle {
                alignment: Alignment::Left,
                left_indent_cm: Some(2.0),
                line_spacing: Some(self.styles.line_spacing),
                ..Default::default()
            };
            self.doc.add_block(Block::Paragraph(p));
        }
        self
    }

    /// Institutional logo, scaled to `width_cm` with the aspect ratio
    /// taken from the PNG header. A missing or unreadable asset degrades
    /// to a gray bracketed placeholder; generation never fails over a
    /// decorative image.
    pub fn logo(&mut self, path: impl AsRef<Path>, width_cm: f32) -> &mut Self {
        let path = path.as_ref();
        match std::fs::read(path).map_err(crate::error::Error::from).and_then(|data| {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("logo")
                .to_string();
            Resource::png(stem, data)
        }) {
            Ok(resource) => {
                let id = resource.id.clone();
                self.doc.add_resource(resource);
                let mut p = Paragraph::new();
                p.add_image(id, width_cm);
                p.style.alignment = Alignment::Center;
                p.style.space_after_pt = Some(6.0);
                self.doc.add_block(Block::Paragraph(p));
            }
            Err(err) => {
                log::warn!("logo {} unavailable ({err}), using placeholder", path.display());
                let mut p = Paragraph::with_run(TextRun::styled(
                    self.styles.logo_placeholder.clone(),
                    TextStyle::bold(self.styles.body_pt)
                        .with_color(self.styles.placeholder_color.clone()),
                ));
                p.style.alignment = Alignment::Center;
                p.style.space_after_pt = Some(6.0);
                self.doc.add_block(Block::Paragraph(p));
            }
        }
        self
    }

    /// Side-by-side signature block: bold titles over the italic
    /// "(Ký và ghi rõ họ tên)" note, in a borderless grid.
    pub fn signature_block(&mut self, titles: &[&str]) -> &mut Self {
        self.empty_line().empty_line();

        let mut table = Table::borderless();
        table.add_row(TableRow::new(
            titles
                .iter()
                .map(|t| TableCell::text(*t, TextStyle::bold(12.0), Alignment::Center))
                .collect(),
        ));
        table.add_row(TableRow::new(
            titles
                .iter()
                .map(|_| {
                    TableCell::text(
                        "(Ký và ghi rõ họ tên)",
                        TextStyle::sized(11.0).with_italic(true),
                        Alignment::Center,
                    )
                })
                .collect(),
        ));
        self.doc.add_block(Block::Table(table));
        self
    }

    /// Finish building and take the content tree.
    pub fn finish(self) -> DocumentTree {
        self.doc
    }

    /// Peek at the tree while building (tests, JSON dumps).
    pub fn document(&self) -> &DocumentTree {
        &self.doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InlineContent;

    fn paragraphs(doc: &DocumentTree) -> Vec<&Paragraph> {
        doc.sections
            .iter()
            .flat_map(|s| &s.blocks)
            .filter_map(|b| match b {
                Block::Paragraph(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_chapter_title_uppercased_and_broken() {
        let mut b = ReportBuilder::utc();
        b.chapter_title("Chương 1\nTổng quan", true);
        let doc = b.finish();

        let blocks = &doc.sections[0].blocks;
        assert!(matches!(blocks[0], Block::PageBreak));
        let Block::Paragraph(p) = &blocks[1] else {
            panic!("expected heading paragraph");
        };
        assert_eq!(p.plain_text(), "CHƯƠNG 1\nTỔNG QUAN");
        assert_eq!(p.style.outline_level, Some(1));
        assert_eq!(p.style.alignment, Alignment::Center);
    }

    #[test]
    fn test_heading_levels() {
        let mut b = ReportBuilder::utc();
        b.section_title("1.1 Phạm vi").subsection_title("1.1.1 Đối tượng");
        let doc = b.finish();
        let ps = paragraphs(&doc);
        assert_eq!(ps[0].style.outline_level, Some(2));
        assert_eq!(ps[1].style.outline_level, Some(3));
        assert!(matches!(&ps[0].content[0], InlineContent::Text(r) if r.style.bold));
    }

    #[test]
    fn test_body_paragraph_indent() {
        let mut b = ReportBuilder::utc();
        b.body_paragraph("Nội dung chính.").body_paragraph_flush("Tiếp theo.");
        let doc = b.finish();
        let ps = paragraphs(&doc);
        assert_eq!(ps[0].style.first_line_indent_cm, Some(1.0));
        assert_eq!(ps[0].style.line_spacing, Some(1.2));
        assert_eq!(ps[1].style.first_line_indent_cm, None);
    }

    #[test]
    fn test_caption_precedes_table() {
        let mut b = ReportBuilder::utc();
        b.captioned_table(2, "Kế hoạch khảo sát", &["Tuần", "Việc"], &[&["1", "Pilot"]], None);
        let doc = b.finish();

        let blocks = &doc.sections[0].blocks;
        let Block::Paragraph(caption) = &blocks[0] else {
            panic!("caption must come first");
        };
        assert_eq!(caption.plain_text(), "Bảng 2.. Kế hoạch khảo sát");
        assert!(blocks[1].is_table());
    }

    #[test]
    fn test_table_seq_resets_on_new_chapter() {
        let mut b = ReportBuilder::utc();
        b.captioned_table(1, "a", &["h"], &[], None);
        b.captioned_table(1, "b", &["h"], &[], None);
        b.captioned_table(2, "c", &["h"], &[], None);
        let doc = b.finish();

        let resets: Vec<bool> = paragraphs(&doc)
            .iter()
            .flat_map(|p| &p.content)
            .filter_map(|c| match c {
                InlineContent::Field {
                    code: FieldCode::Seq { reset, .. },
                    ..
                } => Some(*reset),
                _ => None,
            })
            .collect();
        assert_eq!(resets, vec![true, false, true]);
    }

    #[test]
    fn test_table_header_shaded() {
        let mut b = ReportBuilder::utc();
        b.captioned_table(1, "a", &["Tuần", "Việc"], &[&["1", "Pilot"]], None);
        let doc = b.finish();

        let table = doc.sections[0]
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Table(t) => Some(t),
                _ => None,
            })
            .unwrap();
        assert_eq!(table.header_rows().count(), 1);
        for cell in &table.rows[0].cells {
            assert_eq!(cell.shading.as_deref(), Some("D9E2F3"));
        }
        assert!(table.rows[1].cells.iter().all(|c| c.shading.is_none()));
    }

    #[test]
    fn test_figure_caption_below_placeholder() {
        let mut b = ReportBuilder::utc();
        b.figure_placeholder(3, "Sơ đồ hệ thống");
        let doc = b.finish();

        let ps = paragraphs(&doc);
        assert_eq!(ps[0].plain_text(), "[Chèn hình vẽ tại đây]");
        assert!(matches!(
            &ps[0].content[0],
            InlineContent::Text(r) if r.style.color.as_deref() == Some("808080")
        ));
        assert_eq!(ps[1].plain_text(), "Hình 3.. Sơ đồ hệ thống");
    }

    #[test]
    fn test_separate_seq_scopes() {
        let mut b = ReportBuilder::utc();
        b.captioned_table(1, "t", &["h"], &[], None);
        b.figure_placeholder(1, "f");
        let doc = b.finish();

        let scopes: Vec<String> = paragraphs(&doc)
            .iter()
            .flat_map(|p| &p.content)
            .filter_map(|c| match c {
                InlineContent::Field {
                    code: FieldCode::Seq { scope, .. },
                    ..
                } => Some(scope.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(scopes, vec!["Table".to_string(), "Figure".to_string()]);
    }

    #[test]
    fn test_missing_logo_degrades_to_placeholder() {
        let mut b = ReportBuilder::utc();
        b.logo("/nonexistent/logo.png", 3.5);
        let doc = b.finish();

        assert!(doc.resources.is_empty());
        assert_eq!(doc.plain_text(), "[LOGO TRƯỜNG]");
    }

    #[test]
    fn test_margins_overwrite_not_accumulate() {
        let mut b = ReportBuilder::utc();
        b.set_margins(Margins::new(2.0, 2.0, 2.0, 2.0));
        b.set_margins(Margins::new(2.5, 2.5, 3.0, 2.0));
        let doc = b.finish();
        assert_eq!(doc.margins, Some(Margins::new(2.5, 2.5, 3.0, 2.0)));
    }

    #[test]
    fn test_signature_block_borderless() {
        let mut b = ReportBuilder::utc();
        b.signature_block(&["GIÁO VIÊN HƯỚNG DẪN", "SINH VIÊN THỰC HIỆN"]);
        let doc = b.finish();

        let table = doc.sections[0]
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Table(t) => Some(t),
                _ => None,
            })
            .unwrap();
        assert!(table.borderless);
        assert_eq!(table.column_count(), 2);
        assert!(table.plain_text().contains("(Ký và ghi rõ họ tên)"));
    }

    #[test]
    fn test_numbered_list_literal_prefixes() {
        let mut b = ReportBuilder::utc();
        b.numbered_list(&["Nielsen, J.", "ISO 9241-11"]);
        let doc = b.finish();
        let ps = paragraphs(&doc);
        assert_eq!(ps[0].plain_text(), "1. Nielsen, J.");
        assert_eq!(ps[1].plain_text(), "2. ISO 9241-11");
        assert!(!ps[0].style.bullet);
    }

    #[test]
    fn test_bullet_list_hanging() {
        let mut b = ReportBuilder::utc();
        b.bullet_list(&["một", "hai"]);
        let doc = b.finish();
        let ps = paragraphs(&doc);
        assert_eq!(ps.len(), 2);
        assert!(ps[0].style.bullet);
        assert_eq!(ps[0].style.left_indent_cm, Some(1.5));
        assert_eq!(ps[0].style.first_line_indent_cm, Some(-0.5));
    }
}
