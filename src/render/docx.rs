//! WordprocessingML rendering: content tree → `word/document.xml`.
//!
//! The renderer walks the tree section by section and emits markup with
//! every run carrying explicit fonts, size and color. Nothing is left to
//! document-theme inheritance, which is what guarantees the prescribed
//! Times-New-Roman rendering regardless of the viewer's theme.

use std::fmt::Write as _;

use crate::model::{
    Alignment, Block, DocumentTree, FieldCode, InlineContent, Paragraph, Section, Table, TableCell,
    TextStyle,
};
use crate::render::xml::{escape, push_text};
use crate::style::{
    cm_to_emu, cm_to_twips, pt_to_half_points, pt_to_twips, spacing_to_line, Margins, StyleSheet,
};

/// Relationship ID of the styles part inside `word/_rels/document.xml.rels`.
pub(crate) const RID_STYLES: &str = "rId1";
/// Relationship ID of the numbering part.
pub(crate) const RID_NUMBERING: &str = "rId2";
/// Relationship ID of the page header part.
pub(crate) const RID_HEADER: &str = "rId3";

/// Relationship ID of an embedded image, derived from its resource ID.
pub(crate) fn image_rel_id(resource_id: &str) -> String {
    format!("rImg{resource_id}")
}

const DOCUMENT_NS: &str = concat!(
    r#" xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006""#,
    r#" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#,
    r#" xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing""#,
    r#" xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#,
);

/// Renders a [`DocumentTree`] against a [`StyleSheet`].
pub struct DocxRenderer<'a> {
    styles: &'a StyleSheet,
}

impl<'a> DocxRenderer<'a> {
    /// Create a renderer over a formatting profile.
    pub fn new(styles: &'a StyleSheet) -> Self {
        Self { styles }
    }

    /// Render the main document part.
    pub fn document_xml(&self, doc: &DocumentTree) -> String {
        let mut out = String::with_capacity(64 * 1024);
        out.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        out.push_str("<w:document");
        out.push_str(DOCUMENT_NS);
        out.push_str("><w:body>");

        let margins = doc.margins.unwrap_or(self.styles.margins);
        let last = doc.sections.len().saturating_sub(1);
        for (index, section) in doc.sections.iter().enumerate() {
            for block in &section.blocks {
                self.render_block(&mut out, doc, block);
            }
            let sect_pr = self.sect_pr(doc, section, &margins);
            if index == last {
                out.push_str(&sect_pr);
            } else {
                // A section break is a paragraph whose properties carry
                // the closing section's sectPr.
                out.push_str("<w:p><w:pPr>");
                out.push_str(&sect_pr);
                out.push_str("</w:pPr></w:p>");
            }
        }
        if doc.sections.is_empty() {
            out.push_str(&self.sect_pr(doc, &Section::new(), &margins));
        }

        out.push_str("</w:body></w:document>");
        log::debug!("rendered document.xml ({} bytes)", out.len());
        out
    }

    /// Render the page header part with its centered PAGE field.
    pub fn header_xml(&self) -> String {
        let mut out = String::with_capacity(1024);
        out.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        out.push_str("<w:hdr");
        out.push_str(DOCUMENT_NS);
        out.push_str(">");
        out.push_str(r#"<w:p><w:pPr><w:jc w:val="center"/></w:pPr>"#);
        self.render_field(&mut out, &FieldCode::Page, &TextStyle::default());
        out.push_str("</w:p></w:hdr>");
        out
    }

    fn render_block(&self, out: &mut String, doc: &DocumentTree, block: &Block) {
        match block {
            Block::Paragraph(p) => self.render_paragraph(out, doc, p),
            Block::Table(t) => self.render_table(out, doc, t),
            Block::PageBreak => {
                out.push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#);
            }
        }
    }

    fn render_paragraph(&self, out: &mut String, doc: &DocumentTree, para: &Paragraph) {
        out.push_str("<w:p>");
        out.push_str(&self.paragraph_properties(&para.style));
        for item in &para.content {
            match item {
                InlineContent::Text(run) => {
                    out.push_str("<w:r>");
                    out.push_str(&self.run_properties(&run.style));
                    push_text(out, &run.text);
                    out.push_str("</w:r>");
                }
                InlineContent::LineBreak => out.push_str("<w:r><w:br/></w:r>"),
                InlineContent::Tab => out.push_str("<w:r><w:tab/></w:r>"),
                InlineContent::Field { code, style } => self.render_field(out, code, style),
                InlineContent::Image {
                    resource_id,
                    width_cm,
                } => self.render_image(out, doc, resource_id, *width_cm),
            }
        }
        out.push_str("</w:p>");
    }

    /// Emit the five-run field character sequence. The placeholder digit
    /// between `separate` and `end` is what viewers show until the user
    /// refreshes fields; the actual value is never computed here.
    fn render_field(&self, out: &mut String, code: &FieldCode, style: &TextStyle) {
        let r_pr = self.run_properties(style);
        let _ = write!(
            out,
            r#"<w:r>{r_pr}<w:fldChar w:fldCharType="begin"/></w:r>"#
        );
        let _ = write!(
            out,
            r#"<w:r>{r_pr}<w:instrText xml:space="preserve">{}</w:instrText></w:r>"#,
            escape(&code.instruction())
        );
        if let Some(placeholder) = code.placeholder() {
            let _ = write!(
                out,
                r#"<w:r>{r_pr}<w:fldChar w:fldCharType="separate"/></w:r>"#
            );
            let _ = write!(out, "<w:r>{r_pr}<w:t>{placeholder}</w:t></w:r>");
        }
        let _ = write!(out, r#"<w:r>{r_pr}<w:fldChar w:fldCharType="end"/></w:r>"#);
    }

    fn render_image(&self, out: &mut String, doc: &DocumentTree, resource_id: &str, width_cm: f32) {
        let Some(resource) = doc.get_resource(resource_id) else {
            log::warn!("image run references unknown resource {resource_id:?}, skipped");
            return;
        };
        let cx = cm_to_emu(width_cm);
        let cy = cm_to_emu(resource.scaled_height_cm(width_cm));
        let rid = image_rel_id(resource_id);
        let name = escape(resource_id);
        let _ = write!(
            out,
            concat!(
                "<w:r><w:drawing>",
                r#"<wp:inline distT="0" distB="0" distL="0" distR="0">"#,
                r#"<wp:extent cx="{cx}" cy="{cy}"/>"#,
                r#"<wp:effectExtent l="0" t="0" r="0" b="0"/>"#,
                r#"<wp:docPr id="1" name="{name}"/>"#,
                r#"<wp:cNvGraphicFramePr>"#,
                r#"<a:graphicFrameLocks xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" noChangeAspect="1"/>"#,
                r#"</wp:cNvGraphicFramePr>"#,
                r#"<a:graphic xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main">"#,
                r#"<a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture">"#,
                r#"<pic:pic xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture">"#,
                r#"<pic:nvPicPr><pic:cNvPr id="1" name="{name}"/><pic:cNvPicPr/></pic:nvPicPr>"#,
                r#"<pic:blipFill><a:blip r:embed="{rid}"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>"#,
                r#"<pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm>"#,
                r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></pic:spPr>"#,
                "</pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing></w:r>",
            ),
            cx = cx,
            cy = cy,
            rid = rid,
            name = name,
        );
    }

    fn paragraph_properties(&self, style: &crate::model::ParagraphStyle) -> String {
        let mut pr = String::new();

        if let Some(level @ 1..=3) = style.outline_level {
            let _ = write!(pr, r#"<w:pStyle w:val="Heading{level}"/>"#);
        }
        if style.bullet {
            pr.push_str(r#"<w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr>"#);
        }

        let mut spacing = String::new();
        if let Some(before) = style.space_before_pt {
            let _ = write!(spacing, r#" w:before="{}""#, pt_to_twips(before));
        }
        if let Some(after) = style.space_after_pt {
            let _ = write!(spacing, r#" w:after="{}""#, pt_to_twips(after));
        }
        if let Some(line) = style.line_spacing {
            let _ = write!(
                spacing,
                r#" w:line="{}" w:lineRule="auto""#,
                spacing_to_line(line)
            );
        }
        if !spacing.is_empty() {
            let _ = write!(pr, "<w:spacing{spacing}/>");
        }

        let mut ind = String::new();
        if let Some(left) = style.left_indent_cm {
            let _ = write!(ind, r#" w:left="{}""#, cm_to_twips(left));
        }
        match style.first_line_indent_cm {
            Some(cm) if cm < 0.0 => {
                let _ = write!(ind, r#" w:hanging="{}""#, cm_to_twips(-cm));
            }
            Some(cm) => {
                let _ = write!(ind, r#" w:firstLine="{}""#, cm_to_twips(cm));
            }
            None => {}
        }
        if !ind.is_empty() {
            let _ = write!(pr, "<w:ind{ind}/>");
        }

        let _ = write!(pr, r#"<w:jc w:val="{}"/>"#, jc_value(style.alignment));

        if pr.is_empty() {
            String::new()
        } else {
            format!("<w:pPr>{pr}</w:pPr>")
        }
    }

    /// Explicit run properties. Fonts, size and color are ALWAYS written,
    /// falling back to the stylesheet, so no run inherits theme values.
    fn run_properties(&self, style: &TextStyle) -> String {
        let font = style.font_name.as_deref().unwrap_or(&self.styles.font_name);
        let font = escape(font);
        let size = pt_to_half_points(style.size_pt.unwrap_or(self.styles.body_pt));
        let color = style.color.as_deref().unwrap_or("000000");

        let mut pr = String::new();
        let _ = write!(
            pr,
            r#"<w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:eastAsia="{font}" w:cs="{font}"/>"#
        );
        if style.bold {
            pr.push_str("<w:b/>");
        }
        if style.italic {
            pr.push_str("<w:i/>");
        }
        let _ = write!(pr, r#"<w:color w:val="{color}"/>"#);
        let _ = write!(pr, r#"<w:sz w:val="{size}"/><w:szCs w:val="{size}"/>"#);
        if style.underline {
            pr.push_str(r#"<w:u w:val="single"/>"#);
        }
        format!("<w:rPr>{pr}</w:rPr>")
    }

    fn render_table(&self, out: &mut String, doc: &DocumentTree, table: &Table) {
        if table.is_empty() {
            return;
        }
        let columns = table.column_count();
        let widths = self.column_widths_twips(table, doc, columns);

        out.push_str("<w:tbl><w:tblPr>");
        if !table.borderless {
            out.push_str(r#"<w:tblStyle w:val="TableGrid"/>"#);
        }
        out.push_str(r#"<w:tblW w:w="0" w:type="auto"/>"#);
        if table.centered {
            out.push_str(r#"<w:jc w:val="center"/>"#);
        }
        if !table.borderless {
            out.push_str("<w:tblBorders>");
            for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
                let _ = write!(
                    out,
                    r#"<w:{edge} w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#
                );
            }
            out.push_str("</w:tblBorders>");
        }
        out.push_str("</w:tblPr><w:tblGrid>");
        for width in &widths {
            let _ = write!(out, r#"<w:gridCol w:w="{width}"/>"#);
        }
        out.push_str("</w:tblGrid>");

        for row in &table.rows {
            out.push_str("<w:tr>");
            for (column, cell) in row.cells.iter().enumerate() {
                let width = widths.get(column).copied().unwrap_or(0);
                self.render_cell(out, doc, cell, width, table.borderless);
            }
            out.push_str("</w:tr>");
        }
        out.push_str("</w:tbl>");
    }

    fn render_cell(
        &self,
        out: &mut String,
        doc: &DocumentTree,
        cell: &TableCell,
        width_twips: i64,
        borderless: bool,
    ) {
        out.push_str("<w:tc><w:tcPr>");
        let _ = write!(out, r#"<w:tcW w:w="{width_twips}" w:type="dxa"/>"#);
        if borderless {
            out.push_str("<w:tcBorders>");
            for edge in ["top", "left", "bottom", "right"] {
                let _ = write!(out, r#"<w:{edge} w:val="nil"/>"#);
            }
            out.push_str("</w:tcBorders>");
        }
        if let Some(fill) = &cell.shading {
            let _ = write!(
                out,
                r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#,
                escape(fill)
            );
        }
        out.push_str("</w:tcPr>");
        if cell.content.is_empty() {
            out.push_str("<w:p/>");
        } else {
            for paragraph in &cell.content {
                self.render_paragraph(out, doc, paragraph);
            }
        }
        out.push_str("</w:tc>");
    }

    fn column_widths_twips(&self, table: &Table, doc: &DocumentTree, columns: usize) -> Vec<i64> {
        if let Some(widths) = &table.column_widths_cm {
            return widths.iter().map(|cm| cm_to_twips(*cm)).collect();
        }
        let margins = doc.margins.unwrap_or(self.styles.margins);
        let total = self.styles.text_width_twips(&margins);
        let per_column = if columns > 0 {
            total / columns as i64
        } else {
            total
        };
        vec![per_column; columns]
    }

    fn sect_pr(&self, doc: &DocumentTree, section: &Section, margins: &Margins) -> String {
        let mut out = String::new();
        out.push_str("<w:sectPr>");
        if doc.page_number_header {
            let _ = write!(
                out,
                r#"<w:headerReference w:type="default" r:id="{RID_HEADER}"/>"#
            );
        }
        let _ = write!(
            out,
            r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
            self.styles.page_width_twips, self.styles.page_height_twips
        );
        let _ = write!(
            out,
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="708" w:footer="708" w:gutter="0"/>"#,
            cm_to_twips(margins.top_cm),
            cm_to_twips(margins.right_cm),
            cm_to_twips(margins.bottom_cm),
            cm_to_twips(margins.left_cm),
        );
        if section.page_border {
            out.push_str(r#"<w:pgBorders w:offsetFrom="text">"#);
            for edge in ["top", "left", "bottom", "right"] {
                let _ = write!(
                    out,
                    r#"<w:{edge} w:val="single" w:sz="24" w:space="24" w:color="000000"/>"#
                );
            }
            out.push_str("</w:pgBorders>");
        }
        out.push_str(r#"<w:cols w:space="708"/></w:sectPr>"#);
        out
    }
}

fn jc_value(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
        Alignment::Justify => "both",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ParagraphStyle, TextRun};

    fn render(doc: &DocumentTree) -> String {
        DocxRenderer::new(&StyleSheet::utc()).document_xml(doc)
    }

    #[test]
    fn test_runs_carry_explicit_fonts() {
        let mut doc = DocumentTree::new();
        doc.add_block(Block::Paragraph(Paragraph::with_run(TextRun::new("xin chào"))));
        let xml = render(&doc);
        assert!(xml.contains(
            r#"<w:rFonts w:ascii="Times New Roman" w:hAnsi="Times New Roman" w:eastAsia="Times New Roman" w:cs="Times New Roman"/>"#
        ));
        assert!(xml.contains(r#"<w:sz w:val="26"/>"#));
        assert!(xml.contains(r#"<w:color w:val="000000"/>"#));
    }

    #[test]
    fn test_seq_field_has_no_resolved_number() {
        let mut doc = DocumentTree::new();
        let mut p = Paragraph::new();
        p.add_field(
            FieldCode::Seq {
                scope: "Table".to_string(),
                reset: false,
            },
            TextStyle::bold_italic(12.0),
        );
        doc.add_block(Block::Paragraph(p));
        let xml = render(&doc);
        assert!(xml.contains(" SEQ Table \\* ARABIC "));
        assert!(xml.contains(r#"<w:fldChar w:fldCharType="separate"/>"#));
        // Only the placeholder digit appears between separate and end.
        assert!(xml.contains("<w:t>1</w:t>"));
    }

    #[test]
    fn test_hanging_indent() {
        let mut doc = DocumentTree::new();
        let mut p = Paragraph::with_run(TextRun::new("item"));
        p.style = ParagraphStyle {
            left_indent_cm: Some(1.5),
            first_line_indent_cm: Some(-0.5),
            bullet: true,
            ..Default::default()
        };
        doc.add_block(Block::Paragraph(p));
        let xml = render(&doc);
        assert!(xml.contains(r#"<w:ind w:left="851" w:hanging="284"/>"#));
        assert!(xml.contains(r#"<w:numId w:val="1"/>"#));
    }

    #[test]
    fn test_section_break_between_sections() {
        let mut doc = DocumentTree::new();
        doc.begin_section(Section::bordered());
        doc.add_block(Block::Paragraph(Paragraph::with_run(TextRun::new("bìa"))));
        doc.begin_section(Section::new());
        doc.add_block(Block::Paragraph(Paragraph::with_run(TextRun::new("nội dung"))));
        let xml = render(&doc);

        // Two sectPr: one inside the break paragraph, one closing the body.
        assert_eq!(xml.matches("<w:sectPr>").count(), 2);
        // Only the cover section carries the page border.
        assert_eq!(xml.matches("<w:pgBorders").count(), 1);
        let border = xml.find("<w:pgBorders").unwrap();
        let body_sect = xml.rfind("<w:sectPr>").unwrap();
        assert!(border < body_sect);
    }

    #[test]
    fn test_margins_rendered_in_twips() {
        let mut doc = DocumentTree::new();
        doc.add_block(Block::Paragraph(Paragraph::new()));
        doc.margins = Some(Margins::new(2.5, 2.5, 3.0, 2.0));
        let xml = render(&doc);
        assert!(xml.contains(
            r#"<w:pgMar w:top="1418" w:right="1134" w:bottom="1418" w:left="1701" w:header="708" w:footer="708" w:gutter="0"/>"#
        ));
    }

    #[test]
    fn test_header_has_centered_page_field() {
        let stylesheet = StyleSheet::utc();
        let renderer = DocxRenderer::new(&stylesheet);
        let xml = renderer.header_xml();
        assert!(xml.contains(r#"<w:jc w:val="center"/>"#));
        assert!(xml.contains(">PAGE</w:instrText>"));
    }

    #[test]
    fn test_table_equal_widths_when_unspecified() {
        let mut doc = DocumentTree::new();
        let mut table = Table::new();
        table.add_row(crate::model::TableRow::new(vec![
            TableCell::text("a", TextStyle::default(), Alignment::Left),
            TableCell::text("b", TextStyle::default(), Alignment::Left),
        ]));
        doc.add_block(Block::Table(table));
        let xml = render(&doc);
        // (11906 - 1701 - 1134) / 2
        assert!(xml.contains(r#"<w:gridCol w:w="4535"/>"#));
    }
}
