//! End-to-end tests over produced `.docx` packages: build a report with
//! the public API, reopen the zip, and assert on the emitted markup.

use std::io::{Cursor, Read};

use docforge::{Margins, ReportBuilder, StyleSheet};

fn document_xml(bytes: &[u8]) -> String {
    read_part(bytes, "word/document.xml")
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut out = String::new();
    file.read_to_string(&mut out).unwrap();
    out
}

fn render(build: impl FnOnce(&mut ReportBuilder)) -> String {
    let mut report = ReportBuilder::utc();
    build(&mut report);
    let bytes = docforge::package_bytes(&report.finish(), &StyleSheet::utc()).unwrap();
    document_xml(&bytes)
}

#[test]
fn caption_precedes_its_table() {
    let xml = render(|r| {
        r.captioned_table(
            2,
            "Kế hoạch khảo sát",
            &["Tuần", "Hoạt động"],
            &[&["1", "Pilot test"]],
            None,
        );
    });

    let caption = xml.find("Kế hoạch khảo sát").unwrap();
    let table = xml.find("<w:tbl>").unwrap();
    assert!(caption < table, "caption must be emitted before the grid");
    // Caption number is a field in the Table scope, 12pt bold italic.
    assert!(xml.contains(" SEQ Table \\* ARABIC"));
    let seq = xml.find(" SEQ Table").unwrap();
    assert!(caption < seq && seq < table);
}

#[test]
fn figure_caption_follows_placeholder() {
    let xml = render(|r| {
        r.figure_placeholder(3, "Sơ đồ kiến trúc hệ thống");
    });

    let placeholder = xml.find("[Chèn hình vẽ tại đây]").unwrap();
    let caption = xml.find("Sơ đồ kiến trúc hệ thống").unwrap();
    assert!(placeholder < caption, "figure caption sits below the placeholder");
    assert!(xml.contains(" SEQ Figure \\* ARABIC"));
    // Placeholder run is gray italic.
    let run_end = xml[placeholder..].find("</w:r>").unwrap() + placeholder;
    let run_start = xml[..placeholder].rfind("<w:r>").unwrap();
    let run = &xml[run_start..run_end];
    assert!(run.contains(r#"<w:color w:val="808080"/>"#));
    assert!(run.contains("<w:i/>"));
}

#[test]
fn seq_scopes_never_mix() {
    let xml = render(|r| {
        r.captioned_table(1, "bảng", &["h"], &[], None)
            .figure_placeholder(1, "hình");
    });

    assert_eq!(xml.matches(" SEQ Table").count(), 1);
    assert_eq!(xml.matches(" SEQ Figure").count(), 1);
    // No precomputed caption number: the only literal digit in a caption
    // is the refresh placeholder "1" inside the field result runs.
    assert!(!xml.contains("Bảng 1.1"));
    assert!(!xml.contains("Hình 1.1"));
}

#[test]
fn margins_overwrite_idempotently() {
    let xml = render(|r| {
        r.set_margins(Margins::new(2.0, 2.0, 2.0, 2.0));
        r.set_margins(Margins::new(2.5, 2.5, 3.0, 2.0));
        r.begin_section(true);
        r.body_paragraph("bìa");
        r.begin_section(false);
        r.body_paragraph("nội dung");
    });

    // Every pgMar carries only the values of the LAST set_margins call.
    let expected =
        r#"<w:pgMar w:top="1418" w:right="1134" w:bottom="1418" w:left="1701" w:header="708" w:footer="708" w:gutter="0"/>"#;
    let pg_mars = xml.matches("<w:pgMar").count();
    assert!(pg_mars >= 2);
    assert_eq!(xml.matches(expected).count(), pg_mars);
    assert!(!xml.contains(r#"w:top="1134""#)); // 2.0cm top never survives
}

#[test]
fn missing_logo_still_generates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("BAO_CAO.docx");

    let mut report = ReportBuilder::utc();
    report
        .logo(dir.path().join("no_such_logo.png"), 3.5)
        .chapter_title("Mở đầu", false)
        .body_paragraph("Nội dung.");
    docforge::save(&report.finish(), &StyleSheet::utc(), &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(!bytes.is_empty());
    assert!(document_xml(&bytes).contains("[LOGO TRƯỜNG]"));
}

#[test]
fn table_shading_confined_to_header_row() {
    let xml = render(|r| {
        r.captioned_table(
            1,
            "Thống kê",
            &["STT", "Hạng mục", "Số lượng"],
            &[&["1", "Phiếu hợp lệ", "128"], &["2", "Phiếu loại", "7"]],
            None,
        );
    });

    // 3 header cells shaded, 3 rows total.
    assert_eq!(xml.matches("<w:shd ").count(), 3);
    assert_eq!(xml.matches(r#"w:fill="D9E2F3""#).count(), 3);
    assert_eq!(xml.matches("<w:tr>").count(), 3);
    // Header text is bold; body cells are not.
    let header_cell = xml.find("STT").unwrap();
    let row_start = xml[..header_cell].rfind("<w:tr>").unwrap();
    let row_end = xml[header_cell..].find("</w:tr>").unwrap() + header_cell;
    assert_eq!(xml[row_start..row_end].matches("<w:b/>").count(), 3);
}

#[test]
fn chapter_page_break_precedes_heading() {
    let xml = render(|r| {
        r.body_paragraph("Lời nói đầu.");
        r.chapter_title("Mở đầu", true);
    });

    assert_eq!(xml.matches(r#"<w:br w:type="page"/>"#).count(), 1);
    let page_break = xml.find(r#"<w:br w:type="page"/>"#).unwrap();
    let heading = xml.find("MỞ ĐẦU").unwrap();
    assert!(page_break < heading);
    // Upper-cased, centered, outline level 1 via the heading style.
    let p_start = xml[..heading].rfind("<w:p>").unwrap();
    let p = &xml[p_start..heading];
    assert!(p.contains(r#"<w:pStyle w:val="Heading1"/>"#));
    assert!(p.contains(r#"<w:jc w:val="center"/>"#));
    assert!(!xml.contains("Mở đầu</w:t>"));
}

#[test]
fn page_number_header_is_a_field() {
    let mut report = ReportBuilder::utc();
    report.page_number_header().body_paragraph("x");
    let bytes = docforge::package_bytes(&report.finish(), &StyleSheet::utc()).unwrap();

    let header = read_part(&bytes, "word/header1.xml");
    assert!(header.contains(">PAGE</w:instrText>"));
    assert!(header.contains(r#"<w:jc w:val="center"/>"#));
    assert!(document_xml(&bytes).contains(r#"<w:headerReference w:type="default" r:id="rId3"/>"#));
}

#[test]
fn caption_listings_use_toc_fields() {
    let xml = render(|r| {
        r.list_of_tables().list_of_figures();
    });

    assert!(xml.contains("DANH MỤC BẢNG BIỂU"));
    assert!(xml.contains("DANH MỤC HÌNH VẼ"));
    assert!(xml.contains(r#"TOC \h \z \c &quot;Table&quot;"#));
    assert!(xml.contains(r#"TOC \h \z \c &quot;Figure&quot;"#));
}

#[test]
fn body_style_conformance() {
    let xml = render(|r| {
        r.body_paragraph("Đề tài tập trung khảo sát trải nghiệm người dùng.");
    });

    // 13pt justified, 1.2 spacing, 1cm first-line indent.
    assert!(xml.contains(r#"<w:jc w:val="both"/>"#));
    assert!(xml.contains(r#"<w:sz w:val="26"/>"#));
    assert!(xml.contains(r#"w:line="288" w:lineRule="auto""#));
    assert!(xml.contains(r#"<w:ind w:firstLine="567"/>"#));
}

#[test]
fn signature_block_has_no_borders() {
    let xml = render(|r| {
        r.signature_block(&["GIÁO VIÊN HƯỚNG DẪN", "SINH VIÊN THỰC HIỆN"]);
    });

    assert!(xml.contains("(Ký và ghi rõ họ tên)"));
    assert_eq!(xml.matches(r#"<w:top w:val="nil"/>"#).count(), 4);
    assert!(!xml.contains(r#"<w:tblStyle w:val="TableGrid"/>"#));
}
