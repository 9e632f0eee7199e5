//! OPC packaging: assembles the rendered parts into a `.docx` zip.
//!
//! Part names and relationship IDs are fixed. The document part always
//! points at the styles part with `rId1` and the numbering part with
//! `rId2`; the page header, when enabled, is `rId3`. Image relationships
//! derive their IDs from the resource ID so the renderer and the packager
//! never have to coordinate through shared state.

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::model::{DocumentTree, Metadata};
use crate::render::docx::{image_rel_id, DocxRenderer, RID_HEADER, RID_NUMBERING, RID_STYLES};
use crate::render::xml::escape;
use crate::style::{pt_to_half_points, spacing_to_line, StyleSheet};

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const DOC_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const CORE_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const APP_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const STYLES_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
const NUMBERING_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
const HEADER_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/header";
const IMAGE_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// Render a document tree and return the finished package bytes.
pub fn package_bytes(doc: &DocumentTree, styles: &StyleSheet) -> Result<Vec<u8>> {
    let renderer = DocxRenderer::new(styles);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let mut write_part = |zip: &mut ZipWriter<Cursor<Vec<u8>>>, name: &str, data: &[u8]| -> Result<()> {
        zip.start_file(name, options)?;
        zip.write_all(data)?;
        Ok(())
    };

    write_part(&mut zip, "[Content_Types].xml", content_types_xml(doc).as_bytes())?;
    write_part(&mut zip, "_rels/.rels", root_rels_xml().as_bytes())?;
    write_part(&mut zip, "docProps/core.xml", core_props_xml(&doc.metadata).as_bytes())?;
    write_part(&mut zip, "docProps/app.xml", app_props_xml().as_bytes())?;
    write_part(&mut zip, "word/document.xml", renderer.document_xml(doc).as_bytes())?;
    write_part(&mut zip, "word/_rels/document.xml.rels", document_rels_xml(doc).as_bytes())?;
    write_part(&mut zip, "word/styles.xml", styles_xml(styles).as_bytes())?;
    write_part(&mut zip, "word/numbering.xml", numbering_xml(styles).as_bytes())?;
    if doc.page_number_header {
        write_part(&mut zip, "word/header1.xml", renderer.header_xml().as_bytes())?;
    }
    for resource in doc.resources.values() {
        let name = format!("word/media/{}.{}", resource.id, resource.kind.extension());
        write_part(&mut zip, &name, &resource.data)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Render and write the package to `path`, creating parent directories.
pub fn save(doc: &DocumentTree, styles: &StyleSheet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let bytes = package_bytes(doc, styles)?;
    fs::write(path, &bytes)?;
    log::debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

fn content_types_xml(doc: &DocumentTree) -> String {
    let mut overrides = String::new();
    let mut push_override = |part: &str, content_type: &str| {
        overrides.push_str(&format!(
            r#"<Override PartName="{part}" ContentType="{content_type}"/>"#
        ));
    };
    push_override(
        "/word/document.xml",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
    );
    push_override(
        "/word/styles.xml",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
    );
    push_override(
        "/word/numbering.xml",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml",
    );
    if doc.page_number_header {
        push_override(
            "/word/header1.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml",
        );
    }
    push_override(
        "/docProps/core.xml",
        "application/vnd.openxmlformats-package.core-properties+xml",
    );
    push_override(
        "/docProps/app.xml",
        "application/vnd.openxmlformats-officedocument.extended-properties+xml",
    );

    format!(
        concat!(
            "{decl}",
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>"#,
            r#"<Default Extension="png" ContentType="image/png"/>"#,
            "{overrides}",
            "</Types>",
        ),
        decl = XML_DECL,
        overrides = overrides,
    )
}

fn root_rels_xml() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<Relationships xmlns="{ns}">"#,
            r#"<Relationship Id="rId1" Type="{doc}" Target="word/document.xml"/>"#,
            r#"<Relationship Id="rId2" Type="{core}" Target="docProps/core.xml"/>"#,
            r#"<Relationship Id="rId3" Type="{app}" Target="docProps/app.xml"/>"#,
            "</Relationships>",
        ),
        decl = XML_DECL,
        ns = REL_NS,
        doc = DOC_REL_TYPE,
        core = CORE_REL_TYPE,
        app = APP_REL_TYPE,
    )
}

fn document_rels_xml(doc: &DocumentTree) -> String {
    let mut rels = String::new();
    let mut push_rel = |id: &str, rel_type: &str, target: &str| {
        rels.push_str(&format!(
            r#"<Relationship Id="{id}" Type="{rel_type}" Target="{target}"/>"#
        ));
    };
    push_rel(RID_STYLES, STYLES_REL_TYPE, "styles.xml");
    push_rel(RID_NUMBERING, NUMBERING_REL_TYPE, "numbering.xml");
    if doc.page_number_header {
        push_rel(RID_HEADER, HEADER_REL_TYPE, "header1.xml");
    }
    for resource in doc.resources.values() {
        let target = format!("media/{}.{}", resource.id, resource.kind.extension());
        push_rel(&image_rel_id(&resource.id), IMAGE_REL_TYPE, &target);
    }

    format!(
        "{XML_DECL}<Relationships xmlns=\"{REL_NS}\">{rels}</Relationships>"
    )
}

/// The styles part. Every style spells out its fonts, size and color so
/// the document renders identically with any theme the viewer carries.
fn styles_xml(styles: &StyleSheet) -> String {
    let font = escape(&styles.font_name);
    let body_sz = pt_to_half_points(styles.body_pt);
    let line = spacing_to_line(styles.line_spacing);

    let run_fonts = format!(
        r#"<w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:eastAsia="{font}" w:cs="{font}"/>"#
    );
    let heading = |id: u8, size_pt: f32| {
        let sz = pt_to_half_points(size_pt);
        format!(
            concat!(
                r#"<w:style w:type="paragraph" w:styleId="Heading{id}">"#,
                r#"<w:name w:val="heading {id}"/>"#,
                r#"<w:basedOn w:val="Normal"/>"#,
                r#"<w:next w:val="Normal"/>"#,
                r#"<w:pPr><w:keepNext/><w:outlineLvl w:val="{lvl}"/></w:pPr>"#,
                r#"<w:rPr>{fonts}<w:b/><w:color w:val="000000"/><w:sz w:val="{sz}"/><w:szCs w:val="{sz}"/></w:rPr>"#,
                "</w:style>",
            ),
            id = id,
            lvl = id - 1,
            fonts = run_fonts,
            sz = sz,
        )
    };

    format!(
        concat!(
            "{decl}",
            r#"<w:styles xmlns:w="{ns}">"#,
            "<w:docDefaults><w:rPrDefault><w:rPr>",
            r#"{fonts}<w:sz w:val="{body_sz}"/><w:szCs w:val="{body_sz}"/><w:lang w:val="vi-VN"/>"#,
            "</w:rPr></w:rPrDefault></w:docDefaults>",
            r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#,
            r#"<w:name w:val="Normal"/>"#,
            r#"<w:pPr><w:spacing w:after="0" w:line="{line}" w:lineRule="auto"/><w:jc w:val="both"/></w:pPr>"#,
            r#"<w:rPr>{fonts}<w:color w:val="000000"/><w:sz w:val="{body_sz}"/><w:szCs w:val="{body_sz}"/></w:rPr>"#,
            "</w:style>",
            "{heading1}{heading2}{heading3}",
            r#"<w:style w:type="table" w:styleId="TableGrid">"#,
            r#"<w:name w:val="Table Grid"/>"#,
            "<w:tblPr><w:tblBorders>",
            r#"<w:top w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
            r#"<w:left w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
            r#"<w:bottom w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
            r#"<w:right w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
            r#"<w:insideH w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
            r#"<w:insideV w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
            "</w:tblBorders></w:tblPr>",
            "</w:style>",
            "</w:styles>",
        ),
        decl = XML_DECL,
        ns = WORDML_NS,
        fonts = run_fonts,
        body_sz = body_sz,
        line = line,
        heading1 = heading(1, styles.chapter_pt),
        heading2 = heading(2, styles.section_pt),
        heading3 = heading(3, styles.subsection_pt),
    )
}

/// The numbering part: a single bullet definition (`numId` 1) used by
/// every bulleted list item.
fn numbering_xml(styles: &StyleSheet) -> String {
    let left = crate::style::cm_to_twips(styles.list_indent_cm);
    let hanging = crate::style::cm_to_twips(styles.list_hanging_cm);
    format!(
        concat!(
            "{decl}",
            r#"<w:numbering xmlns:w="{ns}">"#,
            r#"<w:abstractNum w:abstractNumId="0">"#,
            r#"<w:multiLevelType w:val="singleLevel"/>"#,
            r#"<w:lvl w:ilvl="0">"#,
            r#"<w:start w:val="1"/>"#,
            r#"<w:numFmt w:val="bullet"/>"#,
            "<w:lvlText w:val=\"\u{F0B7}\"/>",
            r#"<w:lvlJc w:val="left"/>"#,
            r#"<w:pPr><w:ind w:left="{left}" w:hanging="{hanging}"/></w:pPr>"#,
            r#"<w:rPr><w:rFonts w:ascii="Symbol" w:hAnsi="Symbol"/></w:rPr>"#,
            "</w:lvl>",
            "</w:abstractNum>",
            r#"<w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>"#,
            "</w:numbering>",
        ),
        decl = XML_DECL,
        ns = WORDML_NS,
        left = left,
        hanging = hanging,
    )
}

fn core_props_xml(metadata: &Metadata) -> String {
    let mut fields = String::new();
    if let Some(title) = &metadata.title {
        fields.push_str(&format!("<dc:title>{}</dc:title>", escape(title)));
    }
    if let Some(subject) = &metadata.subject {
        fields.push_str(&format!("<dc:subject>{}</dc:subject>", escape(subject)));
    }
    if let Some(author) = &metadata.author {
        fields.push_str(&format!("<dc:creator>{}</dc:creator>", escape(author)));
        fields.push_str(&format!(
            "<cp:lastModifiedBy>{}</cp:lastModifiedBy>",
            escape(author)
        ));
    }
    if let Some(created) = &metadata.created {
        fields.push_str(&format!(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
            created.format("%Y-%m-%dT%H:%M:%SZ")
        ));
    }
    if let Some(modified) = &metadata.modified {
        fields.push_str(&format!(
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
            modified.format("%Y-%m-%dT%H:%M:%SZ")
        ));
    }

    format!(
        concat!(
            "{decl}",
            "<cp:coreProperties",
            r#" xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties""#,
            r#" xmlns:dc="http://purl.org/dc/elements/1.1/""#,
            r#" xmlns:dcterms="http://purl.org/dc/terms/""#,
            r#" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "{fields}",
            "</cp:coreProperties>",
        ),
        decl = XML_DECL,
        fields = fields,
    )
}

fn app_props_xml() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">"#,
            "<Application>{name}</Application>",
            "<AppVersion>{version}</AppVersion>",
            "</Properties>",
        ),
        decl = XML_DECL,
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Paragraph, Resource, TextRun};
    use std::io::Read;

    fn part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut out = String::new();
        file.read_to_string(&mut out).unwrap();
        out
    }

    fn sample_doc() -> DocumentTree {
        let mut doc = DocumentTree::new();
        doc.metadata = Metadata::titled("Báo cáo", "Sinh viên");
        doc.add_block(Block::Paragraph(Paragraph::with_run(TextRun::new("nội dung"))));
        doc
    }

    #[test]
    fn test_package_has_required_parts() {
        let bytes = package_bytes(&sample_doc(), &StyleSheet::utc()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/_rels/document.xml.rels",
            "word/styles.xml",
            "word/numbering.xml",
            "docProps/core.xml",
            "docProps/app.xml",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part {name}");
        }
    }

    #[test]
    fn test_header_part_only_when_enabled() {
        let styles = StyleSheet::utc();

        let plain = package_bytes(&sample_doc(), &styles).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(plain)).unwrap();
        assert!(archive.by_name("word/header1.xml").is_err());

        let mut doc = sample_doc();
        doc.page_number_header = true;
        let bytes = package_bytes(&doc, &styles).unwrap();
        assert!(part(&bytes, "word/header1.xml").contains(">PAGE</w:instrText>"));
        assert!(part(&bytes, "word/_rels/document.xml.rels").contains("header1.xml"));
        assert!(part(&bytes, "[Content_Types].xml").contains("/word/header1.xml"));
    }

    #[test]
    fn test_core_props_carry_metadata() {
        let bytes = package_bytes(&sample_doc(), &StyleSheet::utc()).unwrap();
        let core = part(&bytes, "docProps/core.xml");
        assert!(core.contains("<dc:title>Báo cáo</dc:title>"));
        assert!(core.contains("<dc:creator>Sinh viên</dc:creator>"));
        assert!(core.contains(r#"xsi:type="dcterms:W3CDTF""#));
    }

    #[test]
    fn test_image_part_and_relationship() {
        let mut png = vec![0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];
        png.extend_from_slice(&13u32.to_be_bytes());
        png.extend_from_slice(b"IHDR");
        png.extend_from_slice(&400u32.to_be_bytes());
        png.extend_from_slice(&200u32.to_be_bytes());
        png.extend_from_slice(&[8, 6, 0, 0, 0]);

        let mut doc = sample_doc();
        doc.add_resource(Resource::png("logo", png).unwrap());
        let mut p = Paragraph::new();
        p.add_image("logo", 3.5);
        doc.add_block(Block::Paragraph(p));

        let bytes = package_bytes(&doc, &StyleSheet::utc()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.clone())).unwrap();
        assert!(archive.by_name("word/media/logo.png").is_ok());
        let rels = part(&bytes, "word/_rels/document.xml.rels");
        assert!(rels.contains(r#"Id="rImglogo""#));
        assert!(rels.contains(r#"Target="media/logo.png""#));
        assert!(part(&bytes, "word/document.xml").contains(r#"r:embed="rImglogo""#));
    }

    #[test]
    fn test_styles_are_dethemed() {
        let bytes = package_bytes(&sample_doc(), &StyleSheet::utc()).unwrap();
        let styles = part(&bytes, "word/styles.xml");
        assert!(styles.contains(r#"w:styleId="Heading1""#));
        assert!(styles.contains(r#"<w:sz w:val="36"/>"#)); // 18pt chapter
        assert!(!styles.contains("themeFonts"));
        assert!(!styles.contains("asciiTheme"));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/reports/BAO_CAO.docx");
        save(&sample_doc(), &StyleSheet::utc(), &path).unwrap();
        let metadata = fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }
}
