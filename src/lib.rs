//! # docforge
//!
//! Generates university-formatted Vietnamese report documents (`.docx`)
//! from code. A [`builder::ReportBuilder`] assembles a declarative
//! content tree under an explicit [`style::StyleSheet`]; the render
//! layer turns the tree into WordprocessingML and packages it as an OPC
//! container.
//!
//! Caption numbers, the page number and the caption listings are written
//! as self-updating field directives, never as precomputed values, so
//! the numbering stays correct after the document is edited by hand.
//!
//! ```no_run
//! use docforge::{ReportBuilder, StyleSheet};
//!
//! let mut report = ReportBuilder::new(StyleSheet::utc());
//! report
//!     .page_number_header()
//!     .chapter_title("Mở đầu", false)
//!     .body_paragraph("Đề tài khảo sát trải nghiệm người dùng...")
//!     .captioned_table(
//!         1,
//!         "Kế hoạch thực hiện",
//!         &["Tuần", "Nội dung"],
//!         &[&["1", "Khảo sát sơ bộ"]],
//!         None,
//!     );
//! docforge::save(&report.finish(), &StyleSheet::utc(), "BAO_CAO.docx")?;
//! # Ok::<(), docforge::Error>(())
//! ```

pub mod builder;
pub mod error;
pub mod model;
pub mod render;
pub mod style;

pub use builder::{LineOptions, ReportBuilder};
pub use error::{Error, Result};
pub use model::{DocumentTree, Metadata};
pub use style::{Margins, StyleSheet};

use std::path::Path;

/// Render a content tree and write the `.docx` package to `path`.
pub fn save(doc: &DocumentTree, styles: &StyleSheet, path: impl AsRef<Path>) -> Result<()> {
    render::package::save(doc, styles, path)
}

/// Render a content tree into `.docx` package bytes.
pub fn package_bytes(doc: &DocumentTree, styles: &StyleSheet) -> Result<Vec<u8>> {
    render::package::package_bytes(doc, styles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_bytes() {
        let mut report = ReportBuilder::utc();
        report
            .page_number_header()
            .chapter_title("Mở đầu", false)
            .body_paragraph("Nội dung.");
        let bytes = package_bytes(&report.finish(), &StyleSheet::utc()).unwrap();
        // Zip local file header magic.
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }
}
