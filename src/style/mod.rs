//! Formatting profiles and measurement conversions.
//!
//! All formatting rules live in an explicit [`StyleSheet`] value that is
//! handed to the builder and the renderer. There is no global style state,
//! so two documents with different university rules can be generated from
//! the same process by constructing two profiles.

use serde::{Deserialize, Serialize};

/// Page margins in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin in cm
    pub top_cm: f32,
    /// Bottom margin in cm
    pub bottom_cm: f32,
    /// Left margin in cm
    pub left_cm: f32,
    /// Right margin in cm
    pub right_cm: f32,
}

impl Margins {
    /// Create margins from centimeter values (top, bottom, left, right).
    pub fn new(top_cm: f32, bottom_cm: f32, left_cm: f32, right_cm: f32) -> Self {
        Self {
            top_cm,
            bottom_cm,
            left_cm,
            right_cm,
        }
    }
}

/// A formatting profile: fonts, sizes, spacing, margins, caption labels.
///
/// [`StyleSheet::utc`] encodes the ĐH GTVT presentation rules the report
/// generators follow. Any run or paragraph that does not override a value
/// falls back to this profile at render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Font family applied to every run (ascii, hAnsi, eastAsia, cs)
    pub font_name: String,

    /// Body paragraph size in points
    pub body_pt: f32,

    /// Chapter heading size in points
    pub chapter_pt: f32,

    /// Section heading (1.1) size in points
    pub section_pt: f32,

    /// Subsection heading (1.1.1) size in points
    pub subsection_pt: f32,

    /// Table cell text size in points
    pub table_pt: f32,

    /// Table/figure caption size in points
    pub caption_pt: f32,

    /// Line spacing multiplier for body text (1.0 = single)
    pub line_spacing: f32,

    /// First-line indent for body paragraphs in cm
    pub first_line_indent_cm: f32,

    /// Left indent for list items in cm
    pub list_indent_cm: f32,

    /// Hanging indent for bullet markers in cm (marker sticks out)
    pub list_hanging_cm: f32,

    /// Page margins
    pub margins: Margins,

    /// Header-row shading fill (RRGGBB, no '#')
    pub header_fill: String,

    /// Color for placeholder runs (RRGGBB)
    pub placeholder_color: String,

    /// Literal caption label for tables ("Bảng")
    pub table_label: String,

    /// Literal caption label for figures ("Hình")
    pub figure_label: String,

    /// Placeholder text emitted where a figure should be inserted
    pub figure_placeholder: String,

    /// Placeholder text emitted when the logo asset is missing
    pub logo_placeholder: String,

    /// Page width in twips (A4 = 11906)
    pub page_width_twips: u32,

    /// Page height in twips (A4 = 16838)
    pub page_height_twips: u32,
}

impl StyleSheet {
    /// The ĐH GTVT (UTC) presentation rules used by the report templates.
    ///
    /// Margins 2.5/2.5/3/2 cm, Times New Roman, body 13pt justified with
    /// 1 cm first-line indent and 1.2 line spacing, chapter 18pt, section
    /// 16pt, subsection 14pt, table text 12pt, captions 12pt bold italic.
    pub fn utc() -> Self {
        Self {
            font_name: "Times New Roman".to_string(),
            body_pt: 13.0,
            chapter_pt: 18.0,
            section_pt: 16.0,
            subsection_pt: 14.0,
            table_pt: 12.0,
            caption_pt: 12.0,
            line_spacing: 1.2,
            first_line_indent_cm: 1.0,
            list_indent_cm: 1.5,
            list_hanging_cm: 0.5,
            margins: Margins::new(2.5, 2.5, 3.0, 2.0),
            header_fill: "D9E2F3".to_string(),
            placeholder_color: "808080".to_string(),
            table_label: "Bảng".to_string(),
            figure_label: "Hình".to_string(),
            figure_placeholder: "[Chèn hình vẽ tại đây]".to_string(),
            logo_placeholder: "[LOGO TRƯỜNG]".to_string(),
            page_width_twips: 11906,
            page_height_twips: 16838,
        }
    }

    /// Override the font family.
    pub fn with_font(mut self, name: impl Into<String>) -> Self {
        self.font_name = name.into();
        self
    }

    /// Override the page margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Override the caption labels (table label, figure label).
    pub fn with_caption_labels(
        mut self,
        table: impl Into<String>,
        figure: impl Into<String>,
    ) -> Self {
        self.table_label = table.into();
        self.figure_label = figure.into();
        self
    }

    /// Usable text width between the left and right margins, in twips.
    pub fn text_width_twips(&self, margins: &Margins) -> i64 {
        self.page_width_twips as i64
            - cm_to_twips(margins.left_cm)
            - cm_to_twips(margins.right_cm)
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::utc()
    }
}

/// Convert centimeters to twips (1 twip = 1/567 cm).
pub fn cm_to_twips(cm: f32) -> i64 {
    (cm * 567.0).round() as i64
}

/// Convert points to twips (1 pt = 20 twips).
pub fn pt_to_twips(pt: f32) -> i64 {
    (pt * 20.0).round() as i64
}

/// Convert points to half-points, the unit of `w:sz`.
pub fn pt_to_half_points(pt: f32) -> u32 {
    (pt * 2.0).round() as u32
}

/// Convert centimeters to EMU, the unit of drawing extents.
pub fn cm_to_emu(cm: f32) -> i64 {
    (cm * 360_000.0).round() as i64
}

/// Convert a line-spacing multiplier to the 240ths `w:line` expects.
pub fn spacing_to_line(line_spacing: f32) -> u32 {
    (line_spacing * 240.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(cm_to_twips(1.0), 567);
        assert_eq!(cm_to_twips(3.0), 1701);
        assert_eq!(pt_to_twips(12.0), 240);
        assert_eq!(pt_to_half_points(13.0), 26);
        assert_eq!(cm_to_emu(3.5), 1_260_000);
        assert_eq!(spacing_to_line(1.2), 288);
    }

    #[test]
    fn test_utc_profile() {
        let s = StyleSheet::utc();
        assert_eq!(s.font_name, "Times New Roman");
        assert_eq!(s.body_pt, 13.0);
        assert_eq!(s.margins, Margins::new(2.5, 2.5, 3.0, 2.0));
        assert_eq!(s.table_label, "Bảng");
    }

    #[test]
    fn test_text_width() {
        let s = StyleSheet::utc();
        // A4 minus 3cm + 2cm of horizontal margins.
        let width = s.text_width_twips(&s.margins);
        assert_eq!(width, 11906 - 1701 - 1134);
    }

    #[test]
    fn test_profile_overrides() {
        let s = StyleSheet::utc()
            .with_font("Cambria")
            .with_caption_labels("Table", "Figure");
        assert_eq!(s.font_name, "Cambria");
        assert_eq!(s.figure_label, "Figure");
        // Untouched values survive.
        assert_eq!(s.chapter_pt, 18.0);
    }
}
