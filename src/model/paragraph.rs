//! Paragraph and run-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of inline content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    /// Runs, breaks and field directives in the paragraph
    pub content: Vec<InlineContent>,

    /// Paragraph-level formatting
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self {
            content: Vec::new(),
            style: ParagraphStyle::default(),
        }
    }

    /// Create a paragraph with a single run.
    pub fn with_run(run: TextRun) -> Self {
        let mut p = Self::new();
        p.add_run(run);
        p
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.content.push(InlineContent::Text(run));
    }

    /// Add a line break.
    pub fn add_line_break(&mut self) {
        self.content.push(InlineContent::LineBreak);
    }

    /// Add a tab stop.
    pub fn add_tab(&mut self) {
        self.content.push(InlineContent::Tab);
    }

    /// Add a field directive with the style its placeholder run carries.
    pub fn add_field(&mut self, code: FieldCode, style: TextStyle) {
        self.content.push(InlineContent::Field { code, style });
    }

    /// Add an inline image reference.
    pub fn add_image(&mut self, resource_id: impl Into<String>, width_cm: f32) {
        self.content.push(InlineContent::Image {
            resource_id: resource_id.into(),
            width_cm,
        });
    }

    /// Get plain text content of the paragraph. Field directives
    /// contribute nothing; they have no resolved value at build time.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                InlineContent::Text(run) => run.text.clone(),
                InlineContent::LineBreak => "\n".to_string(),
                InlineContent::Tab => "\t".to_string(),
                InlineContent::Field { .. } | InlineContent::Image { .. } => String::new(),
            })
            .collect()
    }

    /// Check if the paragraph has no content at all.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Check if this paragraph is an outline heading.
    pub fn is_heading(&self) -> bool {
        self.style.outline_level.is_some()
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Inline content within a paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineContent {
    /// A text run with styling
    Text(TextRun),

    /// A line break within the paragraph
    LineBreak,

    /// A tab stop
    Tab,

    /// A field directive the word processor evaluates lazily.
    /// The style applies to the field's placeholder run.
    Field {
        /// The field instruction
        code: FieldCode,
        /// Style of the placeholder run
        style: TextStyle,
    },

    /// An inline image backed by a document resource
    Image {
        /// Resource ID
        resource_id: String,
        /// Display width in cm (height follows the pixel aspect ratio)
        width_cm: f32,
    },
}

/// A field directive embedded in the document.
///
/// The generator only emits the directive; the consuming word processor
/// computes the value when the user refreshes fields. Captions therefore
/// never contain a precomputed number, which keeps numbering correct
/// across manual edits made after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldCode {
    /// Current page number (`PAGE`)
    Page,

    /// Label-scoped caption counter (`SEQ <scope> \* ARABIC`)
    Seq {
        /// Counter namespace, e.g. "Table" or "Figure"
        scope: String,
        /// Restart the counter at 1 (start of a new chapter)
        reset: bool,
    },

    /// Table-of-captions listing for one scope (`TOC \h \z \c "<scope>"`)
    TocOf {
        /// Caption scope to list
        scope: String,
    },
}

impl FieldCode {
    /// The instruction text placed between the field characters.
    pub fn instruction(&self) -> String {
        match self {
            FieldCode::Page => "PAGE".to_string(),
            FieldCode::Seq { scope, reset: false } => format!(" SEQ {scope} \\* ARABIC "),
            FieldCode::Seq { scope, reset: true } => format!(" SEQ {scope} \\* ARABIC \\r 1 "),
            FieldCode::TocOf { scope } => format!("TOC \\h \\z \\c \"{scope}\""),
        }
    }

    /// Placeholder shown until the host refreshes fields. TOC fields show
    /// nothing until refreshed; counters show a literal "1".
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            FieldCode::Page | FieldCode::Seq { .. } => Some("1"),
            FieldCode::TocOf { .. } => None,
        }
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Run styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a styled run.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Run styling properties. `None` values fall back to the stylesheet at
/// render time; the renderer always writes explicit fonts and sizes into
/// the output so nothing is left to theme inheritance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,

    /// Font name override
    pub font_name: Option<String>,

    /// Font size override in points
    pub size_pt: Option<f32>,

    /// Text color override (RRGGBB, no '#')
    pub color: Option<String>,
}

impl TextStyle {
    /// Plain style at a given size.
    pub fn sized(size_pt: f32) -> Self {
        Self {
            size_pt: Some(size_pt),
            ..Default::default()
        }
    }

    /// Bold style at a given size.
    pub fn bold(size_pt: f32) -> Self {
        Self {
            bold: true,
            size_pt: Some(size_pt),
            ..Default::default()
        }
    }

    /// Bold italic style at a given size (caption style).
    pub fn bold_italic(size_pt: f32) -> Self {
        Self {
            bold: true,
            italic: true,
            size_pt: Some(size_pt),
            ..Default::default()
        }
    }

    /// Set the color, builder style.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set italic, builder style.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set underline, builder style.
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }
}

/// Paragraph formatting properties. `None` falls back to the stylesheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Text alignment
    pub alignment: Alignment,

    /// Outline level for headings (1 = chapter); drives the navigable
    /// outline and TOC the consuming word processor builds
    pub outline_level: Option<u8>,

    /// Line spacing multiplier
    pub line_spacing: Option<f32>,

    /// Space before the paragraph in points
    pub space_before_pt: Option<f32>,

    /// Space after the paragraph in points
    pub space_after_pt: Option<f32>,

    /// First-line indent in cm; negative values hang the first line
    pub first_line_indent_cm: Option<f32>,

    /// Left indent in cm
    pub left_indent_cm: Option<f32>,

    /// Render as a bulleted list item
    pub bullet: bool,
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment (default for body text)
    #[default]
    Justify,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::new();
        p.add_run(TextRun::new("Hello "));
        p.add_run(TextRun::styled("world", TextStyle::bold(13.0)));
        assert_eq!(p.plain_text(), "Hello world");
    }

    #[test]
    fn test_field_contributes_no_text() {
        let mut p = Paragraph::new();
        p.add_run(TextRun::new("Bảng 1."));
        p.add_field(
            FieldCode::Seq {
                scope: "Table".to_string(),
                reset: false,
            },
            TextStyle::default(),
        );
        assert_eq!(p.plain_text(), "Bảng 1.");
    }

    #[test]
    fn test_seq_instruction() {
        let plain = FieldCode::Seq {
            scope: "Figure".to_string(),
            reset: false,
        };
        assert_eq!(plain.instruction(), " SEQ Figure \\* ARABIC ");

        let reset = FieldCode::Seq {
            scope: "Table".to_string(),
            reset: true,
        };
        assert_eq!(reset.instruction(), " SEQ Table \\* ARABIC \\r 1 ");
    }

    #[test]
    fn test_toc_instruction() {
        let toc = FieldCode::TocOf {
            scope: "Table".to_string(),
        };
        assert_eq!(toc.instruction(), "TOC \\h \\z \\c \"Table\"");
        assert_eq!(toc.placeholder(), None);
    }

    #[test]
    fn test_text_style_builders() {
        let caption = TextStyle::bold_italic(12.0);
        assert!(caption.bold && caption.italic);
        assert_eq!(caption.size_pt, Some(12.0));

        let gray = TextStyle::sized(13.0).with_color("808080");
        assert_eq!(gray.color.as_deref(), Some("808080"));
    }
}
