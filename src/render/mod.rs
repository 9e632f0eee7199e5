//! Rendering backends for the content tree.
//!
//! [`docx`] walks the tree into WordprocessingML, [`package`] wraps the
//! parts into the `.docx` container, and [`json`] dumps the tree itself
//! for inspection.

pub mod docx;
pub mod json;
pub mod package;
pub(crate) mod xml;

pub use docx::DocxRenderer;
pub use json::{to_json, JsonFormat};
pub use package::{package_bytes, save};
