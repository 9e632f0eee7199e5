//! Error types for the docforge library.

use std::io;
use thiserror::Error;

/// Result type alias for docforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or writing a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading an asset or writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error assembling the OPC (.docx) container.
    #[error("docx package error: {0}")]
    Package(#[from] zip::result::ZipError),

    /// An embedded resource could not be understood.
    #[error("unsupported resource: {0}")]
    Resource(String),

    /// Error while rendering the content tree to WordprocessingML.
    #[error("render error: {0}")]
    Render(String),

    /// Error serializing the content tree to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Resource("not a PNG".to_string());
        assert_eq!(err.to_string(), "unsupported resource: not a PNG");

        let err = Error::Render("empty section".to_string());
        assert_eq!(err.to_string(), "render error: empty section");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
