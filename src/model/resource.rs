//! Embedded binary resources (the institutional logo).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Kind of an embedded resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// PNG image
    Png,
}

impl ResourceKind {
    /// File extension used inside the package's media directory.
    pub fn extension(&self) -> &'static str {
        match self {
            ResourceKind::Png => "png",
        }
    }

    /// MIME content type for the package manifest.
    pub fn content_type(&self) -> &'static str {
        match self {
            ResourceKind::Png => "image/png",
        }
    }
}

/// An embedded image with its pixel dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Resource ID; doubles as the media file stem and relationship key
    pub id: String,

    /// Resource kind
    pub kind: ResourceKind,

    /// Raw bytes (not serialized in JSON dumps)
    #[serde(skip)]
    pub data: Vec<u8>,

    /// Pixel width
    pub width_px: u32,

    /// Pixel height
    pub height_px: u32,
}

impl Resource {
    /// Create a PNG resource, probing the IHDR chunk for dimensions.
    pub fn png(id: impl Into<String>, data: Vec<u8>) -> Result<Self> {
        let (width_px, height_px) = probe_png_dimensions(&data)?;
        Ok(Self {
            id: id.into(),
            kind: ResourceKind::Png,
            data,
            width_px,
            height_px,
        })
    }

    /// Display height in cm for a target width, preserving aspect ratio.
    pub fn scaled_height_cm(&self, width_cm: f32) -> f32 {
        width_cm * self.height_px as f32 / self.width_px as f32
    }
}

/// Read width and height from a PNG IHDR chunk. The IHDR payload starts
/// at byte 16: width and height as big-endian u32s.
fn probe_png_dimensions(data: &[u8]) -> Result<(u32, u32)> {
    if data.len() < 24 || data[..8] != PNG_SIGNATURE {
        return Err(Error::Resource("not a PNG file".to_string()));
    }
    let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
    let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);
    if width == 0 || height == 0 {
        return Err(Error::Resource("PNG has zero dimension".to_string()));
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png(width: u32, height: u32) -> Vec<u8> {
        let mut data = PNG_SIGNATURE.to_vec();
        data.extend_from_slice(&13u32.to_be_bytes()); // IHDR length
        data.extend_from_slice(b"IHDR");
        data.extend_from_slice(&width.to_be_bytes());
        data.extend_from_slice(&height.to_be_bytes());
        data.extend_from_slice(&[8, 6, 0, 0, 0]); // bit depth, color type, ...
        data
    }

    #[test]
    fn test_png_probe() {
        let res = Resource::png("logo", tiny_png(400, 200)).unwrap();
        assert_eq!(res.width_px, 400);
        assert_eq!(res.height_px, 200);
        assert_eq!(res.kind.extension(), "png");
    }

    #[test]
    fn test_scaled_height() {
        let res = Resource::png("logo", tiny_png(400, 200)).unwrap();
        assert!((res.scaled_height_cm(3.5) - 1.75).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_non_png() {
        let err = Resource::png("logo", b"GIF89a not a png".to_vec());
        assert!(matches!(err, Err(Error::Resource(_))));
    }

    #[test]
    fn test_rejects_truncated() {
        let err = Resource::png("logo", PNG_SIGNATURE.to_vec());
        assert!(err.is_err());
    }
}
