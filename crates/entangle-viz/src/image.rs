//! Transport encoding for rendered images.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

/// MIME type of every image this crate renders.
pub const SVG_MIME: &str = "image/svg+xml";

/// Short format name sent alongside image payloads.
pub const SVG_FORMAT: &str = "svg";

/// A rendered image, base64-encoded for inclusion in a JSON payload.
///
/// Serializes as the bare base64 string; clients prefix it with a `data:` URI
/// header themselves, so the MIME type stays on the Rust side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct Image {
    /// MIME type of the decoded bytes.
    pub mime: String,
    /// Base64 (standard alphabet, padded) image bytes.
    pub data: String,
}

impl Image {
    /// Encode an SVG document.
    pub fn svg(document: &str) -> Self {
        Self {
            mime: SVG_MIME.to_string(),
            data: STANDARD.encode(document.as_bytes()),
        }
    }

    /// The image as a `data:` URI, ready for an `<img src>`.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.data)
    }

    /// Decode the payload back to bytes.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.data)
    }
}

impl From<Image> for String {
    fn from(image: Image) -> Self {
        image.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_image_encoding() {
        let image = Image::svg("<svg/>");
        assert_eq!(image.mime, "image/svg+xml");
        assert_eq!(image.data, "PHN2Zy8+");
        assert_eq!(image.decode().unwrap(), b"<svg/>");
        assert_eq!(image.to_data_uri(), "data:image/svg+xml;base64,PHN2Zy8+");
    }

    #[test]
    fn test_serializes_as_bare_base64() {
        let json = serde_json::to_value(Image::svg("<svg/>")).unwrap();
        assert_eq!(json, serde_json::Value::String("PHN2Zy8+".into()));
    }
}
