// Exploration Log - core/data_uri.rs
//
// Self-contained text encoding for entry images: `data:<mime>;base64,<payload>`.
// The text form is what gets persisted, so it is kept verbatim.

use crate::util::error::ImageError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fmt;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// An image stored as a base64 data URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageDataUri(String);

impl ImageDataUri {
    /// Encode raw file bytes, sniffing the MIME type from the magic bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImageError> {
        let format = image::guess_format(bytes).map_err(|_| ImageError::UnrecognisedFormat)?;
        Ok(Self::from_parts(format.to_mime_type(), bytes))
    }

    /// Encode bytes under an explicit MIME type.
    pub fn from_parts(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("{SCHEME}{mime}{BASE64_MARKER},{}", STANDARD.encode(bytes)))
    }

    /// Wrap an already-encoded value without validating it.
    ///
    /// Stored values are trusted until they are displayed; `parse` reports
    /// problems at that point.
    pub fn from_raw(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// MIME type between the scheme and the first `;` or `,`.
    pub fn mime_type(&self) -> Option<&str> {
        let rest = self.0.strip_prefix(SCHEME)?;
        let end = rest.find([';', ','])?;
        Some(&rest[..end])
    }

    /// Length of the encoded payload in bytes (after the comma).
    pub fn payload_len(&self) -> usize {
        self.0.split_once(',').map_or(0, |(_, p)| p.len())
    }

    /// Approximate decoded size in bytes.
    pub fn decoded_len_estimate(&self) -> usize {
        self.payload_len() / 4 * 3
    }

    /// Split into MIME type and decoded bytes.
    pub fn parse(&self) -> Result<(String, Vec<u8>), ImageError> {
        let rest = self
            .0
            .strip_prefix(SCHEME)
            .ok_or_else(|| ImageError::InvalidDataUri {
                reason: "missing 'data:' scheme".to_string(),
            })?;
        let (header, payload) = rest.split_once(',').ok_or_else(|| ImageError::InvalidDataUri {
            reason: "missing ',' separator".to_string(),
        })?;
        let mime = header
            .strip_suffix(BASE64_MARKER)
            .ok_or_else(|| ImageError::InvalidDataUri {
                reason: "payload is not base64-encoded".to_string(),
            })?;
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| ImageError::InvalidDataUri {
                reason: e.to_string(),
            })?;
        Ok((mime.to_string(), bytes))
    }
}

impl fmt::Display for ImageDataUri {
    /// Short human-readable description; never prints the payload.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kib = self.decoded_len_estimate() as f64 / 1024.0;
        write!(f, "{} ({kib:.1} KiB)", self.mime_type().unwrap_or("unknown"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Smallest valid PNG signature plus IHDR chunk prefix; enough for sniffing.
    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];

    #[test]
    fn test_from_bytes_sniffs_png() {
        let uri = ImageDataUri::from_bytes(PNG_MAGIC).unwrap();
        assert!(uri.as_str().starts_with("data:image/png;base64,"));
        assert_eq!(uri.mime_type(), Some("image/png"));
    }

    #[test]
    fn test_from_bytes_rejects_text() {
        let result = ImageDataUri::from_bytes(b"just some notes");
        assert!(matches!(result, Err(ImageError::UnrecognisedFormat)));
    }

    #[test]
    fn test_parse_recovers_bytes() {
        let uri = ImageDataUri::from_parts("image/jpeg", b"\xFF\xD8\xFFpayload");
        let (mime, bytes) = uri.parse().unwrap();
        assert_eq!(mime, "image/jpeg");
        assert_eq!(bytes, b"\xFF\xD8\xFFpayload");
    }

    #[test]
    fn test_parse_rejects_non_base64_uri() {
        let uri = ImageDataUri::from_raw("data:image/svg+xml,<svg/>".to_string());
        assert!(matches!(uri.parse(), Err(ImageError::InvalidDataUri { .. })));
        assert_eq!(uri.mime_type(), Some("image/svg+xml"));
    }

    #[test]
    fn test_parse_rejects_missing_scheme() {
        let uri = ImageDataUri::from_raw("image/png;base64,AAAA".to_string());
        assert!(matches!(uri.parse(), Err(ImageError::InvalidDataUri { .. })));
        assert_eq!(uri.mime_type(), None);
    }

    #[test]
    fn test_display_hides_payload() {
        let uri = ImageDataUri::from_parts("image/png", &[0u8; 3072]);
        let shown = uri.to_string();
        assert!(shown.starts_with("image/png"));
        assert!(!shown.contains("base64"));
    }
}
