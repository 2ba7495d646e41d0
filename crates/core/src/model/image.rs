use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Serialize, Serializer};
use thiserror::Error;
use url::Url;

/// Mime type requested from the image model.
pub const JPEG_MIME: &str = "image/jpeg";

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageRefError {
    #[error("image payload cannot be empty")]
    EmptyPayload,

    #[error("image mime type must be an image/* type, got {0:?}")]
    InvalidMime(String),

    #[error("invalid image url: {0}")]
    InvalidUrl(String),
}

//
// ─── IMAGE REFERENCE ───────────────────────────────────────────────────────────
//

/// A self-contained or remote reference to raster image data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Base64 payload embedded as a `data:` URI.
    DataUri { mime: String, payload: String },
    Url(Url),
}

impl ImageRef {
    /// Encode raw image bytes into an embeddable data URI.
    ///
    /// # Errors
    ///
    /// Returns `ImageRefError::EmptyPayload` for an empty buffer and
    /// `ImageRefError::InvalidMime` when `mime` is not an `image/*` type.
    pub fn from_bytes(mime: impl Into<String>, bytes: &[u8]) -> Result<Self, ImageRefError> {
        let mime = mime.into();
        if !mime.starts_with("image/") {
            return Err(ImageRefError::InvalidMime(mime));
        }
        if bytes.is_empty() {
            return Err(ImageRefError::EmptyPayload);
        }
        Ok(Self::DataUri {
            mime,
            payload: STANDARD.encode(bytes),
        })
    }

    /// Shorthand for a JPEG data URI.
    ///
    /// # Errors
    ///
    /// Returns `ImageRefError::EmptyPayload` for an empty buffer.
    pub fn jpeg(bytes: &[u8]) -> Result<Self, ImageRefError> {
        Self::from_bytes(JPEG_MIME, bytes)
    }

    /// # Errors
    ///
    /// Returns `ImageRefError::InvalidUrl` when `raw` does not parse.
    pub fn from_url(raw: impl AsRef<str>) -> Result<Self, ImageRefError> {
        let raw = raw.as_ref().trim();
        Url::parse(raw)
            .map(Self::Url)
            .map_err(|_| ImageRefError::InvalidUrl(raw.to_string()))
    }

    /// The string to place in an `<img src>` attribute.
    #[must_use]
    pub fn src(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn is_embedded(&self) -> bool {
        matches!(self, Self::DataUri { .. })
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataUri { mime, payload } => write!(f, "data:{mime};base64,{payload}"),
            Self::Url(url) => f.write_str(url.as_str()),
        }
    }
}

impl Serialize for ImageRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_bytes_become_data_uri() {
        let image = ImageRef::jpeg(b"X").unwrap();
        assert_eq!(image.src(), "data:image/jpeg;base64,WA==");
        assert!(image.is_embedded());
    }

    #[test]
    fn empty_bytes_are_rejected() {
        assert_eq!(ImageRef::jpeg(&[]), Err(ImageRefError::EmptyPayload));
    }

    #[test]
    fn non_image_mime_is_rejected() {
        let err = ImageRef::from_bytes("text/plain", b"abc").unwrap_err();
        assert!(matches!(err, ImageRefError::InvalidMime(_)));
    }

    #[test]
    fn url_reference_renders_as_is() {
        let image = ImageRef::from_url(" https://example.com/pitch.jpg ").unwrap();
        assert_eq!(image.src(), "https://example.com/pitch.jpg");
        assert!(!image.is_embedded());
        assert!(ImageRef::from_url("not a url").is_err());
    }
}
