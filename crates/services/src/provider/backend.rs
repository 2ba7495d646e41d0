use async_trait::async_trait;
use serde_json::Value;

use crate::error::ProviderError;

/// Structured text-generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRequest {
    pub model: String,
    pub prompt: String,
    pub response_mime_type: String,
    pub response_schema: Value,
}

/// Image-generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub model: String,
    pub prompt: String,
    pub count: u32,
    pub mime_type: String,
    pub aspect_ratio: String,
}

/// One generated image. `bytes` is `None` when the service returned an entry
/// without a usable payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: Option<String>,
    pub bytes: Option<Vec<u8>>,
}

impl GeneratedImage {
    #[must_use]
    pub fn jpeg(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            mime_type: Some(quiz_core::model::JPEG_MIME.to_string()),
            bytes: Some(bytes.into()),
        }
    }
}

/// Raw access to a generative service: one text call and one image call.
///
/// Implementations only translate transport; shape validation happens in
/// [`crate::provider::QuizAdapter`].
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Returns the raw generated text, or `None` when the service produced none.
    async fn generate_text(&self, request: &TextRequest) -> Result<Option<String>, ProviderError>;

    async fn generate_images(
        &self,
        request: &ImageRequest,
    ) -> Result<Vec<GeneratedImage>, ProviderError>;
}
