use async_trait::async_trait;
use quiz_core::model::{ImageRef, JPEG_MIME, QuizDraft, QuizItem, ValidatedQuiz};
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::config::{DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, ProviderConfig};
use crate::error::ProviderError;
use crate::provider::QuizProvider;
use crate::provider::backend::{GeneratedImage, GenerativeBackend, ImageRequest, TextRequest};
use crate::provider::prompt::{
    IMAGE_ASPECT_RATIO, IMAGE_COUNT, QUIZ_PROMPT, RESPONSE_MIME_TYPE, quiz_schema,
    styled_image_prompt,
};

/// Turns two raw generative calls into one validated [`QuizItem`].
#[derive(Clone)]
pub struct QuizAdapter<B> {
    backend: B,
    text_model: String,
    image_model: String,
}

impl<B: GenerativeBackend> QuizAdapter<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }

    /// Use the model identifiers from `config`.
    #[must_use]
    pub fn with_config(mut self, config: &ProviderConfig) -> Self {
        self.text_model.clone_from(&config.text_model);
        self.image_model.clone_from(&config.image_model);
        self
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn text_request(&self) -> TextRequest {
        TextRequest {
            model: self.text_model.clone(),
            prompt: QUIZ_PROMPT.to_string(),
            response_mime_type: RESPONSE_MIME_TYPE.to_string(),
            response_schema: quiz_schema(),
        }
    }

    #[must_use]
    pub fn image_request(&self, image_prompt: &str) -> ImageRequest {
        ImageRequest {
            model: self.image_model.clone(),
            prompt: styled_image_prompt(image_prompt),
            count: IMAGE_COUNT,
            mime_type: JPEG_MIME.to_string(),
            aspect_ratio: IMAGE_ASPECT_RATIO.to_string(),
        }
    }

    async fn generate_image(&self, image_prompt: &str) -> Result<ImageRef, ProviderError> {
        let request = self.image_request(image_prompt);
        let images = self.backend.generate_images(&request).await?;
        let Some(GeneratedImage { mime_type, bytes }) = images.into_iter().next() else {
            return Err(ProviderError::ImageGenerationFailed(
                "the service returned no images".into(),
            ));
        };
        let bytes = bytes.ok_or_else(|| {
            ProviderError::ImageGenerationFailed("the image carries no payload".into())
        })?;
        let mime = mime_type.unwrap_or_else(|| JPEG_MIME.to_string());

        ImageRef::from_bytes(mime, &bytes)
            .map_err(|err| ProviderError::ImageGenerationFailed(err.to_string()))
    }
}

#[async_trait]
impl<B: GenerativeBackend> QuizProvider for QuizAdapter<B> {
    async fn fetch_quiz_item(&self) -> Result<QuizItem, ProviderError> {
        info!(model = %self.text_model, "fetching new quiz item");

        let raw = self
            .backend
            .generate_text(&self.text_request())
            .await?
            .ok_or(ProviderError::EmptyResponse)?;
        let (quiz, image_prompt) = parse_quiz_payload(&raw)?;
        debug!(question = quiz.question(), image_prompt = %image_prompt, "generated quiz content");

        let image = self.generate_image(&image_prompt).await.inspect_err(|err| {
            error!(error = %err, model = %self.image_model, "image generation failed");
        })?;

        Ok(quiz.with_image(image))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuizPayload {
    question: Option<String>,
    options: Option<Vec<String>>,
    correct_answer: Option<String>,
    image_prompt: Option<String>,
}

fn required(field: Option<String>, name: &str) -> Result<String, ProviderError> {
    field
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ProviderError::MalformedResponse(format!("missing field `{name}`")))
}

/// Parse the text model's JSON and validate the quiz fields.
///
/// Returns the validated text fields together with the image prompt.
fn parse_quiz_payload(raw: &str) -> Result<(ValidatedQuiz, String), ProviderError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }

    let payload: QuizPayload = serde_json::from_str(raw)
        .map_err(|err| ProviderError::MalformedResponse(err.to_string()))?;

    let image_prompt = required(payload.image_prompt, "imagePrompt")?;
    let draft = QuizDraft {
        question: required(payload.question, "question")?,
        options: payload.options.ok_or_else(|| {
            ProviderError::MalformedResponse("missing field `options`".into())
        })?,
        correct_answer: required(payload.correct_answer, "correctAnswer")?,
    };
    let quiz = draft
        .validate()
        .map_err(|err| ProviderError::MalformedResponse(err.to_string()))?;

    Ok((quiz, image_prompt.trim().to_string()))
}
