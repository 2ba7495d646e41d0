use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::provider::backend::{GeneratedImage, GenerativeBackend, ImageRequest, TextRequest};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Generative Language REST backend (`generateContent` + `predict`).
#[derive(Clone)]
pub struct GeminiBackend {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GeminiBackend {
    #[must_use]
    pub fn new(config: &ProviderConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    #[must_use]
    pub fn with_client(client: Client, config: &ProviderConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/models/{model}:{method}", self.base_url)
    }

    async fn post<Req, Resp>(&self, url: String, body: &Req) -> Result<Resp, ProviderError>
    where
        Req: Serialize + Sync,
        Resp: for<'de> Deserialize<'de>,
    {
        debug!(%url, "sending provider request");
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, %body, "provider request failed");
            return Err(ProviderError::HttpStatus { status, body });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    async fn generate_text(&self, request: &TextRequest) -> Result<Option<String>, ProviderError> {
        let body = GenerateContentRequest::from_text_request(request);
        let response: GenerateContentResponse = self
            .post(self.endpoint(&request.model, "generateContent"), &body)
            .await?;
        Ok(response.text())
    }

    async fn generate_images(
        &self,
        request: &ImageRequest,
    ) -> Result<Vec<GeneratedImage>, ProviderError> {
        let body = PredictRequest::from_image_request(request);
        let response: PredictResponse = self
            .post(self.endpoint(&request.model, "predict"), &body)
            .await?;
        if response.predictions.is_empty() {
            warn!(model = %request.model, "image model returned no predictions");
        }
        Ok(response.into_images())
    }
}

//
// ─── generateContent ───────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn from_text_request(request: &TextRequest) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(request.prompt.clone()),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: request.response_mime_type.clone(),
                response_schema: request.response_schema.clone(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, `None` if there are none.
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        (!text.is_empty()).then_some(text)
    }
}

//
// ─── predict (image models) ────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<PredictInstance>,
    parameters: PredictParameters,
}

impl PredictRequest {
    fn from_image_request(request: &ImageRequest) -> Self {
        Self {
            instances: vec![PredictInstance {
                prompt: request.prompt.clone(),
            }],
            parameters: PredictParameters {
                sample_count: request.count,
                aspect_ratio: request.aspect_ratio.clone(),
                output_options: OutputOptions {
                    mime_type: request.mime_type.clone(),
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct PredictInstance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u32,
    aspect_ratio: String,
    output_options: OutputOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputOptions {
    mime_type: String,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
    mime_type: Option<String>,
}

impl PredictResponse {
    fn into_images(self) -> Vec<GeneratedImage> {
        self.predictions
            .into_iter()
            .map(|prediction| GeneratedImage {
                mime_type: prediction.mime_type,
                bytes: prediction
                    .bytes_base64_encoded
                    .and_then(|encoded| STANDARD.decode(encoded).ok())
                    .filter(|bytes| !bytes.is_empty()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::provider::prompt::quiz_schema;

    fn config() -> ProviderConfig {
        ProviderConfig::from_lookup(|name| (name == "GEMINI_API_KEY").then(|| "k".to_string()))
            .unwrap()
            .with_base_url("http://localhost:1234/v1beta/")
    }

    #[test]
    fn endpoints_follow_model_method_layout() {
        let backend = GeminiBackend::new(&config());
        assert_eq!(
            backend.endpoint("gemini-2.5-flash", "generateContent"),
            "http://localhost:1234/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn text_request_body_uses_camel_case() {
        let request = TextRequest {
            model: "m".into(),
            prompt: "hello".into(),
            response_mime_type: "application/json".into(),
            response_schema: quiz_schema(),
        };
        let body = serde_json::to_value(GenerateContentRequest::from_text_request(&request))
            .unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn image_request_body_uses_predict_layout() {
        let request = ImageRequest {
            model: "imagen".into(),
            prompt: "goal, dramatic".into(),
            count: 1,
            mime_type: "image/jpeg".into(),
            aspect_ratio: "16:9".into(),
        };
        let body = serde_json::to_value(PredictRequest::from_image_request(&request)).unwrap();
        assert_eq!(
            body,
            json!({
                "instances": [{ "prompt": "goal, dramatic" }],
                "parameters": {
                    "sampleCount": 1,
                    "aspectRatio": "16:9",
                    "outputOptions": { "mimeType": "image/jpeg" }
                }
            })
        );
    }

    #[test]
    fn text_parts_are_concatenated() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] } }]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn missing_candidates_yield_no_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.text(), None);

        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [{ "finishReason": "SAFETY" }] }))
                .unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn predictions_decode_to_raw_bytes() {
        let response: PredictResponse = serde_json::from_value(json!({
            "predictions": [
                { "bytesBase64Encoded": "WA==", "mimeType": "image/jpeg" },
                { "mimeType": "image/jpeg" },
                { "bytesBase64Encoded": "%%%" }
            ]
        }))
        .unwrap();
        let images = response.into_images();
        assert_eq!(images.len(), 3);
        assert_eq!(images[0].bytes.as_deref(), Some(&b"X"[..]));
        assert_eq!(images[1].bytes, None);
        assert_eq!(images[2].bytes, None);
    }
}
