use std::env;
use std::fmt;

use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const API_KEY_FALLBACK_VAR: &str = "API_KEY";
pub const BASE_URL_VAR: &str = "QUIZ_API_BASE_URL";
pub const TEXT_MODEL_VAR: &str = "QUIZ_TEXT_MODEL";
pub const IMAGE_MODEL_VAR: &str = "QUIZ_IMAGE_MODEL";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";

/// Connection settings for the generative content provider.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: String,
    pub text_model: String,
    pub image_model: String,
}

impl ProviderConfig {
    /// Read the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingApiKey` when no non-blank key is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingApiKey` when no non-blank key is found.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = non_blank(API_KEY_VAR)
            .or_else(|| non_blank(API_KEY_FALLBACK_VAR))
            .ok_or(ConfigError::MissingApiKey {
                primary: API_KEY_VAR,
                fallback: API_KEY_FALLBACK_VAR,
            })?;
        let base_url = non_blank(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let text_model = non_blank(TEXT_MODEL_VAR).unwrap_or_else(|| DEFAULT_TEXT_MODEL.into());
        let image_model =
            non_blank(IMAGE_MODEL_VAR).unwrap_or_else(|| DEFAULT_IMAGE_MODEL.into());

        Ok(Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
            text_model,
            image_model,
        })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    #[must_use]
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }
}

// Keeps the key out of logs and panic messages.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn missing_key_is_fatal() {
        let err = ProviderConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey { .. }));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = ProviderConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey { .. }));
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = ProviderConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "k")])).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.text_model, DEFAULT_TEXT_MODEL);
        assert_eq!(config.image_model, DEFAULT_IMAGE_MODEL);
    }

    #[test]
    fn fallback_key_and_overrides_are_honoured() {
        let config = ProviderConfig::from_lookup(lookup_from(&[
            (API_KEY_FALLBACK_VAR, "fallback"),
            (BASE_URL_VAR, "http://localhost:9000/v1/"),
            (TEXT_MODEL_VAR, "text-x"),
            (IMAGE_MODEL_VAR, "image-y"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "fallback");
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.text_model, "text-x");
        assert_eq!(config.image_model, "image-y");
    }

    #[test]
    fn debug_output_hides_key() {
        let config =
            ProviderConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "secret-key")])).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-key"));
    }
}
