use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;

use crate::modules::translation::application::ports::outgoing::{TranslationError, Translator};
use crate::modules::translation::domain::Language;
use crate::shared::config::{optional_or, parse_or, ConfigError};

const DEFAULT_API_URL: &str = "https://translate.googleapis.com/translate_a/single";

#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    pub enabled: bool,
    pub api_url: String,
    pub timeout_secs: u64,
}

impl TranslatorConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            enabled: parse_or("TRANSLATION_ENABLED", true)?,
            api_url: optional_or("TRANSLATE_API_URL", DEFAULT_API_URL),
            timeout_secs: parse_or("TRANSLATE_TIMEOUT_SECS", 10u64)?,
        })
    }
}

/// Client for the public Google Translate endpoint (`client=gtx`).
#[derive(Clone)]
pub struct GoogleTranslator {
    client: Client,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new(config: &TranslatorConfig) -> Result<Self, TranslationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TranslationError::Request(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    fn request_url(&self, text: &str, from: Language, to: Language) -> Result<Url, TranslationError> {
        Url::parse_with_params(
            &self.api_url,
            &[
                ("client", "gtx"),
                ("sl", from.code()),
                ("tl", to.code()),
                ("dt", "t"),
                ("q", text),
            ],
        )
        .map_err(|e| TranslationError::Request(e.to_string()))
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String, TranslationError> {
        let url = self.request_url(text, from, to)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TranslationError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranslationError::Status(response.status().as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(e.to_string()))?;

        extract_translation(&body)
    }
}

/// The provider answers with nested arrays; `body[0]` holds one
/// `[translated, original, ...]` entry per sentence.
fn extract_translation(body: &Value) -> Result<String, TranslationError> {
    let sentences = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::InvalidResponse("missing sentence list".to_string()))?;

    let translated: String = sentences
        .iter()
        .filter_map(|sentence| sentence.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(TranslationError::InvalidResponse(
            "empty translation".to_string(),
        ));
    }

    Ok(translated)
}
