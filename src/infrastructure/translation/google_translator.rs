use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranslationError, Translator};
use crate::infrastructure::observability::sanitize_for_log;

pub const DEFAULT_GOOGLE_TRANSLATE_URL: &str =
    "https://translation.googleapis.com/language/translate/v2";

pub struct GoogleTranslator {
    client: Client,
    url: String,
    api_key: String,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

impl GoogleTranslator {
    pub fn new(client: Client, url: Option<String>, api_key: String) -> Self {
        Self {
            client,
            url: url.unwrap_or_else(|| DEFAULT_GOOGLE_TRANSLATE_URL.to_string()),
            api_key,
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        let request_body = TranslateRequest {
            q: text,
            source: source_language,
            target: target_language,
            format: "text",
        };

        let response = self
            .client
            .post(&self.url)
            .query(&[("key", &self.api_key)])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| TranslationError::ApiRequestFailed(e.without_url().to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslationError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status,
                sanitize_for_log(&body)
            )));
        }

        let translate_response: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(e.to_string()))?;

        translate_response
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| TranslationError::InvalidResponse("empty translations".to_string()))
    }
}
