use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranslationError, Translator};
use crate::infrastructure::observability::sanitize_for_log;

const SYSTEM_PROMPT_TEMPLATE: &str = "Translate the following text from {source} to {target}. \
Respond with the translation only, without notes or quotation marks.";

/// Uses an OpenAI-compatible chat completion as a translator.
pub struct ChatCompletionTranslator {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl ChatCompletionTranslator {
    pub fn new(client: Client, base_url: &str, api_key: String, model: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }

    fn build_messages(text: &str, source: &str, target: &str) -> Vec<ChatMessage> {
        let system_content = SYSTEM_PROMPT_TEMPLATE
            .replace("{source}", source)
            .replace("{target}", target);
        vec![
            ChatMessage {
                role: "system".to_string(),
                content: system_content,
            },
            ChatMessage {
                role: "user".to_string(),
                content: text.to_string(),
            },
        ]
    }
}

#[async_trait]
impl Translator for ChatCompletionTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: Self::build_messages(text, source_language, target_language),
            temperature: 0.0,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| TranslationError::ApiRequestFailed(e.to_string()))?;

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

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| TranslationError::InvalidResponse("empty choices".to_string()))
    }
}
