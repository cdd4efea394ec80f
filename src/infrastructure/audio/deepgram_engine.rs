use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::application::ports::{TranscriptionError, TranscriptionProvider};
use crate::domain::{
    OutputNaming, ProviderKind, TranscriptionOptions, TranscriptionRequest, TranscriptionResult,
};

use super::response::{json_body, transport_error};

pub const DEFAULT_DEEPGRAM_URL: &str = "https://api.deepgram.com/v1/listen";

/// Deepgram prerecorded audio: raw bytes in the body, `Token` auth.
pub struct DeepgramEngine {
    client: Client,
    url: String,
    api_key: String,
}

impl DeepgramEngine {
    pub fn new(client: Client, url: Option<String>, api_key: String) -> Self {
        Self {
            client,
            url: url.unwrap_or_else(|| DEFAULT_DEEPGRAM_URL.to_string()),
            api_key,
        }
    }
}

fn query_params(options: &TranscriptionOptions) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(model) = &options.model {
        params.push(("model", model.clone()));
    }
    if let Some(language) = &options.language {
        params.push(("language", language.clone()));
    }
    if options.detect_language {
        params.push(("detect_language", "true".to_string()));
    }
    if options.diarize {
        params.push(("diarize", "true".to_string()));
    }
    if options.punctuate {
        params.push(("punctuate", "true".to_string()));
    }
    if options.smart_format {
        params.push(("smart_format", "true".to_string()));
    }
    params
}

#[async_trait]
impl TranscriptionProvider for DeepgramEngine {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Deepgram
    }

    fn output_naming(&self) -> OutputNaming {
        OutputNaming::plain()
    }

    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<TranscriptionResult, TranscriptionError> {
        let params = query_params(&request.options);

        tracing::debug!(
            content_type = %request.content_type,
            params = params.len(),
            "Sending audio to Deepgram"
        );

        let response = self
            .client
            .post(&self.url)
            .query(&params)
            .header(AUTHORIZATION, format!("Token {}", self.api_key))
            .header(CONTENT_TYPE, request.content_type.as_mime())
            .body(request.audio.clone())
            .send()
            .await
            .map_err(transport_error)?;

        let body = json_body(response, "deepgram").await?;
        tracing::info!("Deepgram transcription completed");
        Ok(TranscriptionResult::new(body))
    }
}
