use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart;

use crate::application::ports::{TranscriptionError, TranscriptionProvider};
use crate::domain::{OutputNaming, ProviderKind, TranscriptionRequest, TranscriptionResult};

use super::response::{json_body, transport_error};

pub const DEFAULT_WHISPER_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_WHISPER_MODEL: &str = "whisper-1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhisperMode {
    /// Transcript in the spoken language.
    Transcribe,
    /// English translation produced by the vendor.
    Translate,
}

impl WhisperMode {
    fn endpoint(&self) -> &'static str {
        match self {
            Self::Transcribe => "audio/transcriptions",
            Self::Translate => "audio/translations",
        }
    }
}

/// OpenAI-compatible Whisper endpoint: multipart upload, bearer auth.
pub struct WhisperEngine {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    mode: WhisperMode,
}

impl WhisperEngine {
    pub fn new(
        client: Client,
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        mode: WhisperMode,
    ) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_WHISPER_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model: model.unwrap_or_else(|| DEFAULT_WHISPER_MODEL.to_string()),
            mode,
        }
    }
}

#[async_trait]
impl TranscriptionProvider for WhisperEngine {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Whisper
    }

    fn output_naming(&self) -> OutputNaming {
        match self.mode {
            WhisperMode::Transcribe => OutputNaming::timestamped("whisper"),
            WhisperMode::Translate => OutputNaming::timestamped("whisper-translated"),
        }
    }

    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<TranscriptionResult, TranscriptionError> {
        let url = format!("{}/{}", self.base_url, self.mode.endpoint());
        let model = request
            .options
            .model
            .clone()
            .unwrap_or_else(|| self.model.clone());

        let file_part = multipart::Part::bytes(request.audio.clone())
            .file_name(request.file_name.clone())
            .mime_str(request.content_type.as_mime())
            .map_err(|e| TranscriptionError::Encoding(format!("mime: {}", e)))?;

        let mut form = multipart::Form::new()
            .text("model", model.clone())
            .text("response_format", "verbose_json")
            .part("file", file_part);

        // The translations endpoint always targets English and rejects a language hint.
        if let (WhisperMode::Transcribe, Some(language)) = (self.mode, &request.options.language) {
            form = form.text("language", language.clone());
        }

        tracing::debug!(model = %model, mode = ?self.mode, "Sending audio to Whisper API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        let body = json_body(response, "whisper").await?;
        tracing::info!(mode = ?self.mode, "Whisper transcription completed");
        Ok(TranscriptionResult::new(body))
    }
}
