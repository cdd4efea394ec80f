use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::Serialize;

use crate::application::ports::{TranscriptionError, TranscriptionProvider};
use crate::domain::{
    AudioContentType, OutputNaming, ProviderKind, TranscriptionRequest, TranscriptionResult,
};

use super::response::{json_body, transport_error};

pub const DEFAULT_GOOGLE_SPEECH_URL: &str = "https://speech.googleapis.com/v1/speech:recognize";
pub const DEFAULT_LANGUAGE_CODE: &str = "en-US";

/// Google Cloud Speech `recognize`: base64 audio in JSON, API key as query parameter.
pub struct GoogleSpeechEngine {
    client: Client,
    url: String,
    api_key: String,
}

impl GoogleSpeechEngine {
    pub fn new(client: Client, url: Option<String>, api_key: String) -> Self {
        Self {
            client,
            url: url.unwrap_or_else(|| DEFAULT_GOOGLE_SPEECH_URL.to_string()),
            api_key,
        }
    }
}

#[derive(Serialize)]
struct RecognizeRequest {
    config: RecognitionConfig,
    audio: RecognitionAudio,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    encoding: Option<&'static str>,
    language_code: String,
    enable_automatic_punctuation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diarization_config: Option<DiarizationConfig>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DiarizationConfig {
    enable_speaker_diarization: bool,
}

#[derive(Serialize)]
struct RecognitionAudio {
    content: String,
}

/// WAV and FLAC carry headers Google reads itself; the rest need an explicit encoding.
fn encoding_for(content_type: AudioContentType) -> Option<&'static str> {
    match content_type {
        AudioContentType::Mpeg => Some("MP3"),
        AudioContentType::Ogg => Some("OGG_OPUS"),
        AudioContentType::Wav | AudioContentType::Flac | AudioContentType::Mp4 => None,
    }
}

fn build_request(request: &TranscriptionRequest) -> RecognizeRequest {
    let options = &request.options;
    RecognizeRequest {
        config: RecognitionConfig {
            encoding: encoding_for(request.content_type),
            language_code: options
                .language
                .clone()
                .unwrap_or_else(|| DEFAULT_LANGUAGE_CODE.to_string()),
            enable_automatic_punctuation: options.punctuate,
            model: options.model.clone(),
            diarization_config: options.diarize.then_some(DiarizationConfig {
                enable_speaker_diarization: true,
            }),
        },
        audio: RecognitionAudio {
            content: general_purpose::STANDARD.encode(&request.audio),
        },
    }
}

#[async_trait]
impl TranscriptionProvider for GoogleSpeechEngine {
    fn kind(&self) -> ProviderKind {
        ProviderKind::GoogleSpeech
    }

    fn output_naming(&self) -> OutputNaming {
        OutputNaming::timestamped("google")
    }

    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<TranscriptionResult, TranscriptionError> {
        let body = build_request(request);

        tracing::debug!(
            language_code = %body.config.language_code,
            encoding = ?body.config.encoding,
            "Sending audio to Google Speech"
        );

        let response = self
            .client
            .post(&self.url)
            .query(&[("key", &self.api_key)])
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let body = json_body(response, "google").await?;
        tracing::info!("Google Speech transcription completed");
        Ok(TranscriptionResult::new(body))
    }
}
