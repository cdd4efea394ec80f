use std::sync::Arc;

use reqwest::Client;

use crate::application::ports::TranscriptionProvider;
use crate::domain::{ProviderKind, TranscriptionOptions};
use crate::presentation::config::{Settings, WhisperModeSetting, non_empty};

use super::deepgram_engine::DeepgramEngine;
use super::google_speech_engine::GoogleSpeechEngine;
use super::whisper_engine::{WhisperEngine, WhisperMode};

#[derive(Debug, thiserror::Error)]
pub enum ProviderFactoryError {
    #[error("API key required for {0}")]
    MissingApiKey(ProviderKind),
}

/// A ready adapter plus the per-request options taken from its settings section.
pub struct ConfiguredProvider {
    pub provider: Arc<dyn TranscriptionProvider>,
    pub options: TranscriptionOptions,
}

pub struct TranscriptionProviderFactory;

impl TranscriptionProviderFactory {
    pub fn create(
        kind: ProviderKind,
        settings: &Settings,
        client: &Client,
    ) -> Result<ConfiguredProvider, ProviderFactoryError> {
        match kind {
            ProviderKind::Deepgram => {
                let dg = &settings.deepgram;
                let key =
                    non_empty(&dg.api_key).ok_or(ProviderFactoryError::MissingApiKey(kind))?;
                let engine = DeepgramEngine::new(client.clone(), Some(dg.url.clone()), key);
                Ok(ConfiguredProvider {
                    provider: Arc::new(engine),
                    options: TranscriptionOptions {
                        model: dg.model.clone(),
                        language: dg.language.clone(),
                        // Translation keys off the detected language.
                        detect_language: dg.detect_language || settings.translation.enabled,
                        diarize: dg.diarize,
                        punctuate: dg.punctuate,
                        smart_format: dg.smart_format,
                    },
                })
            }
            ProviderKind::Whisper => {
                let whisper = &settings.whisper;
                let key =
                    non_empty(&whisper.api_key).ok_or(ProviderFactoryError::MissingApiKey(kind))?;
                let mode = match whisper.mode {
                    WhisperModeSetting::Transcribe => WhisperMode::Transcribe,
                    WhisperModeSetting::Translate => WhisperMode::Translate,
                };
                let engine = WhisperEngine::new(
                    client.clone(),
                    key,
                    Some(whisper.base_url.clone()),
                    Some(whisper.model.clone()),
                    mode,
                );
                Ok(ConfiguredProvider {
                    provider: Arc::new(engine),
                    options: TranscriptionOptions {
                        language: whisper.language.clone(),
                        ..Default::default()
                    },
                })
            }
            ProviderKind::GoogleSpeech => {
                let google = &settings.google;
                let key =
                    non_empty(&google.api_key).ok_or(ProviderFactoryError::MissingApiKey(kind))?;
                let engine = GoogleSpeechEngine::new(client.clone(), Some(google.url.clone()), key);
                Ok(ConfiguredProvider {
                    provider: Arc::new(engine),
                    options: TranscriptionOptions {
                        model: google.model.clone(),
                        language: Some(google.language_code.clone()),
                        diarize: google.diarize,
                        punctuate: google.punctuate,
                        ..Default::default()
                    },
                })
            }
        }
    }
}
