use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::{
    AudioSource, AudioSourceError, ResultWriter, ResultWriterError, TranscriptionError,
    TranscriptionProvider, Translator,
};
use crate::domain::{
    OutputName, ProviderKind, TranscriptionOptions, TranscriptionRequest, UnknownProvider,
};

use super::translation::attach_translation;

struct RegisteredProvider {
    provider: Arc<dyn TranscriptionProvider>,
    options: TranscriptionOptions,
}

/// Routes one audio file to a named provider and stores what comes back.
pub struct TranscriptionDispatcher {
    providers: HashMap<ProviderKind, RegisteredProvider>,
    audio_source: Arc<dyn AudioSource>,
    writer: Arc<dyn ResultWriter>,
    translator: Option<Arc<dyn Translator>>,
    target_language: String,
}

impl TranscriptionDispatcher {
    pub fn new(audio_source: Arc<dyn AudioSource>, writer: Arc<dyn ResultWriter>) -> Self {
        Self {
            providers: HashMap::new(),
            audio_source,
            writer,
            translator: None,
            target_language: "en".to_string(),
        }
    }

    pub fn with_provider(
        mut self,
        provider: Arc<dyn TranscriptionProvider>,
        options: TranscriptionOptions,
    ) -> Self {
        self.providers
            .insert(provider.kind(), RegisteredProvider { provider, options });
        self
    }

    pub fn with_translator(
        mut self,
        translator: Arc<dyn Translator>,
        target_language: impl Into<String>,
    ) -> Self {
        self.translator = Some(translator);
        self.target_language = target_language.into();
        self
    }

    pub fn registered(&self) -> Vec<ProviderKind> {
        ProviderKind::ALL
            .into_iter()
            .filter(|kind| self.providers.contains_key(kind))
            .collect()
    }

    /// The provider name is resolved before any file is touched.
    pub async fn run(
        &self,
        provider_name: &str,
        input: &Path,
    ) -> Result<DispatchOutcome, DispatchError> {
        let kind: ProviderKind = provider_name.parse()?;
        let registered = self
            .providers
            .get(&kind)
            .ok_or(DispatchError::ProviderNotConfigured(kind))?;

        let audio = self.audio_source.load(input).await?;
        let base_name = audio.base_name();

        tracing::info!(
            provider = %kind,
            input = %input.display(),
            content_type = %audio.content_type,
            bytes = audio.size_bytes(),
            "Dispatching audio for transcription"
        );

        let request = TranscriptionRequest::new(audio, registered.options.clone());
        let mut result = registered.provider.transcribe(&request).await?;

        let translated = match &self.translator {
            Some(translator) => {
                attach_translation(&mut result, translator.as_ref(), &self.target_language).await
            }
            None => false,
        };

        let name = OutputName::new(&base_name, &registered.provider.output_naming(), Utc::now());
        let output_path = self.writer.write(&result, &name).await?;

        tracing::info!(
            provider = %kind,
            output = %output_path.display(),
            translated,
            "Response written"
        );

        Ok(DispatchOutcome {
            provider: kind,
            output_path,
            translated,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    pub provider: ProviderKind,
    pub output_path: PathBuf,
    pub translated: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    UnknownProvider(#[from] UnknownProvider),
    #[error("provider {0} is not configured (missing api key?)")]
    ProviderNotConfigured(ProviderKind),
    #[error("audio: {0}")]
    Audio(#[from] AudioSourceError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("output: {0}")]
    Output(#[from] ResultWriterError),
}
