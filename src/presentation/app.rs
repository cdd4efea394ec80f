use std::sync::Arc;

use crate::application::services::TranscriptionDispatcher;
use crate::domain::ProviderKind;
use crate::infrastructure::audio::{
    LocalAudioSource, ProviderFactoryError, TranscriptionProviderFactory,
};
use crate::infrastructure::http_client::build_http_client;
use crate::infrastructure::storage::JsonFileWriter;
use crate::infrastructure::translation::{TranslatorFactory, TranslatorFactoryError};

use super::config::Settings;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("http client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("translation: {0}")]
    Translator(#[from] TranslatorFactoryError),
}

/// Wires every provider that has credentials. Providers without a key are left
/// out and reported by the dispatcher only if selected.
pub fn build_dispatcher(settings: &Settings) -> Result<TranscriptionDispatcher, BootstrapError> {
    let client = build_http_client(&settings.http)?;

    let mut dispatcher = TranscriptionDispatcher::new(
        Arc::new(LocalAudioSource),
        Arc::new(JsonFileWriter::new(settings.output.directory.clone())),
    );

    for kind in ProviderKind::ALL {
        match TranscriptionProviderFactory::create(kind, settings, &client) {
            Ok(configured) => {
                dispatcher = dispatcher.with_provider(configured.provider, configured.options);
            }
            Err(ProviderFactoryError::MissingApiKey(_)) => {
                tracing::debug!(provider = %kind, "No API key, provider not registered");
            }
        }
    }

    if let Some(translator) = TranslatorFactory::create(settings, &client)? {
        dispatcher =
            dispatcher.with_translator(translator, settings.translation.target_language.clone());
    }

    Ok(dispatcher)
}
