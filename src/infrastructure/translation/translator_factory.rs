use std::sync::Arc;

use reqwest::Client;

use crate::application::ports::Translator;
use crate::presentation::config::{Settings, TranslationProviderSetting, non_empty};

use super::chat_completion_translator::ChatCompletionTranslator;
use super::google_translator::GoogleTranslator;

#[derive(Debug, thiserror::Error)]
pub enum TranslatorFactoryError {
    #[error("API key required for {0:?} translation")]
    MissingApiKey(TranslationProviderSetting),
}

pub struct TranslatorFactory;

impl TranslatorFactory {
    /// `None` when translation is disabled.
    pub fn create(
        settings: &Settings,
        client: &Client,
    ) -> Result<Option<Arc<dyn Translator>>, TranslatorFactoryError> {
        let translation = &settings.translation;
        if !translation.enabled {
            return Ok(None);
        }

        let provider = translation.provider;
        let translator: Arc<dyn Translator> = match provider {
            TranslationProviderSetting::Google => {
                let key = non_empty(&translation.api_key)
                    .or_else(|| non_empty(&settings.google.api_key))
                    .ok_or(TranslatorFactoryError::MissingApiKey(provider))?;
                Arc::new(GoogleTranslator::new(
                    client.clone(),
                    Some(translation.google_url.clone()),
                    key,
                ))
            }
            TranslationProviderSetting::Chat => {
                let key = non_empty(&translation.api_key)
                    .or_else(|| non_empty(&settings.whisper.api_key))
                    .ok_or(TranslatorFactoryError::MissingApiKey(provider))?;
                Arc::new(ChatCompletionTranslator::new(
                    client.clone(),
                    &translation.chat_base_url,
                    key,
                    translation.chat_model.clone(),
                ))
            }
        };

        Ok(Some(translator))
    }
}
