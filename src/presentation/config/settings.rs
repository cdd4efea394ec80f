use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub provider: String,
    pub input: InputSettings,
    pub output: OutputSettings,
    #[serde(default)]
    pub http: HttpSettings,
    pub deepgram: DeepgramSettings,
    pub whisper: WhisperSettings,
    pub google: GoogleSpeechSettings,
    pub translation: TranslationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    pub audio_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub directory: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpSettings {
    /// No timeout when absent: a stalled vendor stalls the run.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeepgramSettings {
    pub api_key: Option<String>,
    pub url: String,
    pub model: Option<String>,
    pub language: Option<String>,
    pub detect_language: bool,
    pub diarize: bool,
    pub punctuate: bool,
    pub smart_format: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhisperSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub language: Option<String>,
    pub mode: WhisperModeSetting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhisperModeSetting {
    Transcribe,
    Translate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleSpeechSettings {
    pub api_key: Option<String>,
    pub url: String,
    pub language_code: String,
    pub model: Option<String>,
    pub diarize: bool,
    pub punctuate: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationSettings {
    pub enabled: bool,
    pub provider: TranslationProviderSetting,
    pub target_language: String,
    /// Falls back to the Google or Whisper key depending on the provider.
    pub api_key: Option<String>,
    pub google_url: String,
    pub chat_base_url: String,
    pub chat_model: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProviderSetting {
    Google,
    Chat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

/// Treats blank secrets the same as missing ones.
pub(crate) fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
