use std::collections::HashMap;
use std::path::Path;

use config::{Config, ConfigError, File, FileFormat};

use crate::infrastructure::audio::{
    DEFAULT_DEEPGRAM_URL, DEFAULT_GOOGLE_SPEECH_URL, DEFAULT_WHISPER_BASE_URL,
    DEFAULT_WHISPER_MODEL,
};
use crate::infrastructure::translation::DEFAULT_GOOGLE_TRANSLATE_URL;

use super::{Environment, Settings};

/// Unprefixed variables accepted from older `.env` files, mapped onto settings keys.
const LEGACY_VARIABLES: [(&str, &str); 9] = [
    ("TRANSCRIPTION_PROVIDER", "provider"),
    ("DG_API_KEY", "deepgram.api_key"),
    ("DG_URL", "deepgram.url"),
    ("OPENAI_API_KEY", "whisper.api_key"),
    ("OPENAI_BASE_URL", "whisper.base_url"),
    ("GOOGLE_API_KEY", "google.api_key"),
    ("GOOGLE_SPEECH_URL", "google.url"),
    ("TRANSLATION_API_KEY", "translation.api_key"),
    ("AUDIO_FILE_PATH", "input.audio_path"),
];

/// Loads settings from the working directory and the process environment.
pub fn load_settings(environment: Environment) -> Result<Settings, ConfigError> {
    let vars: HashMap<String, String> = std::env::vars().collect();
    load_settings_from(environment, Path::new("."), &vars)
}

/// Defaults, then `appsettings.<env>.toml` in `config_dir`, then `SCRIBE__*`
/// variables, then the legacy flat variables. Later layers win.
pub fn load_settings_from(
    environment: Environment,
    config_dir: &Path,
    vars: &HashMap<String, String>,
) -> Result<Settings, ConfigError> {
    let settings_file = config_dir.join(environment.settings_file_name());

    let mut builder = Config::builder()
        .set_default("provider", "dg")?
        .set_default("input.audio_path", "audio/output7-ch.mp3")?
        .set_default("output.directory", "output")?
        .set_default("deepgram.url", DEFAULT_DEEPGRAM_URL)?
        .set_default("deepgram.detect_language", false)?
        .set_default("deepgram.diarize", false)?
        .set_default("deepgram.punctuate", false)?
        .set_default("deepgram.smart_format", false)?
        .set_default("whisper.base_url", DEFAULT_WHISPER_BASE_URL)?
        .set_default("whisper.model", DEFAULT_WHISPER_MODEL)?
        .set_default("whisper.mode", "transcribe")?
        .set_default("google.url", DEFAULT_GOOGLE_SPEECH_URL)?
        .set_default("google.language_code", "en-US")?
        .set_default("google.diarize", false)?
        .set_default("google.punctuate", true)?
        .set_default("translation.enabled", false)?
        .set_default("translation.provider", "google")?
        .set_default("translation.target_language", "en")?
        .set_default("translation.google_url", DEFAULT_GOOGLE_TRANSLATE_URL)?
        .set_default("translation.chat_base_url", DEFAULT_WHISPER_BASE_URL)?
        .set_default("translation.chat_model", "gpt-4o-mini")?
        .set_default("logging.level", "info")?
        .set_default("logging.json", false)?
        .add_source(
            File::from(settings_file.as_path())
                .format(FileFormat::Toml)
                .required(false),
        )
        .add_source(
            config::Environment::with_prefix("SCRIBE")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars.clone())),
        );

    for (variable, key) in LEGACY_VARIABLES {
        let value = vars.get(variable).filter(|v| !v.trim().is_empty()).cloned();
        builder = builder.set_override_option(key, value)?;
    }

    builder.build()?.try_deserialize()
}
