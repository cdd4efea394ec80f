mod environment;
mod load;
mod settings;

pub use environment::Environment;
pub use load::{load_settings, load_settings_from};
pub use settings::{
    DeepgramSettings, GoogleSpeechSettings, HttpSettings, InputSettings, LoggingSettings,
    OutputSettings, Settings, TranslationProviderSetting, TranslationSettings, WhisperModeSetting,
    WhisperSettings,
};

pub(crate) use settings::non_empty;
