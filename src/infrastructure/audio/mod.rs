mod deepgram_engine;
mod google_speech_engine;
mod local_audio_source;
mod response;
mod transcription_provider_factory;
mod whisper_engine;

pub use deepgram_engine::{DEFAULT_DEEPGRAM_URL, DeepgramEngine};
pub use google_speech_engine::{DEFAULT_GOOGLE_SPEECH_URL, GoogleSpeechEngine};
pub use local_audio_source::LocalAudioSource;
pub use transcription_provider_factory::{
    ConfiguredProvider, ProviderFactoryError, TranscriptionProviderFactory,
};
pub use whisper_engine::{
    DEFAULT_WHISPER_BASE_URL, DEFAULT_WHISPER_MODEL, WhisperEngine, WhisperMode,
};
