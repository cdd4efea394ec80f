mod audio_source;
mod result_writer;
mod transcription_provider;
mod translator;

pub use audio_source::{AudioSource, AudioSourceError};
pub use result_writer::{ResultWriter, ResultWriterError};
pub use transcription_provider::{TranscriptionError, TranscriptionProvider};
pub use translator::{TranslationError, Translator};
