mod audio_content_type;
mod audio_file;
mod output_name;
mod provider_kind;
mod transcription_request;
mod transcription_result;

pub use audio_content_type::AudioContentType;
pub use audio_file::{AudioFile, base_name_of};
pub use output_name::{OutputName, OutputNaming};
pub use provider_kind::{ProviderKind, UnknownProvider};
pub use transcription_request::{TranscriptionOptions, TranscriptionRequest};
pub use transcription_result::{
    TRANSLATED_TRANSCRIPT_FIELD, TranscriptionResult, is_same_language,
};
