use super::audio_content_type::AudioContentType;
use super::audio_file::AudioFile;

/// Provider-specific knobs. Each adapter forwards the ones its vendor understands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranscriptionOptions {
    pub model: Option<String>,
    pub language: Option<String>,
    pub detect_language: bool,
    pub diarize: bool,
    pub punctuate: bool,
    pub smart_format: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionRequest {
    pub audio: Vec<u8>,
    pub file_name: String,
    pub content_type: AudioContentType,
    pub options: TranscriptionOptions,
}

impl TranscriptionRequest {
    pub fn new(audio: AudioFile, options: TranscriptionOptions) -> Self {
        let file_name = audio.file_name();
        Self {
            audio: audio.bytes,
            file_name,
            content_type: audio.content_type,
            options,
        }
    }
}
