use std::fmt;
use std::path::Path;

/// MIME type sent alongside the audio payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioContentType {
    Wav,
    Mpeg,
    Mp4,
    Flac,
    Ogg,
}

impl AudioContentType {
    /// Looks the extension up in the fixed table, falling back to `audio/wav`.
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "wav" => Self::Wav,
            "mp3" => Self::Mpeg,
            "mp4" => Self::Mp4,
            "flac" => Self::Flac,
            "ogg" => Self::Ogg,
            _ => Self::Wav,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::Wav)
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mpeg => "audio/mpeg",
            Self::Mp4 => "audio/mp4",
            Self::Flac => "audio/flac",
            Self::Ogg => "audio/ogg",
        }
    }
}

impl fmt::Display for AudioContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_mime())
    }
}
