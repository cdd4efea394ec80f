use std::path::{Path, PathBuf};

use super::audio_content_type::AudioContentType;

#[derive(Debug, Clone, PartialEq)]
pub struct AudioFile {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub content_type: AudioContentType,
}

impl AudioFile {
    pub fn new(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        let path = path.into();
        let content_type = AudioContentType::from_path(&path);
        Self {
            path,
            bytes,
            content_type,
        }
    }

    /// File name without directory or extension, used to name the output file.
    pub fn base_name(&self) -> String {
        base_name_of(&self.path)
    }

    /// File name including the extension, used for multipart uploads.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .map(String::from)
            .unwrap_or_else(|| format!("audio.{}", self.default_extension()))
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn default_extension(&self) -> &'static str {
        match self.content_type {
            AudioContentType::Wav => "wav",
            AudioContentType::Mpeg => "mp3",
            AudioContentType::Mp4 => "mp4",
            AudioContentType::Flac => "flac",
            AudioContentType::Ogg => "ogg",
        }
    }
}

pub fn base_name_of(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("audio")
        .to_string()
}
