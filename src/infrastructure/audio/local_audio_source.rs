use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{AudioSource, AudioSourceError};
use crate::domain::AudioFile;

/// Reads the whole input file from local disk.
pub struct LocalAudioSource;

#[async_trait]
impl AudioSource for LocalAudioSource {
    async fn load(&self, path: &Path) -> Result<AudioFile, AudioSourceError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AudioSourceError::NotFound(path.to_path_buf()),
            _ => AudioSourceError::Read {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        Ok(AudioFile::new(path, bytes))
    }
}
