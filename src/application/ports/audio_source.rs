use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::AudioFile;

#[async_trait]
pub trait AudioSource: Send + Sync {
    async fn load(&self, path: &Path) -> Result<AudioFile, AudioSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioSourceError {
    #[error("audio file not found: {0}")]
    NotFound(PathBuf),
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
}
