use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::{OutputName, TranscriptionResult};

#[async_trait]
pub trait ResultWriter: Send + Sync {
    async fn write(
        &self,
        result: &TranscriptionResult,
        name: &OutputName,
    ) -> Result<PathBuf, ResultWriterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ResultWriterError {
    #[error("could not create output directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}
