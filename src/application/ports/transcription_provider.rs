use async_trait::async_trait;

use crate::domain::{OutputNaming, ProviderKind, TranscriptionRequest, TranscriptionResult};

#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    fn output_naming(&self) -> OutputNaming;

    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<TranscriptionResult, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("request encoding failed: {0}")]
    Encoding(String),
}
