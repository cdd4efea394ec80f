use async_trait::async_trait;

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
