use async_trait::async_trait;

use crate::modules::translation::domain::Language;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationError {
    #[error("Translation is disabled")]
    Disabled,

    #[error("Translation request failed: {0}")]
    Request(String),

    #[error("Translation provider returned status {0}")]
    Status(u16),

    #[error("Unexpected translation response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String, TranslationError>;
}
