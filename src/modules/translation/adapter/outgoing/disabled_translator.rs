use async_trait::async_trait;

use crate::modules::translation::application::ports::outgoing::{TranslationError, Translator};
use crate::modules::translation::domain::Language;

/// Stands in for the provider when `TRANSLATION_ENABLED=false`.
#[derive(Debug, Clone, Default)]
pub struct DisabledTranslator;

#[async_trait]
impl Translator for DisabledTranslator {
    async fn translate(
        &self,
        _text: &str,
        _from: Language,
        _to: Language,
    ) -> Result<String, TranslationError> {
        Err(TranslationError::Disabled)
    }
}
