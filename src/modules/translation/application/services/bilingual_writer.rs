use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::modules::translation::application::ports::outgoing::{TranslationError, Translator};
use crate::modules::translation::domain::{BilingualText, Language, TranslatableText};
use crate::shared::patch::PatchField;

/// Turns admin-entered English into stored `{en, ar}` pairs.
///
/// Translation never fails a write: when the provider is unavailable the
/// Arabic side falls back to the English text.
#[derive(Clone)]
pub struct BilingualWriter {
    translator: Arc<dyn Translator>,
}

impl BilingualWriter {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    pub async fn to_arabic(&self, english: &str) -> String {
        if english.trim().is_empty() {
            return String::new();
        }

        match self
            .translator
            .translate(english, Language::English, Language::Arabic)
            .await
        {
            Ok(arabic) => arabic,
            Err(TranslationError::Disabled) => {
                debug!("Translation disabled, storing English text as Arabic");
                english.to_string()
            }
            Err(e) => {
                warn!(error = %e, "Translation failed, storing English text as Arabic");
                english.to_string()
            }
        }
    }

    pub async fn resolve(&self, text: TranslatableText) -> BilingualText {
        if let Some(arabic) = text.supplied_arabic() {
            return BilingualText::new(text.english(), arabic);
        }

        let english = text.english().to_string();
        let arabic = self.to_arabic(&english).await;
        BilingualText::new(english, arabic)
    }

    /// Resolves several fields concurrently; output order matches input order.
    pub async fn resolve_all(&self, texts: Vec<TranslatableText>) -> Vec<BilingualText> {
        join_all(texts.into_iter().map(|text| self.resolve(text))).await
    }

    /// Blank optional text is stored as nothing rather than an empty pair.
    pub async fn resolve_optional(&self, text: Option<TranslatableText>) -> Option<BilingualText> {
        match text {
            Some(text) if !text.is_blank() => Some(self.resolve(text).await),
            _ => None,
        }
    }

    /// Partial-update form of [`resolve_optional`](Self::resolve_optional):
    /// a blank value clears the stored field.
    pub async fn resolve_nullable_patch(
        &self,
        field: PatchField<TranslatableText>,
    ) -> PatchField<BilingualText> {
        match field {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(text) if text.is_blank() => PatchField::Null,
            PatchField::Value(text) => PatchField::Value(self.resolve(text).await),
        }
    }

    pub async fn resolve_patch(&self, field: Option<TranslatableText>) -> Option<BilingualText> {
        match field {
            Some(text) => Some(self.resolve(text).await),
            None => None,
        }
    }
}
