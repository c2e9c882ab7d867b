use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Arabic,
}

impl Language {
    /// ISO 639-1 code understood by translation providers.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }
}

/// A public-facing text stored in both site languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BilingualText {
    pub en: String,
    pub ar: String,
}

impl BilingualText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// Same text on both sides, used when no translation is available.
    pub fn mirrored(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            ar: text.clone(),
            en: text,
        }
    }

    /// JSONB column representation: `{"en": ..., "ar": ...}`.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({ "en": self.en, "ar": self.ar })
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// Text as submitted by an admin.
///
/// Either plain English (`"Hello"`) or an explicit pair
/// (`{"en": "Hello", "ar": "..."}`). A pair with a blank or missing `ar`
/// behaves like plain English.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum TranslatableText {
    Plain(String),
    Pair {
        en: String,
        #[serde(default)]
        ar: Option<String>,
    },
}

impl TranslatableText {
    pub fn english(&self) -> &str {
        match self {
            TranslatableText::Plain(en) => en,
            TranslatableText::Pair { en, .. } => en,
        }
    }

    /// Arabic supplied by the caller, if any was actually written.
    pub fn supplied_arabic(&self) -> Option<&str> {
        match self {
            TranslatableText::Pair { ar: Some(ar), .. } if !ar.trim().is_empty() => Some(ar),
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.english().trim().is_empty()
    }
}

impl From<&str> for TranslatableText {
    fn from(value: &str) -> Self {
        TranslatableText::Plain(value.to_string())
    }
}
