pub mod translator;

pub use translator::{TranslationError, Translator};
