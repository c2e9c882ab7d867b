pub mod disabled_translator;
pub mod google_translator;

pub use disabled_translator::DisabledTranslator;
pub use google_translator::{GoogleTranslator, TranslatorConfig};
