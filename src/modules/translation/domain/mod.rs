pub mod bilingual;

pub use bilingual::{BilingualText, Language, TranslatableText};
