pub mod entities;

pub use entities::{AboutSection, DEFAULT_ABOUT_CONTENT};
