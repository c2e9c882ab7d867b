pub mod entities;

pub use entities::{default_subtitle, default_title, HeroSection};
