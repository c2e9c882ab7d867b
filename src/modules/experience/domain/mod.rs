pub mod entities;

pub use entities::ExperienceItem;
