pub mod entities;

pub use entities::JourneyItem;
