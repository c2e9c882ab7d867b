pub mod entities;

pub use entities::TestimonialItem;
