pub mod image_replacement;

pub use image_replacement::replace_image;
