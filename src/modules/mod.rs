pub mod about;
pub mod auth;
pub mod contact;
pub mod email;
pub mod experience;
pub mod gallery;
pub mod hero;
pub mod journey;
pub mod media;
pub mod testimonial;
pub mod translation;
