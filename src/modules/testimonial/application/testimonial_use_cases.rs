use std::sync::Arc;

use crate::modules::testimonial::application::ports::incoming::use_cases::{
    CreateTestimonialUseCase, DeleteTestimonialUseCase, GetTestimonialsUseCase,
    UpdateTestimonialUseCase,
};

#[derive(Clone)]
pub struct TestimonialUseCases {
    pub list: Arc<dyn GetTestimonialsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTestimonialUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTestimonialUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTestimonialUseCase + Send + Sync>,
}
