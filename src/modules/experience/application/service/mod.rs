mod create_experience_service;
mod delete_experience_service;
mod get_experiences_service;
mod update_experience_service;

pub use create_experience_service::CreateExperienceService;
pub use delete_experience_service::DeleteExperienceService;
pub use get_experiences_service::GetExperiencesService;
pub use update_experience_service::UpdateExperienceService;

use crate::modules::experience::application::ports::incoming::use_cases::ExperienceError;

const MAX_DATE_LEN: usize = 100;

/// Blank dates are stored as null.
fn normalize_date(date: Option<String>) -> Result<Option<String>, ExperienceError> {
    let Some(date) = date.map(|d| d.trim().to_string()).filter(|d| !d.is_empty()) else {
        return Ok(None);
    };
    if date.chars().count() > MAX_DATE_LEN {
        return Err(ExperienceError::DateTooLong(MAX_DATE_LEN));
    }
    Ok(Some(date))
}
