use chrono::Local;
use event_core::parse_schedule;
use validator::{Validate, ValidationErrors};

use crate::{ServiceError, ServiceResult};

#[derive(Clone, Debug, Default, Validate)]
pub struct EventDraft {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub date: String,
    pub time: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub program: Vec<ProgramDraft>,
}

#[derive(Clone, Debug, Default)]
pub struct ProgramDraft {
    pub time: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, Validate)]
pub struct TaskDraft {
    #[validate(length(min = 1))]
    pub start_time: String,
    #[validate(length(min = 1))]
    pub end_time: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub responsible_person: String,
}

fn missing_fields(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    fields
}

/// Checks the required fields of a draft and reports every missing one.
pub fn check_required<T: Validate>(draft: &T) -> ServiceResult<()> {
    if let Err(errors) = draft.validate() {
        return ServiceError::bad_request(format!(
            "missing required fields: {}",
            missing_fields(&errors).join(", ")
        ));
    }
    Ok(())
}

/// The scheduling rule: the combined date and time must parse and must not
/// lie strictly before the current moment.
pub fn check_schedule(date: &str, time: &str) -> ServiceResult<()> {
    let Some(starts_at) = parse_schedule(date, time) else {
        return ServiceError::bad_request("invalid date or time");
    };
    if starts_at < Local::now().naive_local() {
        return ServiceError::bad_request("event must be scheduled at or after the current time");
    }
    Ok(())
}

#[derive(Validate)]
struct EmailValidator {
    #[validate(email)]
    email: String,
}

pub fn validate_email(email: &str) -> ServiceResult<String> {
    let validator = EmailValidator {
        email: email.trim().to_string(),
    };
    if validator.validate().is_err() {
        return ServiceError::unauthorized("Invalid email address");
    }
    Ok(validator.email)
}
