use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::candidate::{InterviewStatus, Level, Technology};

/// Intake form body; also the create body sent to the candidates collection.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePayload {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub technology: Technology,
    pub level: Level,
    #[validate(length(min = 1, message = "Experience is required"))]
    pub experience: String,
    #[validate(length(min = 1, message = "Expected salary is required"))]
    pub expected_salary: String,
    #[serde(default = "initial_status")]
    pub interview_status: InterviewStatus,
    #[serde(default)]
    pub references: String,
    #[serde(
        default,
        deserialize_with = "super::trim_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::trim_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub cv: Option<String>,
}

fn initial_status() -> InterviewStatus {
    InterviewStatus::Shortlisted
}

/// Query string of `GET /api/candidates`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateQuery {
    pub search: Option<String>,
    pub technology: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusChangeRequest {
    pub status: InterviewStatus,
}
