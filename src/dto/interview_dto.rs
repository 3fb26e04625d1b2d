use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::entity::EntityId;
use crate::models::interview_schedule::InterviewSchedule;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSchedulePayload {
    #[validate(custom(function = "crate::utils::validation::present_id"))]
    pub candidate_id: EntityId,
    pub date: DateTime<Utc>,
    #[validate(
        length(min = 1, message = "At least one interviewer is required"),
        custom(function = "crate::utils::validation::interviewer_names")
    )]
    pub interviewers: Vec<String>,
    #[serde(
        default,
        deserialize_with = "super::trim_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInterviewRequest {
    #[serde(flatten)]
    pub schedule: InterviewSchedulePayload,
    #[serde(default = "send_by_default")]
    pub send_invitation: bool,
}

fn send_by_default() -> bool {
    true
}

/// Outcome of the companion email; independent of the stored schedule.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NotificationOutcome {
    Skipped,
    Sent,
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInterviewResponse {
    pub schedule: InterviewSchedule,
    pub invitation: NotificationOutcome,
}
