use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::candidate::{Candidate, InterviewStatus};
use crate::models::entity::EntityId;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: InterviewStatus,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSummary {
    pub schedule_id: EntityId,
    pub candidate_id: EntityId,
    pub candidate_name: String,
    pub date: DateTime<Utc>,
    pub interviewers: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_candidates: usize,
    pub status_counts: Vec<StatusCount>,
    pub today_interviews: Vec<InterviewSummary>,
    pub upcoming_interviews: Vec<InterviewSummary>,
    pub recent_candidates: Vec<Candidate>,
}
