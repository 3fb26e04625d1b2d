use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::interview_dto::InterviewSchedulePayload;
use crate::models::entity::{Entity, EntityId, Scoped, CANDIDATE_FOREIGN_KEY};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSchedule {
    pub id: EntityId,
    pub candidate_id: EntityId,
    pub date: DateTime<Utc>,
    pub interviewers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Entity for InterviewSchedule {
    const KIND: &'static str = "interview schedule";
    const COLLECTION: &'static str = "interviewSchedules";
    type Draft = InterviewSchedulePayload;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn foreign_key(&self, name: &str) -> Option<&EntityId> {
        (name == CANDIDATE_FOREIGN_KEY).then_some(&self.candidate_id)
    }
}

impl Scoped for InterviewSchedule {
    const FOREIGN_KEY: &'static str = CANDIDATE_FOREIGN_KEY;
}
