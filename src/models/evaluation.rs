use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dto::evaluation_dto::EvaluationPayload;
use crate::models::entity::{Entity, EntityId, Scoped, CANDIDATE_FOREIGN_KEY};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub id: EntityId,
    pub candidate_id: EntityId,
    pub behavioral_remarks: String,
    pub technical_remarks: String,
    pub date: NaiveDate,
}

impl Entity for Evaluation {
    const KIND: &'static str = "evaluation";
    const COLLECTION: &'static str = "evaluations";
    type Draft = EvaluationPayload;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn foreign_key(&self, name: &str) -> Option<&EntityId> {
        (name == CANDIDATE_FOREIGN_KEY).then_some(&self.candidate_id)
    }
}

impl Scoped for Evaluation {
    const FOREIGN_KEY: &'static str = CANDIDATE_FOREIGN_KEY;
}
