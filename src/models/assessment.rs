use serde::{Deserialize, Serialize};

use crate::dto::assessment_dto::AssessmentPayload;
use crate::models::entity::{Entity, EntityId, Scoped, CANDIDATE_FOREIGN_KEY};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub candidate_id: EntityId,
}

impl Entity for Assessment {
    const KIND: &'static str = "assessment";
    const COLLECTION: &'static str = "assessments";
    type Draft = AssessmentPayload;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn foreign_key(&self, name: &str) -> Option<&EntityId> {
        (name == CANDIDATE_FOREIGN_KEY).then_some(&self.candidate_id)
    }
}

impl Scoped for Assessment {
    const FOREIGN_KEY: &'static str = CANDIDATE_FOREIGN_KEY;
}
