use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::entity::EntityId;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentPayload {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(custom(function = "crate::utils::validation::present_id"))]
    pub candidate_id: EntityId,
}
