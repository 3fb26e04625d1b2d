use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::entity::EntityId;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationPayload {
    #[validate(custom(function = "crate::utils::validation::present_id"))]
    pub candidate_id: EntityId,
    #[validate(length(min = 1, message = "Behavioral remarks are required"))]
    pub behavioral_remarks: String,
    #[validate(length(min = 1, message = "Technical remarks are required"))]
    pub technical_remarks: String,
    #[serde(default = "crate::utils::time::today")]
    pub date: NaiveDate,
}
