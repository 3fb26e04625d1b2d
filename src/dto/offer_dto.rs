use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::interview_dto::NotificationOutcome;
use crate::models::entity::EntityId;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OfferTemplatePayload {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOfferRequest {
    pub template_id: EntityId,
    pub candidate_id: EntityId,
    #[validate(length(min = 1, message = "Position is required"))]
    pub position: String,
    /// Falls back to the candidate's expected salary.
    #[validate(length(min = 1, message = "Salary is required"))]
    pub salary: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedOffer {
    pub template_id: EntityId,
    pub candidate_id: EntityId,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendOfferRequest {
    pub candidate_id: EntityId,
    #[validate(length(min = 1, message = "Offer content is required"))]
    pub offer_content: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOfferResponse {
    pub candidate_id: EntityId,
    pub delivery: NotificationOutcome,
}
