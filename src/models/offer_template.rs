use serde::{Deserialize, Serialize};

use crate::dto::offer_dto::OfferTemplatePayload;
use crate::models::entity::{Entity, EntityId};

/// Offer letter text with `{{name}}`, `{{position}}` and `{{salary}}` slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfferTemplate {
    pub id: EntityId,
    pub title: String,
    pub content: String,
}

impl Entity for OfferTemplate {
    const KIND: &'static str = "offer template";
    const COLLECTION: &'static str = "offerTemplates";
    type Draft = OfferTemplatePayload;

    fn id(&self) -> &EntityId {
        &self.id
    }
}
