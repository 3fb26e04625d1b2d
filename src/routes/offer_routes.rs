use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::offer_dto::{GenerateOfferRequest, OfferTemplatePayload, SendOfferRequest},
    error::Result,
    models::{entity::EntityId, OfferTemplate},
    utils::validation::validate,
    AppState,
};

#[axum::debug_handler]
pub async fn list_offer_templates(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let templates = state.store.offer_templates.list_all().await?;
    Ok(Json(templates))
}

#[axum::debug_handler]
pub async fn create_offer_template(
    State(state): State<AppState>,
    Json(payload): Json<OfferTemplatePayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let template = state.store.offer_templates.create(&payload).await?;
    tracing::info!(id = %template.id, title = %template.title, "offer template added");
    Ok((StatusCode::CREATED, Json(template)))
}

#[axum::debug_handler]
pub async fn update_offer_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<OfferTemplatePayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let record = OfferTemplate {
        id: EntityId::parse(&id),
        title: payload.title,
        content: payload.content,
    };
    let template = state.store.offer_templates.update(&record).await?;
    tracing::info!(id = %template.id, "offer template updated");
    Ok(Json(template))
}

#[axum::debug_handler]
pub async fn delete_offer_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = EntityId::parse(&id);
    state.store.offer_templates.delete(&id).await?;
    tracing::info!(%id, "offer template deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn generate_offer(
    State(state): State<AppState>,
    Json(payload): Json<GenerateOfferRequest>,
) -> Result<impl IntoResponse> {
    let offer = state.offer_service.generate(payload).await?;
    Ok(Json(offer))
}

#[axum::debug_handler]
pub async fn send_offer(
    State(state): State<AppState>,
    Json(payload): Json<SendOfferRequest>,
) -> Result<impl IntoResponse> {
    let response = state.offer_service.send(payload).await?;
    Ok(Json(response))
}
