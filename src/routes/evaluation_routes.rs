use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::evaluation_dto::EvaluationPayload,
    error::Result,
    models::{entity::EntityId, Evaluation},
    utils::validation::validate,
    AppState,
};

#[axum::debug_handler]
pub async fn list_evaluations(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let evaluations = state.store.evaluations.list_all().await?;
    Ok(Json(evaluations))
}

#[axum::debug_handler]
pub async fn create_evaluation(
    State(state): State<AppState>,
    Json(payload): Json<EvaluationPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let evaluation = state.store.evaluations.create(&payload).await?;
    tracing::info!(id = %evaluation.id, candidate = %evaluation.candidate_id, "evaluation recorded");
    Ok((StatusCode::CREATED, Json(evaluation)))
}

#[axum::debug_handler]
pub async fn update_evaluation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<EvaluationPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let record = Evaluation {
        id: EntityId::parse(&id),
        candidate_id: payload.candidate_id,
        behavioral_remarks: payload.behavioral_remarks,
        technical_remarks: payload.technical_remarks,
        date: payload.date,
    };
    let evaluation = state.store.evaluations.update(&record).await?;
    tracing::info!(id = %evaluation.id, "evaluation updated");
    Ok(Json(evaluation))
}
