use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::candidate_dto::{CandidatePayload, CandidateQuery, StatusChangeRequest},
    error::Result,
    models::entity::EntityId,
    AppState,
};

#[axum::debug_handler]
pub async fn list_candidates(
    State(state): State<AppState>,
    Query(query): Query<CandidateQuery>,
) -> Result<impl IntoResponse> {
    let candidates = state.candidate_service.list(&query).await?;
    Ok(Json(candidates))
}

#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CandidatePayload>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

#[axum::debug_handler]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.get(&EntityId::parse(&id)).await?;
    Ok(Json(candidate))
}

#[axum::debug_handler]
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CandidatePayload>,
) -> Result<impl IntoResponse> {
    let candidate = state
        .candidate_service
        .update(&EntityId::parse(&id), payload)
        .await?;
    Ok(Json(candidate))
}

#[axum::debug_handler]
pub async fn update_candidate_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusChangeRequest>,
) -> Result<impl IntoResponse> {
    let candidate = state
        .candidate_service
        .change_status(&EntityId::parse(&id), payload.status)
        .await?;
    Ok(Json(candidate))
}

#[axum::debug_handler]
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    state.candidate_service.delete(&EntityId::parse(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn get_candidate_assessments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let assessments = state
        .candidate_service
        .assessments(&EntityId::parse(&id))
        .await?;
    Ok(Json(assessments))
}

#[axum::debug_handler]
pub async fn get_candidate_evaluations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let evaluations = state
        .candidate_service
        .evaluations(&EntityId::parse(&id))
        .await?;
    Ok(Json(evaluations))
}

#[axum::debug_handler]
pub async fn get_candidate_interviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let interviews = state
        .candidate_service
        .interviews(&EntityId::parse(&id))
        .await?;
    Ok(Json(interviews))
}
