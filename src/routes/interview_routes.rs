use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::interview_dto::{InterviewSchedulePayload, ScheduleInterviewRequest},
    error::Result,
    models::entity::EntityId,
    AppState,
};

#[axum::debug_handler]
pub async fn list_interviews(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let schedules = state.interview_service.list().await?;
    Ok(Json(schedules))
}

/// 201 once the schedule is stored, whatever happened to the invitation.
#[axum::debug_handler]
pub async fn schedule_interview(
    State(state): State<AppState>,
    Json(payload): Json<ScheduleInterviewRequest>,
) -> Result<impl IntoResponse> {
    let response = state.interview_service.schedule(payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[axum::debug_handler]
pub async fn update_interview(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<InterviewSchedulePayload>,
) -> Result<impl IntoResponse> {
    let schedule = state
        .interview_service
        .update(&EntityId::parse(&id), payload)
        .await?;
    Ok(Json(schedule))
}

#[axum::debug_handler]
pub async fn delete_interview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    state.interview_service.delete(&EntityId::parse(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
