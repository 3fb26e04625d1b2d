use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::assessment_dto::AssessmentPayload,
    error::{Error, Result},
    models::{entity::EntityId, Assessment, InterviewStatus},
    utils::validation::validate,
    AppState,
};

/// Hired candidates are past the assessment stage.
async fn ensure_assignable(state: &AppState, candidate_id: &EntityId) -> Result<()> {
    let candidate = state.store.candidates.get_or_fetch(candidate_id).await?;
    if candidate.interview_status == InterviewStatus::Hired {
        return Err(Error::BadRequest(format!(
            "Candidate {} is already hired; assessments cannot be assigned",
            candidate.id
        )));
    }
    Ok(())
}

#[axum::debug_handler]
pub async fn list_assessments(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let assessments = state.store.assessments.list_all().await?;
    Ok(Json(assessments))
}

#[axum::debug_handler]
pub async fn create_assessment(
    State(state): State<AppState>,
    Json(payload): Json<AssessmentPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    ensure_assignable(&state, &payload.candidate_id).await?;
    let assessment = state.store.assessments.create(&payload).await?;
    tracing::info!(id = %assessment.id, candidate = %assessment.candidate_id, "assessment added");
    Ok((StatusCode::CREATED, Json(assessment)))
}

#[axum::debug_handler]
pub async fn update_assessment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AssessmentPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    ensure_assignable(&state, &payload.candidate_id).await?;
    let record = Assessment {
        id: EntityId::parse(&id),
        title: payload.title,
        description: payload.description,
        candidate_id: payload.candidate_id,
    };
    let assessment = state.store.assessments.update(&record).await?;
    tracing::info!(id = %assessment.id, "assessment updated");
    Ok(Json(assessment))
}

#[axum::debug_handler]
pub async fn delete_assessment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = EntityId::parse(&id);
    state.store.assessments.delete(&id).await?;
    tracing::info!(%id, "assessment deleted");
    Ok(StatusCode::NO_CONTENT)
}
