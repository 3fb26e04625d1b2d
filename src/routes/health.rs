use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::{services::collection_service::CollectionBackend, AppState};

#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let backend = match &state.backend {
        CollectionBackend::Http(_) => "http",
        CollectionBackend::Memory(_) => "memory",
    };
    let body = json!({
        "status": "ok",
        "collections": backend,
    });
    (StatusCode::OK, Json(body))
}
