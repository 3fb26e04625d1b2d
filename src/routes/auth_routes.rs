use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::auth_dto::{SessionResponse, SignInRequest},
    error::{Error, Result},
    AppState,
};

/// Current auth mirror: who is signed in, whether a change is in flight and
/// the last sign-in failure.
#[axum::debug_handler]
pub async fn get_session(State(state): State<AppState>) -> impl IntoResponse {
    let auth = state.store.auth.snapshot();
    Json(SessionResponse {
        user: auth.user,
        loading: auth.loading,
        error: auth.error,
    })
}

#[axum::debug_handler]
pub async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<SignInRequest>,
) -> Result<impl IntoResponse> {
    if payload.id_token.trim().is_empty() {
        return Err(Error::BadRequest("idToken is required".to_string()));
    }
    let user = state.identity_service.sign_in(payload.id_token.trim())?;
    Ok(Json(SessionResponse {
        user: Some(user),
        loading: false,
        error: None,
    }))
}

#[axum::debug_handler]
pub async fn sign_out(State(state): State<AppState>) -> impl IntoResponse {
    state.identity_service.sign_out();
    StatusCode::NO_CONTENT
}
