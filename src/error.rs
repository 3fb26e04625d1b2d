use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::models::entity::EntityId;
use crate::services::workflow_service::TransitionError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Remote call failed for {entity}{}: {message}", id_suffix(.id))]
    RemoteCallFailed {
        entity: &'static str,
        id: Option<EntityId>,
        status: Option<u16>,
        message: String,
    },

    #[error("Transition rejected: {0}")]
    TransitionRejected(#[from] TransitionError),

    #[error("Email delivery failed for template {template}: {message}")]
    EmailDeliveryFailed {
        template: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config(_) => "config",
            Error::BadRequest(_) => "bad_request",
            Error::Unauthorized(_) => "unauthorized",
            Error::NotFound { .. } => "not_found",
            Error::RemoteCallFailed { .. } => "remote_call_failed",
            Error::TransitionRejected(TransitionError::BackwardTransition { .. }) => {
                "backward_transition"
            }
            Error::TransitionRejected(TransitionError::InvalidTerminalTransition { .. }) => {
                "invalid_terminal_transition"
            }
            Error::EmailDeliveryFailed { .. } => "email_delivery_failed",
            Error::Validation(_) => "validation",
            Error::Json(_) => "json",
            Error::Internal(_) => "internal",
        }
    }

    pub fn remote(
        entity: &'static str,
        id: Option<&EntityId>,
        status: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        Error::RemoteCallFailed {
            entity,
            id: id.cloned(),
            status,
            message: message.into(),
        }
    }
}

fn id_suffix(id: &Option<EntityId>) -> String {
    id.as_ref().map(|i| format!(" {}", i)).unwrap_or_default()
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            Error::BadRequest(_) | Error::Validation(_) | Error::Json(_) => StatusCode::BAD_REQUEST,
            Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::TransitionRejected(_) => StatusCode::CONFLICT,
            Error::RemoteCallFailed { .. } | Error::EmailDeliveryFailed { .. } => {
                StatusCode::BAD_GATEWAY
            }
            Error::Config(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            Error::Config(_) | Error::Internal(_) => "An unexpected error occurred".to_string(),
            other => other.to_string(),
        };

        let body = Json(json!({ "error": message, "kind": self.kind() }));
        (status, body).into_response()
    }
}
