pub mod assessment_routes;
pub mod auth_routes;
pub mod candidate_routes;
pub mod dashboard_routes;
pub mod evaluation_routes;
pub mod health;
pub mod interview_routes;
pub mod offer_routes;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::middleware::auth::require_identity;
use crate::AppState;

/// Every route of the dashboard API. Layers for tracing and CORS are added by
/// the binary.
pub fn router(state: AppState) -> Router {
    let public_api = Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/auth/session",
            get(auth_routes::get_session)
                .post(auth_routes::sign_in)
                .delete(auth_routes::sign_out),
        );

    let dashboard_api = Router::new()
        .route(
            "/api/candidates",
            get(candidate_routes::list_candidates).post(candidate_routes::create_candidate),
        )
        .route(
            "/api/candidates/:id",
            get(candidate_routes::get_candidate)
                .put(candidate_routes::update_candidate)
                .delete(candidate_routes::delete_candidate),
        )
        .route(
            "/api/candidates/:id/status",
            post(candidate_routes::update_candidate_status),
        )
        .route(
            "/api/candidates/:id/assessments",
            get(candidate_routes::get_candidate_assessments),
        )
        .route(
            "/api/candidates/:id/evaluations",
            get(candidate_routes::get_candidate_evaluations),
        )
        .route(
            "/api/candidates/:id/interviews",
            get(candidate_routes::get_candidate_interviews),
        )
        .route(
            "/api/assessments",
            get(assessment_routes::list_assessments).post(assessment_routes::create_assessment),
        )
        .route(
            "/api/assessments/:id",
            put(assessment_routes::update_assessment).delete(assessment_routes::delete_assessment),
        )
        .route(
            "/api/evaluations",
            get(evaluation_routes::list_evaluations).post(evaluation_routes::create_evaluation),
        )
        .route(
            "/api/evaluations/:id",
            put(evaluation_routes::update_evaluation),
        )
        .route(
            "/api/interviews",
            get(interview_routes::list_interviews).post(interview_routes::schedule_interview),
        )
        .route(
            "/api/interviews/:id",
            put(interview_routes::update_interview).delete(interview_routes::delete_interview),
        )
        .route(
            "/api/offer-templates",
            get(offer_routes::list_offer_templates).post(offer_routes::create_offer_template),
        )
        .route(
            "/api/offer-templates/:id",
            put(offer_routes::update_offer_template).delete(offer_routes::delete_offer_template),
        )
        .route("/api/offers/generate", post(offer_routes::generate_offer))
        .route("/api/offers/send", post(offer_routes::send_offer))
        .route(
            "/api/dashboard/stats",
            get(dashboard_routes::get_dashboard_stats),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.identity_service.clone(),
            require_identity,
        ));

    Router::new()
        .merge(public_api)
        .merge(dashboard_api)
        .with_state(state)
}
