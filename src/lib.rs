pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::services::{
    candidate_service::CandidateService, collection_service::CollectionBackend,
    dashboard_service::DashboardService, email_service::EmailService,
    identity_service::IdentityService, interview_service::InterviewService,
    offer_service::OfferService,
};
use crate::store::AppStore;
use reqwest::Client;

#[derive(Clone)]
pub struct AppState {
    pub backend: CollectionBackend,
    pub store: AppStore,
    pub candidate_service: CandidateService,
    pub identity_service: IdentityService,
    pub interview_service: InterviewService,
    pub offer_service: OfferService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.collections.request_timeout)
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {}", e)))?;
        let backend = CollectionBackend::from_config(http_client.clone(), &config.collections);
        Ok(Self::with_backend(config, http_client, backend))
    }

    /// Wires every service around an already chosen collection backend.
    pub fn with_backend(config: &Config, http_client: Client, backend: CollectionBackend) -> Self {
        let store = AppStore::new(backend.clone());

        let email_service = EmailService::new(http_client, config.email.clone());
        let identity_service =
            IdentityService::new(&config.identity_token_secret, store.auth.clone());
        let candidate_service = CandidateService::new(store.clone());
        let interview_service = InterviewService::new(store.clone(), email_service.clone());
        let offer_service = OfferService::new(store.clone(), email_service);
        let dashboard_service = DashboardService::new(store.clone());

        Self {
            backend,
            store,
            candidate_service,
            identity_service,
            interview_service,
            offer_service,
            dashboard_service,
        }
    }
}
