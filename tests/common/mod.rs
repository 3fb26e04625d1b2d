#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use axum::Router;
use jsonwebtoken::{encode, EncodingKey, Header};
use recruitment_dashboard::config::{CollectionBackendKind, CollectionConfig, Config, EmailConfig};
use recruitment_dashboard::dto::candidate_dto::CandidatePayload;
use recruitment_dashboard::models::{InterviewStatus, Level, Technology};
use recruitment_dashboard::services::identity_service::IdentityClaims;
use tokio::net::TcpListener;
use url::Url;

pub const TOKEN_SECRET: &str = "test_identity_secret";

pub fn test_config(collection_url: &str, email_url: &str) -> Config {
    Config {
        server_address: "127.0.0.1:0".into(),
        collections: CollectionConfig {
            backend: CollectionBackendKind::Memory,
            base_url: Url::parse(collection_url).unwrap(),
            overrides: HashMap::new(),
            request_timeout: Duration::from_secs(5),
        },
        email: EmailConfig {
            api_url: Url::parse(email_url).unwrap(),
            user_id: "user_test".into(),
            service_id: "service_test".into(),
            interview_template_id: "template_interview".into(),
            offer_template_id: "template_offer".into(),
            interview_location: "HQ, Room 4".into(),
        },
        identity_token_secret: TOKEN_SECRET.into(),
        log_json: false,
    }
}

pub fn identity_token(uid: &str) -> String {
    let claims = IdentityClaims {
        sub: uid.into(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        email: Some(format!("{}@example.com", uid)),
        name: Some("Test Recruiter".into()),
        picture: None,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TOKEN_SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn candidate_payload(name: &str, email: &str) -> CandidatePayload {
    CandidatePayload {
        name: name.into(),
        phone: "555-0100".into(),
        email: email.into(),
        technology: Technology::DotNet,
        level: Level::Mid,
        experience: "4".into(),
        expected_salary: "75000".into(),
        interview_status: InterviewStatus::Shortlisted,
        references: String::new(),
        notes: None,
        cv: None,
    }
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
