mod common;

use std::collections::HashMap;
use std::time::Duration;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use reqwest::Client;
use serde_json::{json, Value as JsonValue};
use url::Url;

use recruitment_dashboard::error::Error;
use recruitment_dashboard::models::{Assessment, Candidate, EntityId, InterviewStatus};
use recruitment_dashboard::services::collection_service::{CollectionApi, HttpCollectionApi};
use recruitment_dashboard::store::Store;

use common::{candidate_payload, spawn_server};

fn stored_candidate(id: JsonValue) -> JsonValue {
    json!({
        "id": id,
        "name": "Ann Lee",
        "phone": "555-0101",
        "email": "ann@example.com",
        "technology": "QA",
        "level": "Junior",
        "experience": "2",
        "expectedSalary": "45000",
        "interviewStatus": "Shortlisted",
        "references": ""
    })
}

async fn get_candidate(Path(id): Path<String>) -> impl IntoResponse {
    match id.as_str() {
        "1" => (StatusCode::OK, Json(stored_candidate(json!(1)))).into_response(),
        "abc" => (StatusCode::OK, Json(stored_candidate(json!("abc")))).into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

async fn put_candidate(Json(body): Json<JsonValue>) -> impl IntoResponse {
    if body["name"] == "Slow" {
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
    Json(body)
}

async fn delete_candidate() -> impl IntoResponse {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn create_candidate(Json(mut body): Json<JsonValue>) -> impl IntoResponse {
    body["id"] = json!(10);
    (StatusCode::CREATED, Json(body))
}

async fn list_assessments(Query(query): Query<HashMap<String, String>>) -> impl IntoResponse {
    let all = vec![
        json!({"id": 1, "title": "A", "description": "d", "candidateId": 1}),
        json!({"id": 2, "title": "B", "description": "d", "candidateId": "2"}),
    ];
    let filtered: Vec<JsonValue> = match query.get("candidateId") {
        Some(value) => all
            .into_iter()
            .filter(|a| match &a["candidateId"] {
                JsonValue::String(s) => s == value,
                other => other.to_string() == *value,
            })
            .collect(),
        None => all,
    };
    Json(filtered)
}

async fn store_server() -> String {
    let app = Router::new()
        .route(
            "/candidates",
            get(|| async { Json(vec![stored_candidate(json!(1))]) }).post(create_candidate),
        )
        .route(
            "/candidates/:id",
            get(get_candidate).put(put_candidate).delete(delete_candidate),
        )
        .route("/assessments", get(list_assessments));
    spawn_server(app).await
}

fn api(base: &str) -> HttpCollectionApi {
    HttpCollectionApi::new(Client::new(), Url::parse(base).unwrap())
}

#[tokio::test]
async fn reads_lists_and_records() {
    let base = store_server().await;
    let api = api(&base);

    let all: Vec<Candidate> = api.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, EntityId::Number(1));

    let by_text: Candidate = api.get(&EntityId::from("abc")).await.unwrap();
    assert_eq!(by_text.id, EntityId::Text("abc".into()));
}

#[tokio::test]
async fn missing_record_is_not_found() {
    let base = store_server().await;
    let api = api(&base);

    let err = api.get::<Candidate>(&EntityId::Number(42)).await.unwrap_err();
    match err {
        Error::NotFound { entity, id } => {
            assert_eq!(entity, "candidate");
            assert_eq!(id, EntityId::Number(42));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn scoped_fetch_sends_foreign_key_query() {
    let base = store_server().await;
    let api = api(&base);

    let scoped: Vec<Assessment> = api.list_by(&EntityId::Number(2)).await.unwrap();
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].title, "B");
}

#[tokio::test]
async fn create_and_update_round_trip_through_the_store() {
    let base = store_server().await;
    let store = Store::new(api(&base));

    let created = store
        .candidates
        .create(&candidate_payload("Cara Diaz", "cara@example.com"))
        .await
        .unwrap();
    assert_eq!(created.id, EntityId::Number(10));
    assert_eq!(store.candidates.items().len(), 1);

    let moved = Candidate {
        interview_status: InterviewStatus::FirstInterviewComplete,
        ..created
    };
    let saved = store.candidates.update(&moved).await.unwrap();
    assert_eq!(saved.interview_status, InterviewStatus::FirstInterviewComplete);
}

#[tokio::test]
async fn overlapping_updates_last_to_resolve_wins() {
    let base = store_server().await;
    let store = Store::new(api(&base));
    let current = store.candidates.list_all().await.unwrap().remove(0);

    let slow = Candidate {
        name: "Slow".into(),
        ..current.clone()
    };
    let fast = Candidate {
        name: "Fast".into(),
        ..current.clone()
    };

    let (slow_saved, (fast_saved, after_fast)) = tokio::join!(
        store.candidates.update(&slow),
        async {
            let saved = store.candidates.update(&fast).await;
            (saved, store.candidates.snapshot())
        }
    );
    assert_eq!(fast_saved.unwrap().name, "Fast");
    assert_eq!(slow_saved.unwrap().name, "Slow");

    // The first completion already clears the flag while the slow call is in flight.
    assert_eq!(after_fast.items[0].name, "Fast");
    assert!(!after_fast.loading);

    let items = store.candidates.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Slow");
    assert!(!store.candidates.is_loading());
    assert!(store.candidates.error().is_none());
}

#[tokio::test]
async fn server_errors_surface_with_status_and_context() {
    let base = store_server().await;
    let store = Store::new(api(&base));

    store.candidates.list_all().await.unwrap();
    let err = store.candidates.delete(&EntityId::Number(1)).await.unwrap_err();
    match &err {
        Error::RemoteCallFailed {
            entity, id, status, ..
        } => {
            assert_eq!(*entity, "candidate");
            assert_eq!(id.as_ref(), Some(&EntityId::Number(1)));
            assert_eq!(*status, Some(500));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(store.candidates.items().len(), 1);
    assert!(store.candidates.error().unwrap().contains("candidate 1"));
}

#[tokio::test]
async fn unreachable_store_is_a_remote_failure() {
    let api = api("http://127.0.0.1:9");
    let err = api.list::<Candidate>().await.unwrap_err();
    assert!(matches!(err, Error::RemoteCallFailed { status: None, .. }));
}
