mod common;

use recruitment_dashboard::dto::assessment_dto::AssessmentPayload;
use recruitment_dashboard::error::Error;
use recruitment_dashboard::models::{Assessment, Candidate, EntityId, InterviewStatus};
use recruitment_dashboard::services::candidate_service::CandidateService;
use recruitment_dashboard::services::collection_service::{CollectionApi, CollectionBackend};
use recruitment_dashboard::services::memory_collection::MemoryCollectionApi;
use recruitment_dashboard::store::{AppStore, Scope, Store};

use common::candidate_payload;

fn assessment(title: &str, candidate: i64) -> AssessmentPayload {
    AssessmentPayload {
        title: title.into(),
        description: "Build a small REST service".into(),
        candidate_id: EntityId::Number(candidate),
    }
}

#[tokio::test]
async fn create_appends_once_and_respects_scope() {
    let api = MemoryCollectionApi::new();
    let store = Store::new(api.clone());

    store.assessments.create(&assessment("Warm-up", 1)).await.unwrap();
    store.assessments.list_by_foreign_key(&EntityId::Number(1)).await.unwrap();
    assert_eq!(
        store.assessments.scope(),
        Some(Scope {
            foreign_key: "candidateId",
            value: EntityId::Number(1)
        })
    );
    assert_eq!(store.assessments.scoped().len(), 1);

    store.assessments.create(&assessment("Take-home", 1)).await.unwrap();
    store.assessments.create(&assessment("Other", 2)).await.unwrap();
    assert_eq!(store.assessments.items().len(), 3);
    assert_eq!(store.assessments.scoped().len(), 2);

    api.set_unavailable(true);
    let err = store.assessments.create(&assessment("Lost", 1)).await.unwrap_err();
    assert!(matches!(err, Error::RemoteCallFailed { .. }));
    assert_eq!(store.assessments.items().len(), 3);
    assert_eq!(store.assessments.scoped().len(), 2);
    assert!(store.assessments.error().is_some());
    assert!(!store.assessments.is_loading());
}

#[tokio::test]
async fn scope_membership_does_not_depend_on_list_contents() {
    let api = MemoryCollectionApi::new();
    let store = Store::new(api);

    let empty = store
        .assessments
        .list_by_foreign_key(&EntityId::Number(7))
        .await
        .unwrap();
    assert!(empty.is_empty());

    store.assessments.create(&assessment("First", 7)).await.unwrap();
    assert_eq!(store.assessments.scoped().len(), 1);
}

#[tokio::test]
async fn update_replaces_only_the_matching_record() {
    let api = MemoryCollectionApi::new();
    let store = Store::new(api);

    let a = store.assessments.create(&assessment("A", 1)).await.unwrap();
    store.assessments.create(&assessment("B", 1)).await.unwrap();
    store.assessments.list_by_foreign_key(&EntityId::Number(1)).await.unwrap();
    store.assessments.get_by_id(&a.id).await.unwrap();

    let edited = Assessment {
        title: "A (revised)".into(),
        ..a.clone()
    };
    store.assessments.update(&edited).await.unwrap();

    let items = store.assessments.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "A (revised)");
    assert_eq!(items[1].title, "B");
    assert_eq!(store.assessments.scoped()[0].title, "A (revised)");
    assert_eq!(store.assessments.focused().unwrap().title, "A (revised)");
}

#[tokio::test]
async fn reassigned_record_moves_between_scopes() {
    let api = MemoryCollectionApi::new();
    let store = Store::new(api);

    let a = store.assessments.create(&assessment("A", 1)).await.unwrap();
    let b = store.assessments.create(&assessment("B", 2)).await.unwrap();
    store.assessments.list_by_foreign_key(&EntityId::Number(1)).await.unwrap();
    assert_eq!(store.assessments.scoped().len(), 1);

    let moved = Assessment {
        candidate_id: EntityId::Number(2),
        ..a.clone()
    };
    store.assessments.update(&moved).await.unwrap();
    assert!(store.assessments.scoped().is_empty());
    assert_eq!(
        store.assessments.scope().map(|scope| scope.value),
        Some(EntityId::Number(1))
    );
    assert_eq!(store.assessments.items()[0].candidate_id, EntityId::Number(2));

    let joined = Assessment {
        candidate_id: EntityId::Number(1),
        ..b.clone()
    };
    store.assessments.update(&joined).await.unwrap();
    let scoped = store.assessments.scoped();
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].id, b.id);
}

#[tokio::test]
async fn cached_lookup_sees_the_latest_list() {
    let api = MemoryCollectionApi::new();
    let store = Store::new(api.clone());

    let a = store.assessments.create(&assessment("A", 1)).await.unwrap();
    store.assessments.get_by_id(&a.id).await.unwrap();

    let edited = Assessment {
        title: "A (edited elsewhere)".into(),
        ..a.clone()
    };
    api.update(&edited).await.unwrap();
    store.assessments.list_all().await.unwrap();

    assert_eq!(
        store.assessments.cached(&a.id).unwrap().title,
        "A (edited elsewhere)"
    );
    assert_eq!(
        store.assessments.focused().unwrap().title,
        "A (edited elsewhere)"
    );

    let again = Assessment {
        title: "A (third pass)".into(),
        ..a.clone()
    };
    api.update(&again).await.unwrap();
    store.assessments.get_by_id(&a.id).await.unwrap();
    assert_eq!(store.assessments.items()[0].title, "A (third pass)");
    assert_eq!(store.assessments.cached(&a.id).unwrap().title, "A (third pass)");
}

#[tokio::test]
async fn delete_removes_every_copy_and_clears_focus() {
    let api = MemoryCollectionApi::new();
    let store = Store::new(api);

    let a = store.assessments.create(&assessment("A", 1)).await.unwrap();
    store.assessments.create(&assessment("B", 1)).await.unwrap();
    store.assessments.list_by_foreign_key(&EntityId::Number(1)).await.unwrap();
    store.assessments.get_by_id(&a.id).await.unwrap();

    store.assessments.delete(&a.id).await.unwrap();
    assert!(store.assessments.items().iter().all(|r| r.id != a.id));
    assert!(store.assessments.scoped().iter().all(|r| r.id != a.id));
    assert!(store.assessments.focused().is_none());
}

#[tokio::test]
async fn failed_fetch_keeps_previous_focus() {
    let api = MemoryCollectionApi::new();
    let store = Store::new(api);

    let a = store.assessments.create(&assessment("A", 1)).await.unwrap();
    store.assessments.get_by_id(&a.id).await.unwrap();

    let err = store
        .assessments
        .get_by_id(&EntityId::Number(404))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "not_found");
    assert_eq!(store.assessments.focused().map(|r| r.id), Some(a.id));
    assert!(store.assessments.error().is_some());

    store.assessments.clear_error();
    assert!(store.assessments.error().is_none());
}

#[tokio::test]
async fn deleting_a_candidate_leaves_dependents_in_place() {
    let api = MemoryCollectionApi::new();
    let store = AppStore::new(CollectionBackend::Memory(api.clone()));
    let service = CandidateService::new(store.clone());

    let candidate = service
        .create(candidate_payload("Ann Lee", "ann@example.com"))
        .await
        .unwrap();
    let id = candidate.id.as_number().unwrap();
    store.assessments.create(&assessment("Orphan", id)).await.unwrap();

    service.delete(&candidate.id).await.unwrap();
    assert!(api.records::<Candidate>().unwrap().is_empty());
    assert_eq!(api.records::<Assessment>().unwrap().len(), 1);
}

#[tokio::test]
async fn status_workflow_end_to_end() {
    let api = MemoryCollectionApi::new();
    let store = AppStore::new(CollectionBackend::Memory(api.clone()));
    let service = CandidateService::new(store.clone());

    let candidate = service
        .create(candidate_payload("Bo Chen", "bo@example.com"))
        .await
        .unwrap();
    assert_eq!(candidate.interview_status, InterviewStatus::Shortlisted);

    let moved = service
        .change_status(&candidate.id, InterviewStatus::FirstInterviewComplete)
        .await
        .unwrap();
    assert_eq!(moved.interview_status, InterviewStatus::FirstInterviewComplete);

    let err = service
        .change_status(&candidate.id, InterviewStatus::Shortlisted)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "backward_transition");
    assert_eq!(
        store.candidates.cached(&candidate.id).unwrap().interview_status,
        InterviewStatus::FirstInterviewComplete
    );

    service
        .change_status(&candidate.id, InterviewStatus::Hired)
        .await
        .unwrap();

    let err = service
        .change_status(&candidate.id, InterviewStatus::Blacklisted)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "invalid_terminal_transition");

    let stored = api.records::<Candidate>().unwrap();
    assert_eq!(stored[0].interview_status, InterviewStatus::Hired);
    assert_eq!(
        store.candidates.items()[0].interview_status,
        InterviewStatus::Hired
    );
}
