use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::{json, Value as JsonValue};

use crate::error::{Error, Result};
use crate::models::entity::{Entity, EntityId, Scoped};
use crate::services::collection_service::CollectionApi;

#[derive(Debug, Default)]
struct MemoryState {
    collections: HashMap<&'static str, Vec<JsonValue>>,
    last_id: i64,
    unavailable: bool,
}

/// In-process stand-in for the remote store, behaving like json-server:
/// numeric ids assigned on create, `?foreignKey=value` filtering, 404 on
/// unknown ids. Used for the demo backend and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryCollectionApi {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryCollectionApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts records verbatim, keeping their ids.
    pub fn seed<T: Entity>(&self, records: &[T]) -> Result<()> {
        let mut state = self.lock();
        for record in records {
            if let Some(n) = record.id().as_number() {
                state.last_id = state.last_id.max(n);
            }
            let value = serde_json::to_value(record)?;
            state.collections.entry(T::COLLECTION).or_default().push(value);
        }
        Ok(())
    }

    /// Everything currently stored in `T`'s collection.
    pub fn records<T: Entity>(&self) -> Result<Vec<T>> {
        let state = self.lock();
        decode_all(state.collections.get(T::COLLECTION))
    }

    /// While set, every call fails like an unreachable server.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock().unavailable = unavailable;
    }

    fn available<T: Entity>(state: &MemoryState, id: Option<&EntityId>, action: &str) -> Result<()> {
        if state.unavailable {
            return Err(Error::remote(
                T::KIND,
                id,
                Some(503),
                format!("Failed to {} (503 Service Unavailable)", action),
            ));
        }
        Ok(())
    }
}

fn record_id(value: &JsonValue) -> Option<EntityId> {
    value
        .get("id")
        .and_then(|raw| serde_json::from_value::<EntityId>(raw.clone()).ok())
}

fn decode_all<T: Entity>(values: Option<&Vec<JsonValue>>) -> Result<Vec<T>> {
    values
        .map(|values| {
            values
                .iter()
                .map(|v| serde_json::from_value(v.clone()).map_err(Error::from))
                .collect()
        })
        .unwrap_or_else(|| Ok(Vec::new()))
}

impl CollectionApi for MemoryCollectionApi {
    async fn list<T: Entity>(&self) -> Result<Vec<T>> {
        let state = self.lock();
        Self::available::<T>(&state, None, &format!("fetch {}", T::COLLECTION))?;
        decode_all(state.collections.get(T::COLLECTION))
    }

    async fn get<T: Entity>(&self, id: &EntityId) -> Result<T> {
        let state = self.lock();
        Self::available::<T>(&state, Some(id), &format!("fetch {}", T::KIND))?;
        let found = state
            .collections
            .get(T::COLLECTION)
            .and_then(|values| values.iter().find(|v| record_id(v).as_ref() == Some(id)));
        match found {
            Some(value) => Ok(serde_json::from_value(value.clone())?),
            None => Err(Error::NotFound {
                entity: T::KIND,
                id: id.clone(),
            }),
        }
    }

    async fn list_by<T: Scoped>(&self, value: &EntityId) -> Result<Vec<T>> {
        let state = self.lock();
        Self::available::<T>(&state, None, &format!("fetch {} by {}", T::COLLECTION, T::FOREIGN_KEY))?;
        let all: Vec<T> = decode_all(state.collections.get(T::COLLECTION))?;
        Ok(all
            .into_iter()
            .filter(|record| record.foreign_key(T::FOREIGN_KEY) == Some(value))
            .collect())
    }

    async fn create<T: Entity>(&self, draft: &T::Draft) -> Result<T> {
        let mut state = self.lock();
        Self::available::<T>(&state, None, &format!("create {}", T::KIND))?;
        let mut value = serde_json::to_value(draft)?;
        let fields = value.as_object_mut().ok_or_else(|| {
            Error::remote(T::KIND, None, Some(400), "Create body must be a JSON object")
        })?;
        let id = state.last_id + 1;
        fields.insert("id".to_string(), json!(id));
        let record: T = serde_json::from_value(value.clone())?;
        state.last_id = id;
        state.collections.entry(T::COLLECTION).or_default().push(value);
        Ok(record)
    }

    async fn update<T: Entity>(&self, record: &T) -> Result<T> {
        let mut state = self.lock();
        let id = record.id();
        Self::available::<T>(&state, Some(id), &format!("update {}", T::KIND))?;
        let value = serde_json::to_value(record)?;
        let slot = state
            .collections
            .get_mut(T::COLLECTION)
            .and_then(|values| values.iter_mut().find(|v| record_id(v).as_ref() == Some(id)));
        match slot {
            Some(slot) => {
                *slot = value;
                Ok(record.clone())
            }
            None => Err(Error::remote(
                T::KIND,
                Some(id),
                Some(404),
                format!("Failed to update {} (404 Not Found)", T::KIND),
            )),
        }
    }

    async fn delete<T: Entity>(&self, id: &EntityId) -> Result<()> {
        let mut state = self.lock();
        Self::available::<T>(&state, Some(id), &format!("delete {}", T::KIND))?;
        let values = state.collections.entry(T::COLLECTION).or_default();
        let before = values.len();
        values.retain(|v| record_id(v).as_ref() != Some(id));
        if values.len() == before {
            return Err(Error::remote(
                T::KIND,
                Some(id),
                Some(404),
                format!("Failed to delete {} (404 Not Found)", T::KIND),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::assessment_dto::AssessmentPayload;
    use crate::models::Assessment;

    fn draft(title: &str, candidate: i64) -> AssessmentPayload {
        AssessmentPayload {
            title: title.into(),
            description: "take-home".into(),
            candidate_id: EntityId::Number(candidate),
        }
    }

    #[tokio::test]
    async fn assigns_increasing_ids_and_filters_by_foreign_key() {
        let api = MemoryCollectionApi::new();
        let a: Assessment = api.create::<Assessment>(&draft("A", 1)).await.unwrap();
        let b: Assessment = api.create::<Assessment>(&draft("B", 2)).await.unwrap();
        assert_eq!(a.id, EntityId::Number(1));
        assert_eq!(b.id, EntityId::Number(2));

        let scoped: Vec<Assessment> = api.list_by(&EntityId::from("2")).await.unwrap();
        assert_eq!(scoped, vec![b]);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let api = MemoryCollectionApi::new();
        let err = api.get::<Assessment>(&EntityId::Number(9)).await.unwrap_err();
        assert_eq!(err.kind(), "not_found");
        let err = api.delete::<Assessment>(&EntityId::Number(9)).await.unwrap_err();
        assert_eq!(err.kind(), "remote_call_failed");
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let api = MemoryCollectionApi::new();
        api.set_unavailable(true);
        let err = api.list::<Assessment>().await.unwrap_err();
        assert!(matches!(err, Error::RemoteCallFailed { status: Some(503), .. }));
    }
}
