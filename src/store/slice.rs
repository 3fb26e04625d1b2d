use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::error::Result;
use crate::models::entity::{Entity, EntityId, Scoped};
use crate::services::collection_service::CollectionApi;

/// Which foreign-key value the scoped list was fetched for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scope {
    pub foreign_key: &'static str,
    pub value: EntityId,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliceState<T> {
    pub items: Vec<T>,
    pub focused: Option<T>,
    pub scoped: Vec<T>,
    pub scope: Option<Scope>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for SliceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            focused: None,
            scoped: Vec::new(),
            scope: None,
            loading: false,
            error: None,
        }
    }
}

/// Cached mirror of one remote collection.
///
/// Every operation runs in three phases: pending (`loading` set, `error`
/// cleared), the remote call, then fulfilled or rejected. The state lock is
/// only taken for the two short bookkeeping steps, never across the remote
/// call, so whichever call resolves last wins.
pub struct Slice<T, C> {
    api: C,
    state: Arc<RwLock<SliceState<T>>>,
}

impl<T, C: Clone> Clone for Slice<T, C> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Entity, C: CollectionApi> Slice<T, C> {
    pub fn new(api: C) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(SliceState::default())),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SliceState<T>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SliceState<T>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> SliceState<T> {
        self.read().clone()
    }

    pub fn items(&self) -> Vec<T> {
        self.read().items.clone()
    }

    pub fn focused(&self) -> Option<T> {
        self.read().focused.clone()
    }

    pub fn scoped(&self) -> Vec<T> {
        self.read().scoped.clone()
    }

    pub fn scope(&self) -> Option<Scope> {
        self.read().scope.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    pub fn clear_error(&self) {
        self.write().error = None;
    }

    /// Looks a record up in the cache only: items first, then the focused
    /// record. Both copies are refreshed together, so they never disagree.
    pub fn cached(&self, id: &EntityId) -> Option<T> {
        let state = self.read();
        state
            .items
            .iter()
            .chain(state.focused.iter())
            .find(|record| record.id() == id)
            .cloned()
    }

    fn begin(&self, op: &'static str) {
        tracing::debug!(collection = T::COLLECTION, op, "pending");
        let mut state = self.write();
        state.loading = true;
        state.error = None;
    }

    fn settle<R>(
        &self,
        op: &'static str,
        outcome: Result<R>,
        apply: impl FnOnce(&mut SliceState<T>, &R),
    ) -> Result<R> {
        let mut state = self.write();
        state.loading = false;
        match outcome {
            Ok(value) => {
                apply(&mut *state, &value);
                tracing::debug!(collection = T::COLLECTION, op, "fulfilled");
                Ok(value)
            }
            Err(err) => {
                tracing::warn!(collection = T::COLLECTION, op, error = %err, "rejected");
                state.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Replaces `items` with the full collection and refreshes `focused`.
    pub async fn list_all(&self) -> Result<Vec<T>> {
        self.begin("list_all");
        let outcome = self.api.list::<T>().await;
        self.settle("list_all", outcome, |state, records| {
            state.items = records.clone();
            if let Some(focused) = state.focused.as_mut() {
                if let Some(fresh) = records.iter().find(|r| r.id() == focused.id()) {
                    *focused = fresh.clone();
                }
            }
        })
    }

    /// Replaces `focused` with the record and refreshes any cached copy of
    /// it; `NotFound` when the store has none.
    pub async fn get_by_id(&self, id: &EntityId) -> Result<T> {
        self.begin("get_by_id");
        let outcome = self.api.get::<T>(id).await;
        self.settle("get_by_id", outcome, |state, record| {
            refresh(state, record);
            state.focused = Some(record.clone());
        })
    }

    /// Cached record if present, otherwise a `get_by_id` round trip.
    pub async fn get_or_fetch(&self, id: &EntityId) -> Result<T> {
        match self.cached(id) {
            Some(record) => Ok(record),
            None => self.get_by_id(id).await,
        }
    }

    /// Appends the server-assigned record to `items`, and to `scoped` when it
    /// belongs to the current scope.
    pub async fn create(&self, draft: &T::Draft) -> Result<T> {
        self.begin("create");
        let outcome = self.api.create::<T>(draft).await;
        self.settle("create", outcome, |state, record| {
            state.items.push(record.clone());
            if in_scope(state.scope.as_ref(), record) {
                state.scoped.push(record.clone());
            }
        })
    }

    /// Replaces the entry with the same id in `items` and `focused`. The
    /// scoped list is re-checked against the scope, so a record whose foreign
    /// key changed leaves it (or joins it).
    pub async fn update(&self, record: &T) -> Result<T> {
        self.begin("update");
        let outcome = self.api.update(record).await;
        self.settle("update", outcome, |state, updated| {
            refresh(state, updated);
        })
    }

    /// Drops every entry with this id and clears a matching `focused`.
    pub async fn delete(&self, id: &EntityId) -> Result<()> {
        self.begin("delete");
        let outcome = self.api.delete::<T>(id).await;
        self.settle("delete", outcome, |state, _| {
            state.items.retain(|record| record.id() != id);
            state.scoped.retain(|record| record.id() != id);
            if state.focused.as_ref().is_some_and(|record| record.id() == id) {
                state.focused = None;
            }
        })
    }
}

fn in_scope<T: Entity>(scope: Option<&Scope>, record: &T) -> bool {
    scope.is_some_and(|scope| record.foreign_key(scope.foreign_key) == Some(&scope.value))
}

/// Writes a fresh copy of `record` over every cached entry with its id and
/// keeps `scoped` equal to the records matching the scope.
fn refresh<T: Entity>(state: &mut SliceState<T>, record: &T) {
    let id = record.id();
    for slot in state.items.iter_mut() {
        if slot.id() == id {
            *slot = record.clone();
        }
    }
    if let Some(focused) = state.focused.as_mut() {
        if focused.id() == id {
            *focused = record.clone();
        }
    }

    if in_scope(state.scope.as_ref(), record) {
        match state.scoped.iter_mut().find(|slot| slot.id() == id) {
            Some(slot) => *slot = record.clone(),
            None => state.scoped.push(record.clone()),
        }
    } else {
        state.scoped.retain(|slot| slot.id() != id);
    }
}

impl<T: Scoped, C: CollectionApi> Slice<T, C> {
    /// Replaces `scoped` with the records whose foreign key equals `value`.
    pub async fn list_by_foreign_key(&self, value: &EntityId) -> Result<Vec<T>> {
        self.begin("list_by_foreign_key");
        let outcome = self.api.list_by::<T>(value).await;
        self.settle("list_by_foreign_key", outcome, |state, records| {
            state.scoped = records.clone();
            state.scope = Some(Scope {
                foreign_key: T::FOREIGN_KEY,
                value: value.clone(),
            });
        })
    }
}
