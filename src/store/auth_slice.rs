use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use serde::Serialize;
use tokio::sync::watch;

use crate::models::user::User;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Mirror of the identity provider's current session.
#[derive(Clone, Default)]
pub struct AuthSlice {
    state: Arc<RwLock<AuthState>>,
}

impl AuthSlice {
    pub fn new() -> Self {
        Self::default()
    }

    fn write(&self) -> RwLockWriteGuard<'_, AuthState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> AuthState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn user(&self) -> Option<User> {
        self.snapshot().user
    }

    pub fn set_user(&self, user: Option<User>) {
        self.write().user = user;
    }

    pub fn set_loading(&self, loading: bool) {
        self.write().loading = loading;
    }

    pub fn clear_error(&self) {
        self.write().error = None;
    }

    pub(crate) fn begin(&self) {
        let mut state = self.write();
        state.loading = true;
        state.error = None;
    }

    pub(crate) fn fail(&self, message: String) {
        let mut state = self.write();
        state.loading = false;
        state.error = Some(message);
    }

    /// Copies every identity change into the slice until the sender goes away.
    pub async fn follow(self, mut changes: watch::Receiver<Option<User>>) {
        let current = changes.borrow_and_update().clone();
        self.apply(current);
        while changes.changed().await.is_ok() {
            let user = changes.borrow_and_update().clone();
            self.apply(user);
        }
        tracing::debug!("identity channel closed, auth mirror stopped");
    }

    fn apply(&self, user: Option<User>) {
        match &user {
            Some(u) => tracing::info!(uid = %u.uid, "signed in"),
            None => tracing::info!("signed out"),
        }
        let mut state = self.write();
        state.user = user;
        state.loading = false;
    }
}
