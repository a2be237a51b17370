use std::sync::Arc;

use skillup_core::model::{SignInDraft, User, UserPatch};
use storage::repository::KeyValueStore;
use tokio::sync::{Mutex, watch};
use tracing::{debug, info, warn};

use crate::error::SessionError;

/// Store key holding the serialized user record.
pub const USER_STORAGE_KEY: &str = "@skillup_user";

/// What screens observe: the current user and whether hydration is still running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionSnapshot {
    #[must_use]
    pub fn booting() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Owns the single in-memory user and keeps it in step with the store.
///
/// Every operation runs under one async lock, so calls are applied in the order they
/// were issued and a read never overtakes a pending write. New state is published to
/// subscribers only after the store accepted it; a failed write leaves the previous
/// state in place.
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    state: watch::Sender<SessionSnapshot>,
    ops: Mutex<()>,
}

impl SessionManager {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::booting());
        Self {
            store,
            state,
            ops: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Receive a snapshot on every committed change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    /// Hydrate from the store.
    ///
    /// Never fails: an unreadable or undecodable record is logged and treated as no
    /// saved user. `loading` is cleared whatever the outcome. Once hydrated, further
    /// calls return the in-memory user without reading the store or publishing.
    pub async fn load(&self) -> Option<User> {
        let _guard = self.ops.lock().await;

        let hydrated = !self.state.borrow().loading;
        if hydrated {
            return self.user();
        }

        let user = match self.read_persisted().await {
            Ok(user) => user,
            Err(err) => {
                warn!(error = %err, "failed to load saved user, starting signed out");
                None
            }
        };
        debug!(restored = user.is_some(), "session hydrated");

        self.state.send_replace(SessionSnapshot {
            user: user.clone(),
            loading: false,
        });
        user
    }

    /// Start a new session, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Validation` for empty fields or a short password, and
    /// `SessionError::Persistence` if the record cannot be stored. State is unchanged
    /// on error.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<User, SessionError> {
        let username = SignInDraft::new(username, password).validate()?;
        let user = User::new(username);

        let _guard = self.ops.lock().await;
        self.write_persisted(&user).await?;
        self.publish(Some(user.clone()));

        info!(username = %user.username(), "signed in");
        Ok(user)
    }

    /// End the session. Succeeds when nobody is signed in.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Persistence` if the stored record cannot be removed; the
    /// in-memory user is kept in that case.
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        let _guard = self.ops.lock().await;
        self.store.delete(USER_STORAGE_KEY).await?;
        let previous = self.state.borrow().user.clone();
        self.publish(None);

        if let Some(user) = previous {
            info!(username = %user.username(), "signed out");
        }
        Ok(())
    }

    /// Shallow-merge `patch` into the current user and persist the result.
    ///
    /// See [`UserPatch`] for which fields are replaced.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSession` if nobody is signed in, or
    /// `SessionError::Persistence` if the merged record cannot be stored.
    pub async fn update_user(&self, patch: UserPatch) -> Result<User, SessionError> {
        self.modify(|_| patch).await
    }

    /// Mark one course module as completed, advancing progress by the module step.
    ///
    /// # Errors
    ///
    /// Same as [`SessionManager::update_user`].
    pub async fn complete_module(&self) -> Result<User, SessionError> {
        self.modify(|user| UserPatch::new().with_progress(user.progress().after_module_completion()))
            .await
    }

    async fn modify<F>(&self, build_patch: F) -> Result<User, SessionError>
    where
        F: FnOnce(&User) -> UserPatch,
    {
        let _guard = self.ops.lock().await;

        let current = self.user().ok_or(SessionError::NoSession)?;
        let patch = build_patch(&current);
        let updated = current.merged(&patch);

        self.write_persisted(&updated).await?;
        self.publish(Some(updated.clone()));

        debug!(
            username = %updated.username(),
            progress = updated.progress().value(),
            area = %updated.area(),
            "user updated"
        );
        Ok(updated)
    }

    async fn read_persisted(&self) -> Result<Option<User>, SessionError> {
        let Some(raw) = self.store.get(USER_STORAGE_KEY).await? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    async fn write_persisted(&self, user: &User) -> Result<(), SessionError> {
        let raw = serde_json::to_string(user)?;
        self.store.set(USER_STORAGE_KEY, &raw).await?;
        Ok(())
    }

    fn publish(&self, user: Option<User>) {
        self.state.send_modify(|snapshot| snapshot.user = user);
    }
}
