use std::sync::Arc;

use storage::repository::Storage;

use crate::catalog_service::CatalogService;
use crate::error::AppServicesError;
use crate::session_manager::SessionManager;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    session: Arc<SessionManager>,
    catalog: Arc<CatalogService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// The session is not hydrated here; call [`SessionManager::load`] once the UI is up.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage))
    }

    #[must_use]
    pub fn from_storage(storage: &Storage) -> Self {
        Self {
            session: Arc::new(SessionManager::new(Arc::clone(&storage.kv))),
            catalog: Arc::new(CatalogService::default()),
        }
    }

    #[must_use]
    pub fn session(&self) -> Arc<SessionManager> {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }
}
