use std::sync::Arc;

use services::{CatalogService, SessionManager};

pub trait UiApp: Send + Sync {
    fn session(&self) -> Arc<SessionManager>;
    fn catalog(&self) -> Arc<CatalogService>;
}

/// Services shared with every view. The session manager is the only writer of user state.
#[derive(Clone)]
pub struct AppContext {
    session: Arc<SessionManager>,
    catalog: Arc<CatalogService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session: app.session(),
            catalog: app.catalog(),
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
