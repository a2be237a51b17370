use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{AppServices, CatalogService, SessionManager};
use skillup_core::model::User;
use skillup_core::navigation::Navigator;
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{ScreenRoot, UiState};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn session(&self) -> Arc<SessionManager> {
        self.services.session()
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }
}

#[derive(Clone, Default)]
struct HarnessHandles {
    ui: Rc<RefCell<Option<UiState>>>,
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    nav: Navigator,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn Harness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let session = props.app.services.session();
    use_context_provider(|| build_app_context(&app));
    let ui = use_context_provider(|| UiState::new(session.snapshot(), props.nav.clone()));
    *props.handles.ui.borrow_mut() = Some(ui);
    rsx! { ScreenRoot {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub session: Arc<SessionManager>,
    handles: HarnessHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.drive();
    }

    pub fn drive(&mut self) {
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    fn ui(&self) -> UiState {
        (*self.handles.ui.borrow()).expect("ui state registered")
    }

    /// Feed the session manager's current snapshot through `UiState::observe`.
    pub fn observe_session(&mut self) {
        let ui = self.ui();
        let snapshot = self.session.snapshot();
        self.dom.in_runtime(|| ui.observe(snapshot));
        self.drive();
    }

    pub fn signed_in(&mut self) {
        let ui = self.ui();
        let session = Arc::clone(&self.session);
        self.dom.in_runtime(|| ui.signed_in(&session));
        self.drive();
    }

    pub fn signed_out(&mut self) {
        let ui = self.ui();
        let session = Arc::clone(&self.session);
        self.dom.in_runtime(|| ui.signed_out(&session));
        self.drive();
    }

    /// Apply a navigation event the way a button handler would.
    pub fn navigate<R>(&mut self, event: impl FnOnce(&mut Navigator) -> R) -> R {
        let ui = self.ui();
        let out = self.dom.in_runtime(|| {
            let mut nav = ui.nav;
            let mut nav = nav.write();
            event(&mut nav)
        });
        self.drive();
        out
    }

    pub fn navigator(&self) -> Navigator {
        let ui = self.ui();
        self.dom.in_runtime(|| ui.nav.peek().clone())
    }
}

fn build_harness(services: AppServices, nav: Navigator) -> ViewHarness {
    let session = services.session();
    let handles = HarnessHandles::default();
    let app = Arc::new(TestApp { services });
    let dom = VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            app,
            nav,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        session,
        handles,
    }
}

/// Loads the session, optionally signs `username` in, then lets the test shape the navigator.
///
/// `configure` receives a fresh navigator together with the loaded user.
pub async fn setup_view_harness<F>(username: Option<&str>, configure: F) -> ViewHarness
where
    F: FnOnce(&mut Navigator, Option<&User>),
{
    let storage = Storage::in_memory();
    let services = AppServices::from_storage(&storage);
    let session = services.session();

    session.load().await;
    if let Some(username) = username {
        session.sign_in(username, "1234").await.expect("sign in");
    }

    let mut nav = Navigator::new();
    configure(&mut nav, session.user().as_ref());

    build_harness(services, nav)
}

/// A freshly started app: the store may hold `saved` from an earlier run, the
/// session is not loaded yet and the navigator is still booting.
pub async fn setup_booting_harness(saved: Option<&str>) -> ViewHarness {
    let storage = Storage::in_memory();

    if let Some(username) = saved {
        let earlier_run = AppServices::from_storage(&storage).session();
        earlier_run.load().await;
        earlier_run.sign_in(username, "1234").await.expect("sign in");
    }

    build_harness(AppServices::from_storage(&storage), Navigator::new())
}
