use dioxus::prelude::*;
use skillup_core::navigation::Navigator;

use crate::context::AppContext;
use crate::views::{ScreenRoot, UiState};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let session = ctx.session();
    let ui = use_context_provider(|| UiState::new(session.snapshot(), Navigator::new()));

    // Hydrate once, then mirror every published snapshot into the UI.
    use_future(move || {
        let session = ctx.session();
        async move {
            let mut updates = session.subscribe();
            session.load().await;
            ui.observe(updates.borrow_and_update().clone());
            while updates.changed().await.is_ok() {
                ui.observe(updates.borrow_and_update().clone());
            }
        }
    });

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "SkillUp" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                ScreenRoot {}
            }
        }
    }
}
