use dioxus::prelude::*;
use skillup_core::model::Progress;

use crate::context::AppContext;
use crate::views::{UiState, ViewError};
use crate::vm::{COURSE_DESCRIPTION, map_course_detail};

#[derive(Clone, Debug, PartialEq, Eq)]
enum ModuleFeedback {
    Completed(u8),
    Failed(ViewError),
}

/// Stacked above the shell; Back returns to the screen it was opened from.
#[component]
pub fn CourseDetailView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    let mut feedback = use_signal(|| None::<ModuleFeedback>);
    let mut completing = use_signal(|| false);
    let mut navigator = ui.nav;

    let Some(params) = ui.nav.read().course_detail().cloned() else {
        return rsx! {};
    };
    let detail = map_course_detail(&params);

    let complete = move |_| {
        let session = ctx.session();
        spawn(async move {
            completing.set(true);
            match session.complete_module().await {
                Ok(user) => {
                    ui.refresh(&session);
                    feedback.set(Some(ModuleFeedback::Completed(user.progress().value())));
                }
                Err(err) => feedback.set(Some(ModuleFeedback::Failed(ViewError::from_session(&err)))),
            }
            completing.set(false);
        });
    };

    rsx! {
        div { class: "page",
            button {
                class: "link",
                onclick: move |_| {
                    navigator.write().back();
                },
                "← Back"
            }
            h2 { "{detail.title}" }
            p { class: "card-text", "{detail.area} • {detail.duration}" }
            p { "{COURSE_DESCRIPTION}" }

            button {
                class: "button",
                disabled: completing(),
                onclick: complete,
                "Mark module as completed"
            }

            match feedback() {
                Some(ModuleFeedback::Completed(value)) => rsx! {
                    p { class: "hint", "Module completed! +{Progress::MODULE_STEP} points. Progress: {value}%" }
                },
                Some(ModuleFeedback::Failed(err)) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                None => rsx! {},
            }
        }
    }
}
