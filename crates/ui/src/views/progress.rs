use dioxus::prelude::*;

use crate::views::UiState;
use crate::vm::{ProgressVm, map_progress};

#[component]
pub fn ProgressBar(progress: ProgressVm) -> Element {
    rsx! {
        div { class: "progress",
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {progress.width_pct}%;" }
            }
            p { class: "progress-text", "{progress.label}" }
        }
    }
}

#[component]
pub fn ProgressView() -> Element {
    let ui = use_context::<UiState>();
    let user = ui.session.read().user.clone();
    let progress = map_progress(user.as_ref());
    let track = user
        .as_ref()
        .map_or_else(|| "—".to_string(), |u| u.area().to_string());
    let points = progress.value;

    rsx! {
        div { class: "page",
            h2 { "My progress" }
            ProgressBar { progress }
            p { "Points: {points} • Current track: {track}" }
        }
    }
}
