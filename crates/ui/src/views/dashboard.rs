use dioxus::prelude::*;
use skillup_core::navigation::Destination;

use crate::context::AppContext;
use crate::views::{ProgressBar, UiState};
use crate::vm::{map_progress, recommended_course_params};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();

    let Some(user) = ui.session.read().user.clone() else {
        return rsx! {};
    };
    let progress = map_progress(Some(&user));
    let track_title = ctx.catalog().recommended_track_title(user.area());
    let mut navigator = ui.nav;

    rsx! {
        div { class: "page",
            h2 { "Welcome back, {user.username()}!" }
            ProgressBar { progress }

            h3 { "Your recommended track" }
            div { class: "card",
                p { class: "card-title", "{track_title}" }
                p { class: "card-text",
                    "A quick 4-module course, about 3 hours in total. At the end you get personalized recommendations."
                }
                button {
                    class: "small-button",
                    onclick: move |_| {
                        let _ = navigator.write().open_course(recommended_course_params());
                    },
                    "Start course"
                }
            }

            h3 { "Suggestions" }
            div { class: "row",
                button {
                    class: "card",
                    onclick: move |_| {
                        let _ = navigator.write().navigate(Destination::Catalog);
                    },
                    "Browse courses"
                }
                button {
                    class: "card",
                    onclick: move |_| {
                        let _ = navigator.write().navigate(Destination::Progress);
                    },
                    "My progress"
                }
            }
        }
    }
}
