use dioxus::prelude::*;

use crate::views::UiState;
use crate::vm::map_profile;

#[component]
pub fn ProfileView() -> Element {
    let ui = use_context::<UiState>();
    let profile = map_profile(ui.session.read().user.as_ref());
    let mut notice = use_signal(|| false);

    rsx! {
        div { class: "page",
            h2 { "Profile" }
            div { class: "card",
                strong { "{profile.username}" }
                p { class: "card-text", "Area: {profile.area}" }
                p { class: "card-text", "Progress: {profile.progress}" }
            }
            button {
                class: "button secondary",
                onclick: move |_| notice.set(true),
                "Edit profile"
            }
            if notice() {
                p { class: "hint", "Profile editing is not available yet." }
            }
        }
    }
}
