use dioxus::prelude::*;

#[component]
pub fn LoadingView() -> Element {
    rsx! {
        div { class: "centered",
            p { "Loading..." }
        }
    }
}
