use dioxus::prelude::*;

#[component]
pub fn AboutView() -> Element {
    rsx! {
        div { class: "page",
            h2 { "About SkillUp" }
            p {
                "A demo app that connects learners to short, trackable learning tracks. "
                "Pick an area of interest, open a course and mark modules as completed to grow your progress."
            }
        }
    }
}
