use dioxus::prelude::*;
use skillup_core::model::CatalogFilter;

use crate::context::AppContext;
use crate::views::UiState;
use crate::vm::{CourseCardVm, map_course_cards};

#[component]
pub fn CatalogView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut filter = use_signal(CatalogFilter::default);

    let current = filter();
    let cards = map_course_cards(&ctx.catalog().list(current));

    rsx! {
        div { class: "page",
            h2 { "Tracks and courses" }

            select {
                class: "input",
                onchange: move |evt| filter.set(CatalogFilter::from_label(&evt.value())),
                for choice in CatalogFilter::options() {
                    option {
                        value: "{choice.label()}",
                        selected: choice == current,
                        "{choice.label()}"
                    }
                }
            }

            if cards.is_empty() {
                p { "No courses in this area yet." }
            }
            for card in cards {
                CourseCard { key: "{card.id}", card }
            }
        }
    }
}

#[component]
fn CourseCard(card: CourseCardVm) -> Element {
    let ui = use_context::<UiState>();
    let mut navigator = ui.nav;
    let params = card.params.clone();

    rsx! {
        div { class: "card",
            p { class: "card-title", "{card.title}" }
            p { class: "card-text", "{card.subtitle}" }
            button {
                class: "small-button",
                onclick: move |_| {
                    let _ = navigator.write().open_course(params.clone());
                },
                "Open"
            }
        }
    }
}
