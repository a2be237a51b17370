use dioxus::prelude::*;
use skillup_core::navigation::Screen;

use crate::views::{CourseDetailView, LoadingView, LoginView, ShellView, UiState};

/// Top of the navigation hierarchy: picks the root route for the current screen.
#[component]
pub fn ScreenRoot() -> Element {
    let ui = use_context::<UiState>();
    let screen = ui.nav.read().screen();

    match screen {
        Screen::Loading => rsx! { LoadingView {} },
        Screen::Login => rsx! { LoginView {} },
        Screen::CourseDetail => rsx! { CourseDetailView {} },
        Screen::Dashboard | Screen::Catalog | Screen::Progress | Screen::Profile | Screen::About => {
            rsx! { ShellView {} }
        }
    }
}
