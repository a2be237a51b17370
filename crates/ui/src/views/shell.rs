use dioxus::prelude::*;
use skillup_core::navigation::{Destination, DrawerEntry, Screen, Tab};

use crate::context::AppContext;
use crate::views::{AboutView, CatalogView, DashboardView, ProfileView, ProgressView, UiState, ViewError};
use crate::vm::map_drawer_header;

const TABS: [(Tab, Destination, &str); 3] = [
    (Tab::Dashboard, Destination::Dashboard, "Dashboard"),
    (Tab::Catalog, Destination::Catalog, "Courses"),
    (Tab::Progress, Destination::Progress, "Progress"),
];

fn active_class(active: bool) -> &'static str {
    if active { "active" } else { "" }
}

/// Authenticated shell: drawer on the side, tabs above the home entry.
#[component]
pub fn ShellView() -> Element {
    let ui = use_context::<UiState>();
    let (screen, shell) = {
        let nav = ui.nav.read();
        (nav.screen(), nav.shell())
    };

    rsx! {
        div { class: "app",
            Drawer { active: shell.drawer() }
            main { class: "content",
                if shell.drawer() == DrawerEntry::Home {
                    TabBar { active: shell.tab() }
                }
                match screen {
                    Screen::Dashboard => rsx! { DashboardView {} },
                    Screen::Catalog => rsx! { CatalogView {} },
                    Screen::Progress => rsx! { ProgressView {} },
                    Screen::Profile => rsx! { ProfileView {} },
                    Screen::About => rsx! { AboutView {} },
                    Screen::Loading | Screen::Login | Screen::CourseDetail => rsx! {},
                }
            }
        }
    }
}

#[component]
fn Drawer(active: DrawerEntry) -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    let mut error = use_signal(|| None::<ViewError>);

    let header = map_drawer_header(ui.session.read().user.as_ref());

    let mut navigator = ui.nav;
    let sign_out = move |_| {
        let session = ctx.session();
        spawn(async move {
            match session.sign_out().await {
                Ok(()) => ui.signed_out(&session),
                Err(err) => error.set(Some(ViewError::from_session(&err))),
            }
        });
    };

    rsx! {
        nav { class: "drawer",
            div { class: "drawer-header",
                strong { "{header.title}" }
                br {}
                small { "{header.subtitle}" }
            }
            ul {
                li {
                    button {
                        class: active_class(active == DrawerEntry::Home),
                        onclick: move |_| {
                            let _ = navigator.write().navigate(Destination::Dashboard);
                        },
                        "Home"
                    }
                }
                li {
                    button {
                        onclick: move |_| {
                            let _ = navigator.write().navigate(Destination::Catalog);
                        },
                        "Courses"
                    }
                }
                li {
                    button {
                        class: active_class(active == DrawerEntry::Profile),
                        onclick: move |_| {
                            let _ = navigator.write().navigate(Destination::Profile);
                        },
                        "Profile"
                    }
                }
                li {
                    button {
                        class: active_class(active == DrawerEntry::About),
                        onclick: move |_| {
                            let _ = navigator.write().navigate(Destination::About);
                        },
                        "About"
                    }
                }
            }
            div { class: "drawer-footer",
                match error() {
                    Some(err) => rsx! {
                        p { class: "error", "{err.message()}" }
                    },
                    None => rsx! {},
                }
                button { onclick: sign_out, "Sign out" }
            }
        }
    }
}

#[component]
fn TabBar(active: Tab) -> Element {
    let ui = use_context::<UiState>();
    let mut navigator = ui.nav;

    rsx! {
        div { class: "tabs",
            for (tab, destination, label) in TABS {
                button {
                    class: active_class(tab == active),
                    onclick: move |_| {
                        let _ = navigator.write().navigate(destination);
                    },
                    "{label}"
                }
            }
        }
    }
}
