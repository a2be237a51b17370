use dioxus::prelude::*;
use skillup_core::model::InterestArea;

use crate::context::AppContext;
use crate::views::{UiState, ViewError};
use crate::vm::{LoginForm, continue_label, submit_login};

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut area = use_signal(InterestArea::default);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<ViewError>);

    let saved_label = ui.nav.read().saved_session().map(continue_label);
    let selected_area = area();
    let submit_label = if submitting() { "Signing in..." } else { "Sign in" };

    let mut navigator = ui.nav;
    let continue_saved = move |_| {
        let _ = navigator.write().continue_saved_session();
    };

    let submit = move |_| {
        let session = ctx.session();
        let form = LoginForm {
            username: username(),
            password: password(),
            area: area(),
        };
        spawn(async move {
            submitting.set(true);
            match submit_login(&session, &form).await {
                Ok(_) => {
                    error.set(None);
                    ui.signed_in(&session);
                }
                Err(err) => error.set(Some(err)),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "centered login",
            h1 { "SkillUp" }

            match saved_label {
                Some(label) => rsx! {
                    div { class: "saved-session",
                        p { "Saved user:" }
                        button { class: "button saved", onclick: continue_saved, "{label}" }
                        p { class: "hint", "or sign in with another account" }
                    }
                },
                None => rsx! {},
            }

            input {
                class: "input",
                placeholder: "Username",
                autocapitalize: "none",
                value: "{username}",
                oninput: move |evt| username.set(evt.value()),
            }
            input {
                class: "input",
                r#type: "password",
                placeholder: "Password",
                value: "{password}",
                oninput: move |evt| password.set(evt.value()),
            }

            label { "Area of interest:" }
            select {
                class: "input",
                onchange: move |evt| {
                    if let Some(choice) = InterestArea::from_label(&evt.value()) {
                        area.set(choice);
                    }
                },
                for choice in InterestArea::ALL {
                    option {
                        value: "{choice.label()}",
                        selected: choice == selected_area,
                        "{choice.label()}"
                    }
                }
            }

            match error() {
                Some(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                None => rsx! {},
            }

            button {
                class: "button",
                disabled: submitting(),
                onclick: submit,
                "{submit_label}"
            }
        }
    }
}
