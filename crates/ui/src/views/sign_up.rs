use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::model::Role;
use services::SignUpForm;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::views::sign_in::account_error_to_view;

#[component]
pub fn SignUpView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let accounts = ctx.accounts();
    let enabled = accounts.enabled();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(Role::default);
    let mut error = use_signal(|| None::<ViewError>);
    let mut busy = use_signal(|| false);

    let on_submit = move |_| {
        let accounts = accounts.clone();
        let form = SignUpForm {
            name: name(),
            email: email(),
            password: password(),
            role: role(),
        };
        spawn(async move {
            busy.set(true);
            let result = accounts.sign_up(&form).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    error.set(None);
                    let _ = navigator.push(Route::SignIn {});
                }
                Err(err) => error.set(Some(account_error_to_view(&err))),
            }
        });
    };

    rsx! {
        div { class: "page auth",
            h2 { "Create an account" }
            if !enabled {
                p { class: "notice", "{ViewError::Disabled.message()}" }
            }
            label { "Name"
                input { value: "{name}", oninput: move |evt| name.set(evt.value()) }
            }
            label { "Email"
                input {
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            label { "Password"
                input {
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
            }
            fieldset { class: "roles",
                legend { "I am a" }
                for option in [Role::Student, Role::Teacher] {
                    label { key: "{option.as_str()}",
                        input {
                            r#type: "radio",
                            name: "role",
                            checked: role() == option,
                            onchange: move |_| role.set(option),
                        }
                        "{option.as_str()}"
                    }
                }
            }
            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }
            button {
                class: "btn primary",
                disabled: !enabled || busy(),
                onclick: on_submit,
                "Sign up"
            }
            p {
                "Already registered? "
                Link { to: Route::SignIn {}, "Sign in" }
            }
        }
    }
}
