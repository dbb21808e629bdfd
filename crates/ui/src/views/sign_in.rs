use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::AccountError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;

pub(crate) fn account_error_to_view(err: &AccountError) -> ViewError {
    match err {
        AccountError::Disabled => ViewError::Disabled,
        AccountError::MissingField { .. }
        | AccountError::InvalidEmail
        | AccountError::HttpStatus(_) => ViewError::Rejected,
        _ => ViewError::Unknown,
    }
}

#[component]
pub fn SignInView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let accounts = ctx.accounts();
    let enabled = accounts.enabled();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<ViewError>);
    let mut busy = use_signal(|| false);

    let on_submit = move |_| {
        let accounts = accounts.clone();
        spawn(async move {
            busy.set(true);
            let result = accounts.sign_in(&email(), &password()).await;
            busy.set(false);
            match result {
                Ok(_) => {
                    error.set(None);
                    let _ = navigator.push(Route::Dashboard {});
                }
                Err(err) => {
                    tracing::debug!(error = %err, "sign-in failed");
                    error.set(Some(account_error_to_view(&err)));
                }
            }
        });
    };

    rsx! {
        div { class: "page auth",
            h2 { "Sign in" }
            if !enabled {
                p { class: "notice", "{ViewError::Disabled.message()}" }
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
            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }
            button {
                class: "btn primary",
                disabled: !enabled || busy(),
                onclick: on_submit,
                if busy() { "Signing in..." } else { "Sign in" }
            }
            p {
                "No account yet? "
                Link { to: Route::SignUp {}, "Sign up" }
            }
        }
    }
}
