use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page landing",
            h2 { "Assess smarter, learn faster" }
            p {
                "Generate multiple-choice quizzes on any topic, check your answers "
                "and get a personalised explanation for every mistake."
            }
            div { class: "actions",
                Link { class: "btn primary", to: Route::Quiz {}, "Try the MCQ generator" }
                Link { class: "btn", to: Route::SignUp {}, "Create an account" }
            }
            ul { class: "features",
                li { "Quizzes generated from a short description" }
                li { "Instant scoring with per-question review" }
                li { "Video recommendations for wrong answers" }
            }
        }
    }
}
