use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{
    AssignmentView, ClassroomView, DashboardView, FeedbackView, HomeView, QuizView, SignInView,
    SignUpView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/signin", SignInView)] SignIn {},
        #[route("/signup", SignUpView)] SignUp {},
        #[route("/dashboard", DashboardView)] Dashboard {},
        #[route("/classroom/:id", ClassroomView)] Classroom { id: String },
        #[route("/assignment/:id", AssignmentView)] Assignment { id: String },
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/feedback", FeedbackView)] Feedback {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            h1 { "EduAssess" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Dashboard {}, "Dashboard" } }
                li { Link { to: Route::Quiz {}, "MCQ Generator" } }
                li { Link { to: Route::Feedback {}, "Feedback" } }
                li { Link { to: Route::SignIn {}, "Sign in" } }
            }
        }
    }
}
