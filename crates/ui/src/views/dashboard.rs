use dioxus::prelude::*;
use dioxus_router::Link;
use services::ClassroomError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseCardVm, map_course_cards};

#[derive(Clone, Debug, PartialEq)]
struct DashboardData {
    courses: Vec<CourseCardVm>,
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let classroom = ctx.classroom();

    let resource = {
        let classroom = classroom.clone();
        use_resource(move || {
            let classroom = classroom.clone();
            async move {
                let courses = classroom.list_courses().await.map_err(|err| match err {
                    ClassroomError::NotConnected => ViewError::NotConnected,
                    other => {
                        tracing::warn!(error = %other, "course listing failed");
                        ViewError::Unknown
                    }
                })?;
                Ok::<_, ViewError>(DashboardData {
                    courses: map_course_cards(&courses),
                })
            }
        })
    };
    let state = view_state_from_resource(&resource);

    let mut token = use_signal(String::new);
    let mut connect_error = use_signal(|| None::<ViewError>);
    let on_connect = {
        let classroom = classroom.clone();
        move |_| {
            let classroom = classroom.clone();
            let mut resource = resource;
            spawn(async move {
                match classroom.connect(&token()).await {
                    Ok(()) => {
                        token.set(String::new());
                        connect_error.set(None);
                        resource.restart();
                    }
                    Err(_) => connect_error.set(Some(ViewError::Rejected)),
                }
            });
        }
    };
    let on_disconnect = move |_| {
        let classroom = classroom.clone();
        let mut resource = resource;
        spawn(async move {
            if classroom.disconnect().await.is_ok() {
                resource.restart();
            }
        });
    };

    rsx! {
        div { class: "page",
            h2 { "Dashboard" }
            div { class: "actions",
                Link { class: "btn primary", to: Route::Quiz {}, "New quiz" }
                Link { class: "btn", to: Route::Feedback {}, "Content feedback" }
            }

            h3 { "Your courses" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    if data.courses.is_empty() {
                        p { "No courses found." }
                    } else {
                        ul { class: "courses",
                            for course in data.courses {
                                CourseCard { key: "{course.id}", course }
                            }
                        }
                    }
                    button { class: "btn", onclick: on_disconnect, "Disconnect classroom" }
                },
                ViewState::Error(ViewError::NotConnected) => rsx! {
                    p { "{ViewError::NotConnected.message()}" }
                    div { class: "connect",
                        input {
                            r#type: "password",
                            placeholder: "Access token",
                            value: "{token}",
                            oninput: move |evt| token.set(evt.value()),
                        }
                        button { class: "btn primary", onclick: on_connect, "Connect" }
                    }
                    if let Some(err) = connect_error() {
                        p { class: "error", "{err.message()}" }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn CourseCard(course: CourseCardVm) -> Element {
    rsx! {
        li { class: "course",
            Link {
                class: "course-name",
                to: Route::Classroom { id: course.id.clone() },
                "{course.name}"
            }
            span { class: "course-section", "{course.section}" }
        }
    }
}
