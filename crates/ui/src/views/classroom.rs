use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::vm::{AssignmentRowVm, map_classroom, sample_classroom};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClassroomTab {
    Assignments,
    Students,
    Discussions,
}

impl ClassroomTab {
    const ALL: [Self; 3] = [Self::Assignments, Self::Students, Self::Discussions];

    fn label(self) -> &'static str {
        match self {
            Self::Assignments => "Assignments",
            Self::Students => "Students",
            Self::Discussions => "Discussions",
        }
    }
}

#[component]
pub fn ClassroomView(id: String) -> Element {
    let vm = map_classroom(&sample_classroom(&id));
    let mut tab = use_signal(|| ClassroomTab::Assignments);

    rsx! {
        div { class: "page classroom",
            header { class: "page-header",
                h2 { "{vm.title}" }
                p { class: "muted", "{vm.subtitle}" }
                p { class: "muted", "Course ID: {vm.course_id}" }
            }

            div { class: "tabs",
                for option in ClassroomTab::ALL {
                    button {
                        key: "{option.label()}",
                        class: if tab() == option { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(option),
                        "{option.label()}"
                    }
                }
            }

            match tab() {
                ClassroomTab::Assignments => rsx! {
                    ul { class: "rows",
                        for row in vm.assignments.iter().cloned() {
                            AssignmentRow { key: "{row.id}", row }
                        }
                    }
                },
                ClassroomTab::Students => rsx! {
                    ul { class: "rows",
                        for student in vm.students.iter() {
                            li { key: "{student.email}", class: "row",
                                div {
                                    h4 { "{student.name}" }
                                    p { class: "muted", "{student.email}" }
                                }
                                div { class: "row-end",
                                    span { class: "muted", "Progress" }
                                    strong { "{student.progress}" }
                                }
                            }
                        }
                    }
                },
                ClassroomTab::Discussions => rsx! {
                    ul { class: "rows",
                        for discussion in vm.discussions.iter() {
                            li { key: "{discussion.title}", class: "row",
                                div {
                                    h4 { "{discussion.title}" }
                                    p { class: "muted", "{discussion.started_by}" }
                                }
                                div { class: "row-end",
                                    span { class: "muted", "{discussion.replies}" }
                                    p { class: "muted", "{discussion.last_activity}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn AssignmentRow(row: AssignmentRowVm) -> Element {
    rsx! {
        li { class: "row status-{row.status_class}",
            div {
                Link { to: Route::Assignment { id: row.id.clone() }, "{row.title}" }
                p { class: "muted", "{row.due}" }
            }
            div { class: "row-end",
                span { class: "status", "{row.status_label}" }
                if let Some(score) = row.score.as_ref() {
                    strong { class: "score", "{score}" }
                }
            }
        }
    }
}
