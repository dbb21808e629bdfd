use dioxus::prelude::*;

use crate::vm::{map_assignment, sample_assignment};

#[component]
pub fn AssignmentView(id: String) -> Element {
    let vm = map_assignment(&sample_assignment(&id));

    rsx! {
        div { class: "page assignment",
            header { class: "page-header",
                h2 { "{vm.title}" }
                div { class: "muted meta",
                    span { "{vm.due}" }
                    span { "{vm.time_limit}" }
                }
            }

            div { class: "assignment-grid",
                section { class: "assignment-main",
                    h3 { "Instructions" }
                    p { "{vm.instructions}" }
                    ol {
                        for step in vm.steps.iter() {
                            li { key: "{step}", "{step}" }
                        }
                    }

                    h3 { "Comments" }
                    for comment in vm.comments.iter() {
                        div { class: "comment",
                            span { class: "avatar", "{comment.initials}" }
                            div {
                                strong { "{comment.author}" }
                                p { class: "muted", "{comment.posted}" }
                                p { "{comment.body}" }
                            }
                        }
                    }
                }

                aside { class: "assignment-side",
                    h4 { "Your progress" }
                    div { class: "bar",
                        div { class: "bar-fill", style: "{vm.progress_style}" }
                    }
                    p { class: "muted", "{vm.progress_line}" }

                    h4 { "Assignment status" }
                    ul { class: "problems",
                        for problem in vm.problems.iter() {
                            li {
                                key: "{problem.text}",
                                class: if problem.completed { "done" } else { "pending" },
                                "{problem.text}"
                            }
                        }
                    }

                    h4 { "Class performance" }
                    dl { class: "summary",
                        dt { "Class average" }
                        dd { "{vm.class_average}" }
                        dt { "Your score" }
                        dd { "{vm.your_score}" }
                    }
                }
            }
        }
    }
}
